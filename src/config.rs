//! # Route Files
//!
//! Named route templates with declarative validators, loaded from YAML or JSON.
//!
//! ```yaml
//! routes:
//!   user:
//!     template: /user/{id:int}
//!     validators:
//!       id:
//!         - min: 1000
//!   post:
//!     template: /blog/{slug}
//!     validators:
//!       slug:
//!         - pattern: "[a-z_]+"
//!           max_length: 40
//! ```
//!
//! Routes are looked up by name only; a route file is not a routing table.
//! Every constraint in a rule must hold, and every rule of a field must hold.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::RouteError;
use crate::route::{validator, Route, Validator};

/// Parsed route file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesFile {
    #[serde(default)]
    pub routes: BTreeMap<String, RouteDefinition>,
}

/// One named route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDefinition {
    pub template: String,
    #[serde(default)]
    pub validators: BTreeMap<String, Vec<ValidatorRule>>,
}

/// Declarative validator
///
/// Integer bounds apply to the numeric value of the field; a value that is not
/// an integer fails them. `pattern` must match the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Integer value of a field; digit strings too wide for `i128` saturate
fn numeric_value(value: &str) -> Option<i128> {
    match value.parse::<i128>() {
        Ok(n) => Some(n),
        Err(_) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
            Some(i128::MAX)
        }
        Err(_) => None,
    }
}

impl ValidatorRule {
    fn is_empty(&self) -> bool {
        self == &ValidatorRule::default()
    }

    /// Compile into a [`Validator`] for `field`
    pub fn to_validator(&self, field: &str) -> Result<Validator, RouteError> {
        if self.is_empty() {
            return Err(RouteError::InvalidRule {
                field: field.to_string(),
                reason: "rule sets no constraint".to_string(),
            });
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(RouteError::InvalidRule {
                    field: field.to_string(),
                    reason: format!("min {} is greater than max {}", min, max),
                });
            }
        }

        let pattern = match &self.pattern {
            Some(pattern) => Some(Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
                RouteError::InvalidRule {
                    field: field.to_string(),
                    reason: format!("invalid pattern '{}': {}", pattern, e),
                }
            })?),
            None => None,
        };

        let rule = self.clone();
        Ok(validator(move |value| {
            let length = value.chars().count();
            let numeric = || numeric_value(value);

            rule.min
                .map_or(true, |min| numeric().is_some_and(|n| n >= i128::from(min)))
                && rule
                    .max
                    .map_or(true, |max| numeric().is_some_and(|n| n <= i128::from(max)))
                && rule.min_length.map_or(true, |min| length >= min)
                && rule.max_length.map_or(true, |max| length <= max)
                && rule
                    .one_of
                    .as_ref()
                    .map_or(true, |allowed| allowed.iter().any(|a| a == value))
                && pattern.as_ref().map_or(true, |re| re.is_match(value))
        }))
    }
}

impl RouteDefinition {
    /// Compile this definition into a [`Route`]
    pub fn build(&self) -> Result<Route, RouteError> {
        let mut builder = Route::builder(self.template.as_str());
        for (field, rules) in &self.validators {
            let validators = rules
                .iter()
                .map(|rule| rule.to_validator(field))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.validators(field.as_str(), validators);
        }
        builder.build()
    }
}

impl RoutesFile {
    /// Load a route file; `.yaml`/`.yml` files are read as YAML, anything else as JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RouteError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| RouteError::Config {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let file = if is_yaml {
            Self::parse_yaml(&content, &path_str)?
        } else {
            Self::parse_json(&content, &path_str)?
        };

        info!(
            path = %path_str,
            routes_count = file.routes.len(),
            "Route file loaded"
        );
        Ok(file)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, RouteError> {
        Self::parse_yaml(content, "<inline>")
    }

    pub fn from_json_str(content: &str) -> Result<Self, RouteError> {
        Self::parse_json(content, "<inline>")
    }

    fn parse_yaml(content: &str, path: &str) -> Result<Self, RouteError> {
        serde_yaml::from_str(content).map_err(|e| RouteError::Config {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn parse_json(content: &str, path: &str) -> Result<Self, RouteError> {
        serde_json::from_str(content).map_err(|e| RouteError::Config {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Route names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn definition(&self, name: &str) -> Result<&RouteDefinition, RouteError> {
        self.routes.get(name).ok_or_else(|| RouteError::UnknownRoute {
            name: name.to_string(),
        })
    }

    /// Compile the route called `name`
    pub fn build(&self, name: &str) -> Result<Route, RouteError> {
        let route = self.definition(name)?.build()?;
        debug!(name = %name, template = %route.template(), "Route built from file");
        Ok(route)
    }
}
