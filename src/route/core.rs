//! Route core - template compilation, matching and generation.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use super::params::RouteParams;
use super::template::compile_template;
use super::validator::{validator, Validator, ValidatorSet};
use crate::error::RouteError;
use crate::uri::{supplant, FieldValues, Query, RouteUri, Token};

/// A compiled route template
///
/// Built once from a template such as `/user/{id:int}` and then used to test
/// paths ([`Route::matches`], [`Route::check`]) and to build URLs
/// ([`Route::uri`], [`Route::token`]). A `Route` holds no mutable state and
/// can be shared between threads.
///
/// # Example
///
/// ```
/// use brrtroute::route::Route;
///
/// let route = Route::builder("/user/{id:int}")
///     .validator("id", |v| v.parse::<u64>().map_or(false, |n| n > 1000))
///     .build()
///     .unwrap();
///
/// assert_eq!(route.matches("/user/1234").unwrap().get("id"), Some("1234"));
/// assert!(!route.check("/user/500"));
/// assert!(!route.check("/user/abc"));
/// ```
#[derive(Clone)]
pub struct Route {
    template: String,
    matcher: Regex,
    /// One entry per placeholder occurrence, in capture-group order
    field_order: Vec<Arc<str>>,
    generation_template: String,
    validators: HashMap<String, Vec<Validator>>,
}

impl Route {
    /// Compile a template without user validators
    pub fn new(template: &str) -> Result<Self, RouteError> {
        Self::compile(template, HashMap::new())
    }

    /// Compile a template with per-field validators
    ///
    /// Each entry may be a single validator or a list of them.
    pub fn with_validators<I, K, S>(template: &str, validators: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<ValidatorSet>,
    {
        let validators = validators
            .into_iter()
            .map(|(name, set)| (name.into(), set.into().into_vec()))
            .collect();
        Self::compile(template, validators)
    }

    pub fn builder(template: impl Into<String>) -> RouteBuilder {
        RouteBuilder::new(template)
    }

    fn compile(
        template: &str,
        validators: HashMap<String, Vec<Validator>>,
    ) -> Result<Self, RouteError> {
        let compiled = compile_template(template, validators);

        let matcher = Regex::new(&compiled.matcher).map_err(|source| {
            RouteError::InvalidMatcher {
                template: template.to_string(),
                source,
            }
        })?;

        debug!(
            template = %template,
            matcher = %compiled.matcher,
            generation_template = %compiled.generation_template,
            fields = ?compiled.field_order,
            validated_fields = compiled.validators.len(),
            "Route compiled"
        );

        Ok(Self {
            template: template.to_string(),
            matcher,
            field_order: compiled.field_order,
            generation_template: compiled.generation_template,
            validators: compiled.validators,
        })
    }

    /// True if `token` matches this route and passes every validator
    #[must_use]
    pub fn check<'a>(&self, token: impl Into<Token<'a>>) -> bool {
        self.matches(token).is_some()
    }

    /// Match the path component of `token`
    ///
    /// Query string and fragment are ignored. Returns `None` when the path does
    /// not fit the template or any field fails validation; a template without
    /// placeholders yields empty params on a match.
    #[must_use]
    pub fn matches<'a>(&self, token: impl Into<Token<'a>>) -> Option<RouteParams> {
        let token = token.into();
        self.match_path(&token.path())
    }

    /// Match an already extracted path
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let Some(captures) = self.matcher.captures(path) else {
            trace!(template = %self.template, path = %path, "Route did not match");
            return None;
        };

        let count = (captures.len() - 1).min(self.field_order.len());
        let mut params = RouteParams::new();

        for (i, name) in self.field_order.iter().take(count).enumerate() {
            let value = captures.get(i + 1).map_or("", |m| m.as_str());
            if !self.validate(name, value) {
                debug!(
                    template = %self.template,
                    path = %path,
                    field = %name,
                    value = %value,
                    "Route matched but field was rejected by a validator"
                );
                return None;
            }
            params.insert(Arc::clone(name), value.to_string());
        }

        trace!(
            template = %self.template,
            path = %path,
            params = ?params,
            "Route matched"
        );
        Some(params)
    }

    fn validate(&self, name: &str, value: &str) -> bool {
        self.validators
            .get(name)
            .map_or(true, |checks| checks.iter().all(|check| check(value)))
    }

    /// Build a URL from field values and an optional query
    ///
    /// Every `{name}` marker of the generation template is replaced by the
    /// matching value; markers without a value are kept literally. Values are
    /// not checked against the placeholder types or validators. A non-empty
    /// query replaces any query written in the template.
    pub fn uri(
        &self,
        fields: Option<&FieldValues>,
        query: Option<Query<'_>>,
    ) -> Result<RouteUri, RouteError> {
        let substituted = match fields {
            Some(fields) => supplant(&self.generation_template, fields),
            None => supplant(&self.generation_template, &FieldValues::new()),
        };

        let mut uri = RouteUri::parse(&substituted)?;
        if let Some(data) = query.and_then(Query::into_query_data) {
            uri.set_query_data(&data);
        }

        trace!(template = %self.template, uri = %uri, "Route URI generated");
        Ok(uri)
    }

    /// [`Route::uri`] serialized to a string
    pub fn token(
        &self,
        fields: Option<&FieldValues>,
        query: Option<Query<'_>>,
    ) -> Result<String, RouteError> {
        Ok(self.uri(fields, query)?.to_string())
    }

    /// Same as [`Route::token`]
    pub fn url(
        &self,
        fields: Option<&FieldValues>,
        query: Option<Query<'_>>,
    ) -> Result<String, RouteError> {
        self.token(fields, query)
    }

    /// The template this route was built from
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Compiled matcher source, e.g. `^/user/([0-9]+)$`
    pub fn matcher(&self) -> &str {
        self.matcher.as_str()
    }

    /// Field names in capture order (repeated names appear once per occurrence)
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.field_order.iter().map(|name| name.as_ref())
    }

    /// Template with every placeholder reduced to `{name}`
    pub fn generation_template(&self) -> &str {
        &self.generation_template
    }

    /// Number of validators (user-supplied and range checks) for `name`
    pub fn validator_count(&self, name: &str) -> usize {
        self.validators.get(name).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let validators: HashMap<&str, usize> = self
            .validators
            .iter()
            .map(|(name, checks)| (name.as_str(), checks.len()))
            .collect();
        f.debug_struct("Route")
            .field("template", &self.template)
            .field("matcher", &self.matcher.as_str())
            .field("field_order", &self.field_order)
            .field("generation_template", &self.generation_template)
            .field("validators", &validators)
            .finish()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Builder collecting validators before compiling a [`Route`]
pub struct RouteBuilder {
    template: String,
    validators: HashMap<String, Vec<Validator>>,
}

impl RouteBuilder {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            validators: HashMap::new(),
        }
    }

    /// Add a validator for `name`; validators run in the order they are added
    #[must_use]
    pub fn validator<F>(self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validators(name, validator(check))
    }

    /// Add one or many prepared validators for `name`
    #[must_use]
    pub fn validators(mut self, name: impl Into<String>, set: impl Into<ValidatorSet>) -> Self {
        self.validators
            .entry(name.into())
            .or_default()
            .extend(set.into().into_vec());
        self
    }

    pub fn build(self) -> Result<Route, RouteError> {
        Route::compile(&self.template, self.validators)
    }
}

impl fmt::Debug for RouteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteBuilder")
            .field("template", &self.template)
            .field("validated_fields", &self.validators.len())
            .finish()
    }
}
