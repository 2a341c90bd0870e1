use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt::Display;

static MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]*)\}").expect("marker regex should be valid"));

/// Field values used to fill a generation template
///
/// Values are stringified on insertion, so numbers and strings mix freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> &mut Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}

impl From<HashMap<String, String>> for FieldValues {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

/// Replace every `{name}` marker in `template` with its value
///
/// Markers without a value are left in place verbatim.
///
/// ```
/// use brrtroute::uri::{supplant, FieldValues};
///
/// let values = FieldValues::new().with("id", 42);
/// assert_eq!(supplant("/user/{id}/{tab}", &values), "/user/42/{tab}");
/// ```
pub fn supplant(template: &str, values: &FieldValues) -> String {
    MARKER_REGEX
        .replace_all(template, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
