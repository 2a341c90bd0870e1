use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum number of fields stored inline before spilling to the heap.
/// Most templates carry ≤4 placeholders (e.g. `/users/{id}/posts/{post_id}`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Inline storage for matched fields.
///
/// Field names are `Arc<str>` shared with the compiled route; values are
/// per-request data taken from the path.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Fields extracted by a successful match
///
/// Each field name appears once. When a template repeats a name, the later
/// occurrence overwrites the earlier one (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: ParamVec,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any earlier value for the same name
    pub(crate) fn insert(&mut self, name: Arc<str>, value: String) {
        match self.params.iter().position(|(k, _)| *k == name) {
            Some(i) => self.params[i].1 = value,
            None => self.params.push((name, value)),
        }
    }

    /// Value of field `name`
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate `(name, value)` pairs in first-seen field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Copy into an owned map
    /// Note: This allocates - use get() when only a few fields are needed
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

impl Serialize for RouteParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for (k, v) in &self.params {
            map.serialize_entry(k.as_ref(), v)?;
        }
        map.end()
    }
}
