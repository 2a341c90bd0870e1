use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Ordered, multi-valued query parameters
///
/// Parsed from and serialized to `application/x-www-form-urlencoded` text via
/// [`url::form_urlencoded`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryData {
    pairs: Vec<(String, String)>,
}

impl QueryData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string; a leading `?` is ignored
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self {
            pairs: url::form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// Build from key/value pairs, keeping their order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        }
    }

    /// Append a value, keeping existing values for the same key
    pub fn add(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Replace every value of `key` with a single value
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.to_string()));
        self
    }

    /// First value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for QueryData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}

/// Query component supplied to URL generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<'a> {
    /// Raw query string such as `q=cats&page=2`
    Raw(&'a str),
    /// Already structured query data, attached unchanged
    Data(QueryData),
    /// Plain key/value pairs
    Map(Vec<(String, String)>),
}

impl Query<'_> {
    /// Normalize into [`QueryData`]
    ///
    /// An empty raw string carries no query and yields `None`, leaving any query
    /// already present in the route template untouched.
    pub fn into_query_data(self) -> Option<QueryData> {
        match self {
            Query::Raw("") => None,
            Query::Raw(raw) => Some(QueryData::parse(raw)),
            Query::Data(data) => Some(data),
            Query::Map(pairs) => Some(QueryData::from_pairs(pairs)),
        }
    }
}

impl<'a> From<&'a str> for Query<'a> {
    fn from(raw: &'a str) -> Self {
        Query::Raw(raw)
    }
}

impl<'a> From<&'a String> for Query<'a> {
    fn from(raw: &'a String) -> Self {
        Query::Raw(raw.as_str())
    }
}

impl From<QueryData> for Query<'_> {
    fn from(data: QueryData) -> Self {
        Query::Data(data)
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Query<'_> {
    fn from(pairs: [(K, V); N]) -> Self {
        Query::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: ToString> From<BTreeMap<K, V>> for Query<'_> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Query::Map(
            map.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// Keys are sorted so the generated query string is stable
impl From<HashMap<String, String>> for Query<'_> {
    fn from(map: HashMap<String, String>) -> Self {
        let mut pairs: Vec<(String, String)> = map.into_iter().collect();
        pairs.sort();
        Query::Map(pairs)
    }
}
