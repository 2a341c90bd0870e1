//! # URI Module
//!
//! URL plumbing shared by route matching and generation:
//!
//! - [`Token`] - the input of a match: raw string or parsed [`url::Url`]
//! - [`QueryData`] / [`Query`] - query parameters attached to generated URLs
//! - [`supplant`] / [`FieldValues`] - `{name}` substitution for generation templates
//! - [`RouteUri`] - a generated URL, absolute or relative
//!
//! Parsing and serialization are delegated to the `url` crate, so generated URLs
//! follow its percent-encoding rules.

mod query;
mod supplant;
mod token;

pub use query::{Query, QueryData};
pub use supplant::{supplant, FieldValues};
pub use token::Token;

use once_cell::sync::Lazy;
use std::fmt;
use url::{ParseError, Position, Url};

use crate::error::RouteError;

/// Base used to resolve relative references; never appears in output
static RELATIVE_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://route.invalid/").expect("relative base should be valid"));

/// How the source string was written, which decides how it is serialized back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    /// `https://example.com/user/42`
    Absolute,
    /// `//example.com/user/42`
    NetworkPath,
    /// `/user/42`
    AbsolutePath,
    /// `user/42`
    RelativePath,
}

/// A URL produced by [`crate::route::Route::uri`]
///
/// Relative references keep their relative form when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteUri {
    url: Url,
    reference: Reference,
}

impl RouteUri {
    /// Parse an absolute URL or a relative reference
    pub fn parse(input: &str) -> Result<Self, RouteError> {
        let invalid = |source| RouteError::InvalidUri {
            uri: input.to_string(),
            source,
        };

        match Url::parse(input) {
            Ok(url) => Ok(Self {
                url,
                reference: Reference::Absolute,
            }),
            Err(ParseError::RelativeUrlWithoutBase) => {
                let reference = if input.starts_with("//") {
                    Reference::NetworkPath
                } else if input.starts_with('/') {
                    Reference::AbsolutePath
                } else {
                    Reference::RelativePath
                };
                let url = RELATIVE_BASE.join(input).map_err(invalid)?;
                Ok(Self { url, reference })
            }
            Err(source) => Err(invalid(source)),
        }
    }

    /// True unless the source carried a scheme
    pub fn is_relative(&self) -> bool {
        self.reference != Reference::Absolute
    }

    /// Underlying parsed URL (relative references are resolved against a
    /// placeholder base)
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    pub fn query_data(&self) -> QueryData {
        QueryData::parse(self.url.query().unwrap_or_default())
    }

    /// Replace the query; empty data removes it
    pub fn set_query_data(&mut self, data: &QueryData) {
        if data.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(&data.to_string()));
        }
    }
}

impl fmt::Display for RouteUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reference {
            Reference::Absolute => f.write_str(self.url.as_str()),
            Reference::NetworkPath => write!(f, "//{}", &self.url[Position::BeforeUsername..]),
            Reference::AbsolutePath => f.write_str(&self.url[Position::BeforePath..]),
            Reference::RelativePath => {
                let rest = &self.url[Position::BeforePath..];
                f.write_str(rest.strip_prefix('/').unwrap_or(rest))
            }
        }
    }
}
