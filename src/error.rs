use std::fmt;

/// Errors raised while building routes or composing URLs
///
/// Matching never produces an error: a path that does not fit the route (or is
/// rejected by a validator) is reported as `None` by [`crate::route::Route::matches`].
#[derive(Debug)]
pub enum RouteError {
    /// The compiled matcher is not a valid regular expression
    ///
    /// Literal template text is handed to the regex engine as-is, so a template such as
    /// `/files/(draft` cannot be compiled.
    InvalidMatcher {
        /// The template the matcher was built from
        template: String,
        /// Underlying regex compilation error
        source: regex::Error,
    },
    /// The substituted generation template could not be parsed as a URL
    InvalidUri {
        /// The string handed to the URL parser
        uri: String,
        /// Underlying parse error
        source: url::ParseError,
    },
    /// A declarative validator rule in a route file is unusable
    InvalidRule {
        /// Field the rule was declared for
        field: String,
        /// Why the rule was rejected
        reason: String,
    },
    /// A route file could not be read or parsed
    Config {
        /// Path (or `<inline>`) of the route file
        path: String,
        /// Why loading failed
        reason: String,
    },
    /// A route name was requested that the route file does not define
    UnknownRoute {
        /// The requested name
        name: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidMatcher { template, source } => {
                write!(f, "Route template '{}' does not compile: {}", template, source)
            }
            RouteError::InvalidUri { uri, source } => {
                write!(f, "Generated URI '{}' is not a valid URL: {}", uri, source)
            }
            RouteError::InvalidRule { field, reason } => {
                write!(f, "Invalid validator rule for field '{}': {}", field, reason)
            }
            RouteError::Config { path, reason } => {
                write!(f, "Failed to load route file '{}': {}", path, reason)
            }
            RouteError::UnknownRoute { name } => {
                write!(f, "No route named '{}' is defined", name)
            }
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::InvalidMatcher { source, .. } => Some(source),
            RouteError::InvalidUri { source, .. } => Some(source),
            _ => None,
        }
    }
}
