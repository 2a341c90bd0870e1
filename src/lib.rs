//! # brrtroute
//!
//! **brrtroute** compiles URL route templates with named, typed placeholders into a
//! matcher and a generator that agree with each other.
//!
//! ## Overview
//!
//! A single template such as `/user/{id:range(10,)}` yields:
//!
//! - a matcher: an anchored regex plus per-field validators, used to test a path and
//!   extract its fields
//! - a generator: a normalized template (`/user/{id}`) used to build concrete URLs
//!   from field values, with an optional query string
//!
//! ## Architecture
//!
//! - **[`route`]** - template compilation, [`route::Route`], validators, matched params
//! - **[`uri`]** - input tokens, query data, `{name}` substitution, generated URLs
//! - **[`config`]** - named routes with declarative validators from YAML/JSON files
//! - **[`logging`]** - `tracing` subscriber setup driven by environment variables
//! - **[`cli`]** - the `brrtroute` command-line tool
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Route
//!     participant Template as route::template
//!     participant Uri as uri
//!
//!     Caller->>Route: Route::new("/user/{id:int}")
//!     Route->>Template: compile_template
//!     Template-->>Route: matcher, field order,<br/>generation template, validators
//!
//!     Caller->>Route: matches("/user/42?tab=posts")
//!     Route->>Uri: Token::path()
//!     Uri-->>Route: "/user/42"
//!     Route->>Route: regex captures + validators
//!     Route-->>Caller: Some({id: "42"})
//!
//!     Caller->>Route: token({id: 42}, q=cats)
//!     Route->>Uri: supplant + RouteUri::parse
//!     Uri-->>Route: RouteUri
//!     Route-->>Caller: "/user/42?q=cats"
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use brrtroute::route::Route;
//! use brrtroute::uri::{FieldValues, Query};
//!
//! let route = Route::builder("/user/{id:int}")
//!     .validator("id", |v| v.parse::<u64>().map_or(false, |n| n > 1000))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(route.matches("/user/4242").unwrap().get("id"), Some("4242"));
//! assert!(route.matches("/user/500").is_none());
//!
//! let fields = FieldValues::new().with("id", 4242);
//! let url = route.token(Some(&fields), Some(Query::from([("tab", "posts")]))).unwrap();
//! assert_eq!(url, "/user/4242?tab=posts");
//! ```
//!
//! ## Runtime Considerations
//!
//! Routes are immutable after construction and `Send + Sync`; share one instance
//! across threads freely. Matching and generation are synchronous and never
//! block.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod route;
pub mod uri;

pub use config::{RouteDefinition, RoutesFile, ValidatorRule};
pub use error::RouteError;
pub use route::{Route, RouteBuilder, RouteParams};
pub use uri::{FieldValues, Query, QueryData, RouteUri, Token};
