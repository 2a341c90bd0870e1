//! # Route Module
//!
//! Pattern-based route matching and URL generation from a single template.
//!
//! ## Template Syntax
//!
//! A template is literal text with placeholders:
//!
//! | Placeholder               | Captures         | Extra check                 |
//! |---------------------------|------------------|-----------------------------|
//! | `{name}`, `{name:string}` | `[A-Za-z0-9_]+`  | -                           |
//! | `{name:int}`              | `[0-9]+`         | -                           |
//! | `{name:range(10,20)}`     | `[0-9]+`         | `10 <= value <= 20`         |
//! | `{name:range(10,)}`       | `[0-9]+`         | `value >= 10`               |
//! | `{name:range(,20)}`       | `[0-9]+`         | `value <= 20`               |
//!
//! Unknown types (`{name:uuid}`) behave like `string`. Literal text is passed to
//! the regex engine as-is, so it may carry regex syntax.
//!
//! ## Architecture
//!
//! 1. **Compilation**: placeholders are rewritten in one forward pass into an
//!    anchored regex (`^/user/([0-9]+)$`), an ordered field list and a generation
//!    template (`/user/{id}`). Range placeholders contribute a bounds validator,
//!    appended after any user validators for that field.
//!
//! 2. **Matching**: the path of the input is run against the regex; each
//!    captured value must pass every validator of its field.
//!
//! 3. **Generation**: field values are substituted into the generation template
//!    and the result is parsed as a URL, optionally with a query attached.
//!
//! ## Example
//!
//! ```rust
//! use brrtroute::route::Route;
//! use brrtroute::uri::FieldValues;
//!
//! let route = Route::new("/user/{id:range(10,)}").unwrap();
//! assert!(route.check("/user/42"));
//! assert!(!route.check("/user/5"));
//!
//! let fields = FieldValues::new().with("id", 42);
//! assert_eq!(route.token(Some(&fields), None).unwrap(), "/user/42");
//! ```

mod core;
mod params;
pub mod template;
mod validator;
#[cfg(test)]
mod tests;

pub use self::core::{Route, RouteBuilder};
pub use params::{ParamVec, RouteParams, MAX_INLINE_PARAMS};
pub use template::{placeholders, FieldKind, Placeholder};
pub use validator::{validator, Validator, ValidatorSet};
