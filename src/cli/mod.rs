//! # CLI Module
//!
//! Command-line access to route matching and URL generation.
//!
//! ## Commands
//!
//! ### `match`
//!
//! Match a path (or full URL) and print the extracted fields as JSON:
//!
//! ```bash
//! brrtroute match --template '/user/{id:int}' /user/42
//! # {"id":"42"}
//! ```
//!
//! Exits with status 1 when the path does not match.
//!
//! ### `generate`
//!
//! Build a URL from field values:
//!
//! ```bash
//! brrtroute generate --template '/user/{id}' --field id=42 --query tab=posts
//! # /user/42?tab=posts
//! ```
//!
//! ### `list`
//!
//! List the routes of a route file:
//!
//! ```bash
//! brrtroute list --routes routes.yaml
//! ```
//!
//! `match` and `generate` also accept `--routes <FILE> --name <NAME>` in place of
//! `--template`.

mod commands;


pub use commands::{execute, run_cli, Cli, Commands, RouteSource};
