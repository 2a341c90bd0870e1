//! Route template compilation
//!
//! Turns a template such as `/user/{id:range(10,)}/{slug}` into the pieces a
//! [`super::Route`] needs: the matcher source, the ordered field names, the
//! generation template (`/user/{id}/{slug}`) and the per-field validators.
//!
//! Placeholders are processed in a single forward pass. Each occurrence is
//! rewritten exactly once in the matcher and once in the generation template,
//! so the capture-group order always equals the field order.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use super::validator::{range_validator, Validator};

/// Placeholder grammar: `{name}`, `{name:type}` or `{name:type(args)}`
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+)(?::([A-Za-z0-9_]+)(?:\(([A-Za-z0-9_,]+)\))?)?\}")
        .expect("placeholder regex should be valid")
});

/// Capture used for `int` and `range` placeholders
pub const DIGITS_CAPTURE: &str = "([0-9]+)";

/// Capture used for `string` and unrecognized placeholder types
pub const WORD_CAPTURE: &str = "([A-Za-z0-9_]+)";

/// Type of a placeholder, selecting its capture pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `{name}` / `{name:string}`, and any unknown type keyword
    String,
    /// `{name:int}`
    Int,
    /// `{name:range(from,to)}`
    Range,
}

impl FieldKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "int" => FieldKind::Int,
            "range" => FieldKind::Range,
            _ => FieldKind::String,
        }
    }

    /// Regex fragment capturing one value of this kind
    pub fn capture(self) -> &'static str {
        match self {
            FieldKind::Int | FieldKind::Range => DIGITS_CAPTURE,
            FieldKind::String => WORD_CAPTURE,
        }
    }
}

/// One placeholder occurrence found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    pub name: &'t str,
    pub kind: FieldKind,
    /// Raw text between the parentheses, if any
    pub args: Option<&'t str>,
}

impl<'t> Placeholder<'t> {
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let name = caps.get(1)?.as_str();
        let kind = caps
            .get(2)
            .map_or(FieldKind::String, |m| FieldKind::parse(m.as_str()));
        let args = caps.get(3).map(|m| m.as_str());
        Some(Self { name, kind, args })
    }
}

/// List every placeholder of `template` in declaration order
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|caps| Placeholder::from_captures(&caps))
        .collect()
}

/// Result of compiling a template; input to [`super::Route`]
pub(crate) struct CompiledTemplate {
    /// Anchored matcher source (`^...$`), not yet compiled
    pub matcher: String,
    pub field_order: Vec<Arc<str>>,
    pub generation_template: String,
    pub validators: HashMap<String, Vec<Validator>>,
}

/// Append literal template text to the matcher source
///
/// Braces left over from malformed tokens are matched literally; everything else
/// is handed to the regex engine unchanged.
fn push_literal(matcher: &mut String, literal: &str) {
    for c in literal.chars() {
        if c == '{' || c == '}' {
            matcher.push('\\');
        }
        matcher.push(c);
    }
}

/// Compile `template`, appending range checks to the user `validators`
pub(crate) fn compile_template(
    template: &str,
    mut validators: HashMap<String, Vec<Validator>>,
) -> CompiledTemplate {
    let mut matcher = String::with_capacity(template.len() + 16);
    matcher.push('^');
    let mut generation_template = String::with_capacity(template.len());
    let mut field_order = Vec::with_capacity(template.matches('{').count());
    let mut cursor = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let (Some(token), Some(placeholder)) = (caps.get(0), Placeholder::from_captures(&caps))
        else {
            continue;
        };

        let literal = &template[cursor..token.start()];
        push_literal(&mut matcher, literal);
        generation_template.push_str(literal);

        matcher.push_str(placeholder.kind.capture());

        if placeholder.kind == FieldKind::Range {
            if let Some(args) = placeholder.args {
                match range_validator(args) {
                    Some(check) => validators
                        .entry(placeholder.name.to_string())
                        .or_default()
                        .push(check),
                    None => warn!(
                        template = %template,
                        field = %placeholder.name,
                        args = %args,
                        "Ignoring range arguments without a numeric bound"
                    ),
                }
            }
        }

        generation_template.push('{');
        generation_template.push_str(placeholder.name);
        generation_template.push('}');

        field_order.push(Arc::from(placeholder.name));
        cursor = token.end();
    }

    let rest = &template[cursor..];
    push_literal(&mut matcher, rest);
    matcher.push('$');
    generation_template.push_str(rest);

    CompiledTemplate {
        matcher,
        field_order,
        generation_template,
        validators,
    }
}
