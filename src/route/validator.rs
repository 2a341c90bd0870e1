//! Field validators
//!
//! A validator is a predicate over the raw string captured for a field. Every
//! validator registered for a field must accept the value for a route to match.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Predicate over a captured field value
///
/// Shared (`Arc`) and `Send + Sync` so a compiled [`super::Route`] can be cloned
/// and used from any thread.
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Wrap a closure as a [`Validator`]
///
/// ```
/// use brrtroute::route::validator;
///
/// let above_thousand = validator(|v| v.parse::<u64>().map_or(false, |n| n > 1000));
/// assert!(above_thousand("1001"));
/// assert!(!above_thousand("500"));
/// ```
pub fn validator<F>(f: F) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// One or many validators supplied for a single field
pub enum ValidatorSet {
    One(Validator),
    Many(Vec<Validator>),
}

impl ValidatorSet {
    /// Normalize to an ordered list
    pub fn into_vec(self) -> Vec<Validator> {
        match self {
            ValidatorSet::One(v) => vec![v],
            ValidatorSet::Many(vs) => vs,
        }
    }
}

impl fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorSet::One(_) => write!(f, "ValidatorSet::One"),
            ValidatorSet::Many(vs) => write!(f, "ValidatorSet::Many({})", vs.len()),
        }
    }
}

impl From<Validator> for ValidatorSet {
    fn from(v: Validator) -> Self {
        ValidatorSet::One(v)
    }
}

impl From<Vec<Validator>> for ValidatorSet {
    fn from(vs: Vec<Validator>) -> Self {
        ValidatorSet::Many(vs)
    }
}

/// Unsigned decimal integer of any width, kept as its digit string
///
/// Leading zeros are stripped, so ordering is by digit count first and then
/// lexicographic over the digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits(Box<str>);

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Take the leading decimal digits of `s`
///
/// Returns `None` when `s` does not start with a digit. There is no width
/// limit; `"0042abc"` and `"42"` yield the same value.
pub(crate) fn leading_int(s: &str) -> Option<Digits> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let trimmed = s[..digits].trim_start_matches('0');
    let value = if trimmed.is_empty() { "0" } else { trimmed };
    Some(Digits(value.into()))
}

/// Build the bounds check for a `range(from,to)` placeholder
///
/// `args` is the raw text between the parentheses. Either side may be empty
/// (unbounded); a reversed pair is accepted and normalized. Returns `None` when
/// `args` has fewer than two comma-separated parts or neither side is numeric.
pub(crate) fn range_validator(args: &str) -> Option<Validator> {
    let mut parts = args.split(',');
    let (from, to) = match (parts.next(), parts.next()) {
        (Some(from), Some(to)) => (leading_int(from), leading_int(to)),
        _ => return None,
    };

    match (from, to) {
        (Some(from), Some(to)) => {
            let (min, max) = if from <= to { (from, to) } else { (to, from) };
            Some(validator(move |value| {
                leading_int(value).is_some_and(|n| min <= n && n <= max)
            }))
        }
        (Some(from), None) => Some(validator(move |value| {
            leading_int(value).is_some_and(|n| from <= n)
        })),
        (None, Some(to)) => Some(validator(move |value| {
            leading_int(value).is_some_and(|n| n <= to)
        })),
        (None, None) => None,
    }
}
