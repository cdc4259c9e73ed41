//! Named field patterns
//!
//! Compiled once and shared; every accessor hands out a cheap clone of the
//! compiled [`Regex`].
//!
//! Digits are spelled `[0-9]` rather than `\d` so that only ASCII digits are
//! accepted.

use std::sync::LazyLock;

use regex::Regex;

/// Optional leading `+` signs, then 11 or 12 digits.
pub const PHONE_PATTERN: &str = r"^(\+)*[0-9]{11,12}$";

/// Non-blank text, `@`, non-blank text, `.`, non-blank text.
pub const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

/// A single `@` with non-blank text on both sides, no dot required.
pub const EMAIL_LIKE_PATTERN: &str = r"^[^@\s]+@[^@\s]+$";

/// Any first character except `0`, followed by one or more digits.
///
/// This is not a conventional integer check: `"0"` and single digits are
/// rejected and the first character need not be a digit at all.
pub const INTEGER_PATTERN: &str = r"^[^0][0-9]+$";

/// Optionally signed decimal with an optional exponent.
pub const NUMBER_PATTERN: &str = r"^[+\-]?[0-9]*\.?[0-9]+(?:[Ee][+\-]?[0-9]+)?$";

/// UK postcode, either ASCII case, optional single space before the inward code.
///
/// Letters are ASCII only: `(?i)` would also fold in U+212A and U+017F.
pub const POSTCODE_PATTERN: &str = r"^[A-Za-z]{1,2}[0-9]{1,2} ?[0-9][A-Za-z]{2}$";

/// UK driving licence number shape.
pub const DRIVING_LICENCE_PATTERN: &str = r"^[a-zA-Z]{5}[0-9]{6}[a-zA-Z]{2}[0-9][a-zA-Z]{2}$";

/// The empty string.
pub const EMPTY_PATTERN: &str = r"^$";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| compile(PHONE_PATTERN));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_PATTERN));
static EMAIL_LIKE_RE: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_LIKE_PATTERN));
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| compile(INTEGER_PATTERN));
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| compile(NUMBER_PATTERN));
static POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| compile(POSTCODE_PATTERN));
static DRIVING_LICENCE_RE: LazyLock<Regex> = LazyLock::new(|| compile(DRIVING_LICENCE_PATTERN));
static EMPTY_RE: LazyLock<Regex> = LazyLock::new(|| compile(EMPTY_PATTERN));

/// Compiled [`PHONE_PATTERN`].
pub fn phone() -> Regex {
    PHONE_RE.clone()
}

/// Compiled [`EMAIL_PATTERN`].
///
/// # Example
///
/// ```rust
/// use tick_of_truth::predicate::patterns;
///
/// assert!(patterns::email().is_match("a@b.co"));
/// assert!(!patterns::email().is_match("not-an-email"));
/// ```
pub fn email() -> Regex {
    EMAIL_RE.clone()
}

/// Compiled [`EMAIL_LIKE_PATTERN`].
pub fn email_like() -> Regex {
    EMAIL_LIKE_RE.clone()
}

/// Compiled [`INTEGER_PATTERN`].
pub fn integer() -> Regex {
    INTEGER_RE.clone()
}

/// Compiled [`NUMBER_PATTERN`].
pub fn number() -> Regex {
    NUMBER_RE.clone()
}

/// Compiled [`POSTCODE_PATTERN`].
pub fn postcode() -> Regex {
    POSTCODE_RE.clone()
}

/// Compiled [`DRIVING_LICENCE_PATTERN`].
pub fn driving_licence() -> Regex {
    DRIVING_LICENCE_RE.clone()
}

/// Compiled [`EMPTY_PATTERN`].
pub fn empty() -> Regex {
    EMPTY_RE.clone()
}
