//! String predicates
//!
//! The primitive checks a rule set is made of: equality, regular-expression
//! match and length bounds. Lengths count Unicode scalar values.

use regex::Regex;

use super::combinators::Predicate;

/// Predicate that checks a string equals a fixed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equals(pub String);

impl Predicate<str> for Equals {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value == self.0
    }
}

/// Create a predicate that checks if a string equals `expected`.
///
/// # Example
///
/// ```rust
/// use tick_of_truth::predicate::*;
///
/// assert!(equals("yes").check("yes"));
/// assert!(!equals("yes").check("Yes"));
/// ```
pub fn equals(expected: impl Into<String>) -> Equals {
    Equals(expected.into())
}

/// Predicate that checks a string matches a regular expression.
#[derive(Clone, Debug)]
pub struct Matches(pub Regex);

impl Predicate<str> for Matches {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks if a string matches `regex`.
///
/// The regex is used as given: anchor it with `^`/`$` to require a full match.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use tick_of_truth::predicate::*;
///
/// let p = matches(Regex::new(r"^[a-z]+$").unwrap());
/// assert!(p.check("abc"));
/// assert!(!p.check("abc1"));
/// ```
pub fn matches(regex: Regex) -> Matches {
    Matches(regex)
}

/// Strict length bounds on a string.
///
/// Each bound is independent and only enforced when set:
/// `less_than` is a strict `<`, `greater_than` a strict `>`, `equal_to` an `==`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthBounds {
    /// Length must be strictly less than this.
    pub less_than: Option<usize>,
    /// Length must be strictly greater than this.
    pub greater_than: Option<usize>,
    /// Length must equal this.
    pub equal_to: Option<usize>,
}

impl LengthBounds {
    /// Returns `true` if no bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.less_than.is_none() && self.greater_than.is_none() && self.equal_to.is_none()
    }
}

impl Predicate<str> for LengthBounds {
    #[inline]
    fn check(&self, value: &str) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let len = value.chars().count();
        self.less_than.is_none_or(|n| len < n)
            && self.greater_than.is_none_or(|n| len > n)
            && self.equal_to.is_none_or(|n| len == n)
    }
}
