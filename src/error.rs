//! Validation outcomes and misuse errors
//!
//! Failing a rule is not exceptional: a [`RuleSet`](crate::RuleSet) reports
//! the first rule category that rejected the field as a
//! [`ValidationError::RuleViolation`], and a selector that matched nothing as
//! [`ValidationError::SelectorNotFound`]. Neither aborts a validation pass.
//!
//! # Examples
//!
//! ```
//! use tick_of_truth::{Rule, ValidationError};
//!
//! let err = ValidationError::RuleViolation {
//!     selector: "#email".to_string(),
//!     rule: Rule::Pattern,
//! };
//!
//! assert_eq!(err.selector(), Some("#email"));
//! assert_eq!(err.to_string(), "#email failed pattern rule");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Rule categories, in the order a [`RuleSet`](crate::RuleSet) evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rule {
    /// Value must equal every configured value.
    ExactMatch,
    /// Value must equal none of the configured values.
    ExcludedMatch,
    /// Value must match every configured pattern.
    Pattern,
    /// Value must match none of the configured patterns.
    ExcludedPattern,
    /// At least one matched field must be checked.
    Checked,
    /// Value length must satisfy every configured bound.
    Length,
}

impl Rule {
    /// Short lowercase name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::ExactMatch => "exact match",
            Rule::ExcludedMatch => "excluded match",
            Rule::Pattern => "pattern",
            Rule::ExcludedPattern => "excluded pattern",
            Rule::Checked => "checked",
            Rule::Length => "length",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a rule set, or the validation entry point, did not pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ValidationError {
    /// The selector resolved to no field at evaluation time.
    SelectorNotFound {
        /// The selector that matched nothing.
        selector: String,
    },
    /// A configured rule category rejected the field.
    RuleViolation {
        /// The selector of the rejected field.
        selector: String,
        /// The first category that failed.
        rule: Rule,
    },
    /// [`validate`](crate::validate) was called without a selector.
    MissingSelector,
}

impl ValidationError {
    /// The selector this error refers to, if any.
    pub fn selector(&self) -> Option<&str> {
        match self {
            ValidationError::SelectorNotFound { selector }
            | ValidationError::RuleViolation { selector, .. } => Some(selector),
            ValidationError::MissingSelector => None,
        }
    }

    /// The failing rule category, for rule violations.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            ValidationError::RuleViolation { rule, .. } => Some(*rule),
            _ => None,
        }
    }

    /// Returns `true` for [`ValidationError::SelectorNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, ValidationError::SelectorNotFound { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::SelectorNotFound { selector } => write!(f, "{} not found", selector),
            ValidationError::RuleViolation { selector, rule } => {
                write!(f, "{} failed {} rule", selector, rule)
            }
            ValidationError::MissingSelector => {
                f.write_str("provide a selector, e.g. validate(\"#email\", ..)")
            }
        }
    }
}

impl StdError for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_found() {
        let err = ValidationError::SelectorNotFound {
            selector: "#missing".to_string(),
        };
        assert_eq!(err.to_string(), "#missing not found");
        assert!(err.is_not_found());
        assert_eq!(err.rule(), None);
    }

    #[test]
    fn test_display_violation() {
        let err = ValidationError::RuleViolation {
            selector: "#age".to_string(),
            rule: Rule::Length,
        };
        assert_eq!(err.to_string(), "#age failed length rule");
        assert_eq!(err.rule(), Some(Rule::Length));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_missing_selector_has_no_selector() {
        let err = ValidationError::MissingSelector;
        assert_eq!(err.selector(), None);
        assert!(err.to_string().contains("provide a selector"));
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn StdError) {}
        takes_error(&ValidationError::MissingSelector);
    }
}
