//! Testing utilities
//!
//! In-memory stand-ins for the host collaborators, plus assertion macros for
//! rule outcomes.
//!
//! # Examples
//!
//! ## MockForm
//!
//! ```rust
//! use tick_of_truth::testing::MockForm;
//! use tick_of_truth::{Field, Validator};
//!
//! let mut builder = Validator::builder();
//! builder.watch("#name").is_not_empty();
//! let validator = builder.build();
//!
//! let mut form = MockForm::new().with_field("#name", Field::text(""));
//! assert!(!validator.check_all(&form.fields, &mut form.presenter));
//! assert_eq!(form.presenter.invalid, vec!["#name"]);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use tick_of_truth::{assert_passes, assert_violation, Field, FieldMap, Rule, RuleSet};
//!
//! let mut form = FieldMap::new();
//! form.insert("#age", Field::text("42"));
//!
//! assert_passes!(RuleSet::builder("#age").is_integer().build().evaluate(&form));
//! assert_violation!(
//!     RuleSet::builder("#age").max_length(2).build().evaluate(&form),
//!     Rule::Length
//! );
//! ```

use crate::field::{Field, FieldMap};
use crate::present::{ClassHost, Presenter};

/// Records every selector a validator marked invalid or valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPresenter {
    /// Selectors passed to `mark_invalid`, in call order.
    pub invalid: Vec<String>,
    /// Selectors passed to `mark_valid`, in call order.
    pub valid: Vec<String>,
}

impl RecordingPresenter {
    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.invalid.clear();
        self.valid.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn mark_invalid(&mut self, selector: &str) {
        self.invalid.push(selector.to_string());
    }

    fn mark_valid(&mut self, selector: &str) {
        self.valid.push(selector.to_string());
    }
}

/// Records [`ClassHost`] calls as short strings such as
/// `"add .form-group error #email"` or `"hide .label-error #email"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    /// Calls in order.
    pub calls: Vec<String>,
}

impl ClassHost for RecordingHost {
    fn add_class_to_closest(&mut self, selector: &str, ancestor: &str, class: &str) {
        self.calls
            .push(format!("add {} {} {}", ancestor, class, selector));
    }

    fn remove_class_from_closest(&mut self, selector: &str, ancestor: &str, class: &str) {
        self.calls
            .push(format!("remove {} {} {}", ancestor, class, selector));
    }

    fn set_sibling_visible(&mut self, selector: &str, sibling: &str, visible: bool) {
        let action = if visible { "show" } else { "hide" };
        self.calls.push(format!("{} {} {}", action, sibling, selector));
    }
}

/// A form's fields and a presenter recording what was marked.
#[derive(Debug, Clone, Default)]
pub struct MockForm {
    /// Field state read by the validator.
    pub fields: FieldMap,
    /// Presentation calls made by the validator.
    pub presenter: RecordingPresenter,
}

impl MockForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field under `selector`.
    pub fn with_field(mut self, selector: impl Into<String>, field: Field) -> Self {
        self.fields.insert(selector, field);
        self
    }
}

/// Assert that an evaluation passed.
///
/// # Example
///
/// ```rust
/// use tick_of_truth::assert_passes;
/// use tick_of_truth::ValidationError;
///
/// let ok: Result<(), ValidationError> = Ok(());
/// assert_passes!(ok);
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected pass, got: {:?}", e);
            }
        }
    };
}

/// Assert that an evaluation failed on a specific rule category.
///
/// # Example
///
/// ```rust
/// use tick_of_truth::{assert_violation, Rule, ValidationError};
///
/// let failed: Result<(), ValidationError> = Err(ValidationError::RuleViolation {
///     selector: "#a".to_string(),
///     rule: Rule::Checked,
/// });
/// assert_violation!(failed, Rule::Checked);
/// ```
#[macro_export]
macro_rules! assert_violation {
    ($result:expr, $rule:expr) => {
        match $result {
            ::std::result::Result::Err($crate::ValidationError::RuleViolation { rule, .. }) => {
                assert_eq!(rule, $rule);
            }
            other => {
                panic!("Expected {:?} violation, got: {:?}", $rule, other);
            }
        }
    };
}
