//! # Tick of Truth
//!
//! Declarative form-field validation.
//!
//! Attach chained rules to field selectors, then check the whole form in one
//! pass. The evaluation core is pure: it reads fields through a
//! [`FieldSource`] and reports outcomes to a [`Presenter`], both provided by
//! the host (a browser binding, a terminal UI, a test).
//!
//! ## Quick Example
//!
//! ```rust
//! use tick_of_truth::testing::MockForm;
//! use tick_of_truth::{Field, Validator};
//!
//! let mut form = Validator::builder();
//! form.watch("#email").is_email();
//! form.watch("#password").is_not_empty().min_length(7);
//! form.watch("#terms").must_be_checked();
//! let validator = form.build();
//!
//! let mut page = MockForm::new()
//!     .with_field("#email", Field::text("user@example.com"))
//!     .with_field("#password", Field::text("hunter2"))
//!     .with_field("#terms", Field::checkbox("yes", true));
//!
//! // "hunter2" is 7 characters, and min_length is strict
//! assert!(!validator.check_all(&page.fields, &mut page.presenter));
//! assert_eq!(page.presenter.invalid, vec!["#password"]);
//! assert_eq!(page.presenter.valid, vec!["#email", "#terms"]);
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): diagnostics go through `tracing`; without it they
//!   are written to stderr.
//! - `serde`: `Serialize`/`Deserialize` for configuration, field snapshots
//!   and reports.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod field;
pub mod predicate;
pub mod present;
pub mod rules;
pub mod testing;
pub mod validator;

// Re-exports
pub use error::{Rule, ValidationError};
pub use field::{Field, FieldHandle, FieldMap, FieldSource};
pub use present::{ClassHost, ClassPresenter, ErrorStyle, NoPresenter, Presenter};
pub use rules::{RuleSet, RuleSetBuilder, Scope};
pub use validator::{validate, Outcome, Report, Validator, ValidatorBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Rule, ValidationError};
    pub use crate::field::{Field, FieldHandle, FieldMap, FieldSource};
    pub use crate::present::{ClassHost, ClassPresenter, ErrorStyle, NoPresenter, Presenter};
    pub use crate::rules::{RuleSet, RuleSetBuilder, Scope};
    pub use crate::validator::{validate, Report, Validator, ValidatorBuilder};
}
