//! Form-level validation
//!
//! A [`Validator`] owns the rule sets of one form, in the order they were
//! registered. [`Validator::check_all`] checks every rule set, marks each
//! field invalid or valid through a [`Presenter`], and reports whether the
//! whole form passed. A failing rule set never stops the pass, so every field's
//! presentation is refreshed on every call.
//!
//! # Example
//!
//! ```rust
//! use tick_of_truth::{Field, FieldMap, NoPresenter, Validator};
//!
//! let mut form = Validator::builder();
//! form.watch("#email").is_email();
//! form.watch("#terms").must_be_checked();
//! let validator = form.build();
//!
//! let mut fields = FieldMap::new();
//! fields.insert("#email", Field::text("a@b.co"));
//! fields.insert("#terms", Field::checkbox("yes", false));
//! assert!(!validator.check_all(&fields, &mut NoPresenter));
//!
//! fields.set_checked("#terms", "yes", true);
//! assert!(validator.check_all(&fields, &mut NoPresenter));
//! ```

use crate::error::ValidationError;
use crate::field::FieldSource;
use crate::present::Presenter;
use crate::rules::{RuleSet, RuleSetBuilder};

/// Collects rule sets for a [`Validator`].
#[derive(Debug, Clone, Default)]
pub struct ValidatorBuilder {
    rule_sets: Vec<RuleSetBuilder>,
}

impl ValidatorBuilder {
    /// Create a builder with no rule sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new rule set for `selector` and return it for configuration.
    ///
    /// The selector is not looked up until the form is checked. Watching the
    /// same selector twice creates two independent rule sets.
    pub fn watch(&mut self, selector: impl Into<String>) -> &mut RuleSetBuilder {
        self.rule_sets.push(RuleSet::builder(selector));
        let last = self.rule_sets.len() - 1;
        &mut self.rule_sets[last]
    }

    /// Number of registered rule sets.
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    /// Returns `true` if nothing has been watched.
    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }

    /// Freeze every rule set into a [`Validator`].
    pub fn build(&self) -> Validator {
        Validator {
            rule_sets: self.rule_sets.iter().map(RuleSetBuilder::build).collect(),
        }
    }
}

/// Start a validator with a first rule set for `selector`.
///
/// `configure` receives the rule set's builder. A blank selector is a misuse:
/// it is logged and no builder is returned.
///
/// # Example
///
/// ```rust
/// use tick_of_truth::{validate, ValidationError};
///
/// let mut form = validate("#email", |rules| {
///     rules.is_email();
/// })
/// .unwrap();
/// form.watch("#name").is_not_empty();
/// let validator = form.build();
/// assert_eq!(validator.len(), 2);
///
/// assert_eq!(
///     validate("", |_| {}).unwrap_err(),
///     ValidationError::MissingSelector
/// );
/// ```
pub fn validate<F>(selector: &str, configure: F) -> Result<ValidatorBuilder, ValidationError>
where
    F: FnOnce(&mut RuleSetBuilder),
{
    if selector.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Provide a selector e.g. validate(\"#email\", ..)");
        #[cfg(not(feature = "tracing"))]
        eprintln!("Provide a selector e.g. validate(\"#email\", ..)");
        return Err(ValidationError::MissingSelector);
    }

    let mut builder = ValidatorBuilder::new();
    configure(builder.watch(selector));
    Ok(builder)
}

/// The frozen rule sets of one form.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rule_sets: Vec<RuleSet>,
}

impl Validator {
    /// Start configuring a validator.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Rule sets in registration order.
    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.rule_sets
    }

    /// Number of rule sets.
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    /// Returns `true` if there are no rule sets.
    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }

    /// Check every rule set and update presentation for each.
    ///
    /// Returns `true` only if every rule set passed.
    pub fn check_all<S, P>(&self, source: &S, presenter: &mut P) -> bool
    where
        S: FieldSource + ?Sized,
        P: Presenter + ?Sized,
    {
        self.run(source, presenter).is_valid()
    }

    /// Check every rule set without touching presentation.
    pub fn check<S>(&self, source: &S) -> bool
    where
        S: FieldSource + ?Sized,
    {
        self.rule_sets.iter().all(|rules| rules.check(source))
    }

    /// Check every rule set, update presentation for each, and collect the outcomes.
    pub fn run<S, P>(&self, source: &S, presenter: &mut P) -> Report
    where
        S: FieldSource + ?Sized,
        P: Presenter + ?Sized,
    {
        let outcomes: Vec<Outcome> = self
            .rule_sets
            .iter()
            .map(|rules| {
                let result = rules.evaluate(source);
                match &result {
                    Ok(()) => rules.clear_error_state(presenter),
                    Err(_err) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(selector = rules.selector(), rule = ?_err.rule(), "rule set failed");
                        rules.apply_error_state(presenter);
                    }
                }
                Outcome {
                    selector: rules.selector().to_string(),
                    result,
                }
            })
            .collect();

        let report = Report { outcomes };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            checked = report.len(),
            failed = report.failures().count(),
            "validation pass complete"
        );
        report
    }
}

/// The outcome of one rule set in a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// The rule set's selector.
    pub selector: String,
    /// `Ok` if every rule passed.
    pub result: Result<(), ValidationError>,
}

impl Outcome {
    /// Returns `true` if the rule set passed.
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-rule-set outcomes of one validation pass, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    /// Returns `true` if every rule set passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    /// All outcomes.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Errors of the rule sets that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ValidationError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    /// Number of rule sets checked.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns `true` if nothing was checked.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Turn the report into a `Result`, keeping every failure.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        let failures: Vec<ValidationError> = self
            .outcomes
            .into_iter()
            .filter_map(|o| o.result.err())
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rule;
    use crate::field::Field;
    use crate::testing::MockForm;

    #[test]
    fn test_empty_validator_passes() {
        let validator = Validator::builder().build();
        let mut form = MockForm::new();
        assert!(validator.is_empty());
        assert!(validator.check_all(&form.fields, &mut form.presenter));
        assert!(form.presenter.invalid.is_empty());
    }

    #[test]
    fn test_watch_keeps_registration_order_and_duplicates() {
        let mut builder = Validator::builder();
        builder.watch("#b");
        builder.watch("#a");
        builder.watch("#b").is("x");
        let validator = builder.build();

        let selectors: Vec<&str> = validator.rule_sets().iter().map(RuleSet::selector).collect();
        assert_eq!(selectors, vec!["#b", "#a", "#b"]);
    }

    #[test]
    fn test_duplicate_selectors_are_independent() {
        let mut builder = Validator::builder();
        builder.watch("#a").is_not_empty();
        builder.watch("#a").max_length(3);
        let validator = builder.build();

        let mut form = MockForm::new();
        form.fields.insert("#a", Field::text("long"));

        let report = validator.run(&form.fields, &mut form.presenter);
        assert!(report.outcomes()[0].passed());
        assert!(!report.outcomes()[1].passed());
        assert_eq!(form.presenter.valid, vec!["#a"]);
        assert_eq!(form.presenter.invalid, vec!["#a"]);
    }

    #[test]
    fn test_missing_field_does_not_stop_the_pass() {
        let mut builder = Validator::builder();
        builder.watch("#missing");
        builder.watch("#present");
        let validator = builder.build();

        let mut form = MockForm::new();
        form.fields.insert("#present", Field::text(""));

        let report = validator.run(&form.fields, &mut form.presenter);
        assert!(!report.is_valid());
        assert_eq!(report.len(), 2);
        assert!(report.outcomes()[0].result.as_ref().unwrap_err().is_not_found());
        assert_eq!(form.presenter.invalid, vec!["#missing"]);
        assert_eq!(form.presenter.valid, vec!["#present"]);
    }

    #[test]
    fn test_check_does_not_present() {
        let mut builder = Validator::builder();
        builder.watch("#a").is("1");
        let validator = builder.build();

        let mut form = MockForm::new();
        form.fields.insert("#a", Field::text("2"));
        assert!(!validator.check(&form.fields));
        assert!(form.presenter.invalid.is_empty());
        assert!(form.presenter.valid.is_empty());
    }

    #[test]
    fn test_report_into_result() {
        let mut builder = Validator::builder();
        builder.watch("#a").is("1");
        builder.watch("#b").is("2");
        let validator = builder.build();

        let mut form = MockForm::new();
        form.fields.insert("#a", Field::text("0"));
        form.fields.insert("#b", Field::text("2"));

        let errors = validator
            .run(&form.fields, &mut form.presenter)
            .into_result()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RuleViolation {
                selector: "#a".to_string(),
                rule: Rule::ExactMatch,
            }]
        );
    }

    #[test]
    fn test_validate_registers_first_rule_set() {
        let builder = validate("#email", |rules| {
            rules.is_email();
        })
        .unwrap();
        assert_eq!(builder.len(), 1);

        let validator = builder.build();
        assert_eq!(validator.rule_sets()[0].selector(), "#email");
        assert!(!validator.rule_sets()[0].is_unconstrained());
    }

    #[test]
    fn test_validate_rejects_blank_selector() {
        assert_eq!(
            validate("   ", |_| {}).unwrap_err(),
            ValidationError::MissingSelector
        );
    }

    #[test]
    fn test_builder_is_reusable() {
        let mut builder = Validator::builder();
        builder.watch("#a");
        let first = builder.build();
        builder.watch("#b");
        let second = builder.build();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serializes() {
        let mut builder = Validator::builder();
        builder.watch("#a").is_not_empty();
        let validator = builder.build();

        let mut form = MockForm::new();
        form.fields.insert("#a", Field::text(""));
        let report = validator.run(&form.fields, &mut form.presenter);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][0]["selector"], "#a");
        assert_eq!(
            json["outcomes"][0]["result"]["Err"]["rule"],
            "excluded_pattern"
        );
    }

    #[cfg(feature = "tracing")]
    mod diagnostics {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_blank_selector_is_logged() {
            assert!(validate("", |_| {}).is_err());
            assert!(logs_contain("Provide a selector"));
        }

        #[test]
        #[traced_test]
        fn test_missing_selector_is_reported_once_per_pass() {
            let mut builder = Validator::builder();
            builder.watch("#x").is_not_empty();
            let validator = builder.build();

            let mut form = MockForm::new();
            assert!(!validator.check_all(&form.fields, &mut form.presenter));

            assert!(logs_contain("rule set failed"));
            logs_assert(|lines: &[&str]| {
                match lines.iter().filter(|l| l.contains("#x not found")).count() {
                    1 => Ok(()),
                    n => Err(format!("expected one diagnostic, got {}", n)),
                }
            });
        }
    }
}
