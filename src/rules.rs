//! Per-field rule sets
//!
//! A [`RuleSet`] is the frozen list of rules bound to one field selector. It
//! is configured through a [`RuleSetBuilder`], usually obtained from
//! [`ValidatorBuilder::watch`](crate::ValidatorBuilder::watch), and evaluated
//! against a [`FieldSource`] any number of times without changing.
//!
//! Rule categories are checked in a fixed order and evaluation stops at the
//! first failing category:
//!
//! 1. exact matches (the value must equal every configured value)
//! 2. excluded matches (the value must equal none)
//! 3. patterns (the value must match all)
//! 4. excluded patterns (the value must match none)
//! 5. checked state (some matched field must be checked)
//! 6. length bounds
//!
//! A category with nothing configured passes.
//!
//! # Example
//!
//! ```rust
//! use tick_of_truth::{Field, FieldMap, Rule, RuleSet};
//!
//! let rules = RuleSet::builder("#postcode").is_postcode().max_length(9).build();
//!
//! let mut form = FieldMap::new();
//! form.insert("#postcode", Field::text("B33 8TH"));
//! assert!(rules.check(&form));
//!
//! form.set_value("#postcode", "nowhere");
//! assert_eq!(rules.evaluate(&form).unwrap_err().rule(), Some(Rule::Pattern));
//! ```

use regex::Regex;

use crate::error::{Rule, ValidationError};
use crate::field::{FieldHandle, FieldSource};
use crate::predicate::{
    equals, matches, patterns, AllOf, Equals, LengthBounds, Matches, NoneOf, Predicate,
};
use crate::present::Presenter;

/// Which matched fields value-based rules read.
///
/// The checked-state rule always looks at every matched field, whatever the
/// scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Scope {
    /// Only the first matched field's value is checked.
    #[default]
    FirstMatch,
    /// Every matched field's value must pass.
    AllMatches,
}

/// Rules bound to one field selector.
#[derive(Debug, Clone)]
pub struct RuleSet {
    selector: String,
    exact_matches: AllOf<Equals>,
    excluded_matches: NoneOf<Equals>,
    patterns: AllOf<Matches>,
    excluded_patterns: NoneOf<Matches>,
    must_be_checked: bool,
    length: LengthBounds,
    scope: Scope,
}

impl RuleSet {
    /// Start configuring rules for `selector`.
    pub fn builder(selector: impl Into<String>) -> RuleSetBuilder {
        RuleSetBuilder {
            rules: RuleSet {
                selector: selector.into(),
                exact_matches: AllOf::default(),
                excluded_matches: NoneOf::default(),
                patterns: AllOf::default(),
                excluded_patterns: NoneOf::default(),
                must_be_checked: false,
                length: LengthBounds::default(),
                scope: Scope::default(),
            },
        }
    }

    /// The selector these rules apply to.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Which matched fields value-based rules read.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Configured length bounds.
    pub fn length(&self) -> LengthBounds {
        self.length
    }

    /// Whether a matched field must be checked.
    pub fn requires_checked(&self) -> bool {
        self.must_be_checked
    }

    /// Returns `true` if no rule of any category is configured.
    pub fn is_unconstrained(&self) -> bool {
        self.exact_matches.is_empty()
            && self.excluded_matches.is_empty()
            && self.patterns.is_empty()
            && self.excluded_patterns.is_empty()
            && !self.must_be_checked
            && self.length.is_unbounded()
    }

    /// Evaluate the rules against the fields `source` currently holds.
    ///
    /// A selector that matches nothing is logged and reported as
    /// [`ValidationError::SelectorNotFound`]. Otherwise the first failing
    /// category is reported as [`ValidationError::RuleViolation`].
    pub fn evaluate<S>(&self, source: &S) -> Result<(), ValidationError>
    where
        S: FieldSource + ?Sized,
    {
        let fields = source.resolve(&self.selector);
        if fields.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!(selector = %self.selector, "{} not found", self.selector);
            #[cfg(not(feature = "tracing"))]
            eprintln!("{} not found", self.selector);
            return Err(ValidationError::SelectorNotFound {
                selector: self.selector.clone(),
            });
        }

        match self.first_failure(&fields) {
            None => Ok(()),
            Some(rule) => Err(ValidationError::RuleViolation {
                selector: self.selector.clone(),
                rule,
            }),
        }
    }

    /// Returns `true` if every rule passes. See [`RuleSet::evaluate`].
    pub fn check<S>(&self, source: &S) -> bool
    where
        S: FieldSource + ?Sized,
    {
        self.evaluate(source).is_ok()
    }

    /// Show this rule set's field as invalid.
    pub fn apply_error_state<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        presenter.mark_invalid(&self.selector);
    }

    /// Clear the invalid indication from this rule set's field.
    pub fn clear_error_state<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        presenter.mark_valid(&self.selector);
    }

    fn first_failure<H: FieldHandle>(&self, fields: &[H]) -> Option<Rule> {
        let values: Vec<String> = match self.scope {
            Scope::FirstMatch => fields.iter().take(1).map(FieldHandle::value).collect(),
            Scope::AllMatches => fields.iter().map(FieldHandle::value).collect(),
        };

        if !holds(&self.exact_matches, &values) {
            return Some(Rule::ExactMatch);
        }
        if !holds(&self.excluded_matches, &values) {
            return Some(Rule::ExcludedMatch);
        }
        if !holds(&self.patterns, &values) {
            return Some(Rule::Pattern);
        }
        if !holds(&self.excluded_patterns, &values) {
            return Some(Rule::ExcludedPattern);
        }
        if self.must_be_checked && !fields.iter().any(FieldHandle::is_checked) {
            return Some(Rule::Checked);
        }
        if !holds(&self.length, &values) {
            return Some(Rule::Length);
        }
        None
    }
}

fn holds(predicate: &dyn Predicate<str>, values: &[String]) -> bool {
    values.iter().all(|v| predicate.check(v))
}

/// Fluent configuration for a [`RuleSet`].
///
/// Every method returns `&mut Self` so calls chain; [`RuleSetBuilder::build`]
/// takes a frozen copy.
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    /// The selector being configured.
    pub fn selector(&self) -> &str {
        &self.rules.selector
    }

    /// Require the value to equal `value`.
    ///
    /// Repeated calls all apply: the value must equal every one of them.
    pub fn is(&mut self, value: impl Into<String>) -> &mut Self {
        self.rules.exact_matches.push(equals(value));
        self
    }

    /// Reject the value `value`.
    pub fn is_not(&mut self, value: impl Into<String>) -> &mut Self {
        self.rules.excluded_matches.push(equals(value));
        self
    }

    /// Require the value to match `regex`.
    pub fn matches_pattern(&mut self, regex: Regex) -> &mut Self {
        self.rules.patterns.push(matches(regex));
        self
    }

    /// Reject values matching `regex`.
    pub fn excludes_pattern(&mut self, regex: Regex) -> &mut Self {
        self.rules.excluded_patterns.push(matches(regex));
        self
    }

    /// Require a phone number. See [`patterns::PHONE_PATTERN`].
    pub fn is_phone(&mut self) -> &mut Self {
        self.matches_pattern(patterns::phone())
    }

    /// Require an email address. See [`patterns::EMAIL_PATTERN`].
    pub fn is_email(&mut self) -> &mut Self {
        self.matches_pattern(patterns::email())
    }

    /// Require something shaped like an email address, without a domain dot.
    /// See [`patterns::EMAIL_LIKE_PATTERN`].
    pub fn is_email_like(&mut self) -> &mut Self {
        self.matches_pattern(patterns::email_like())
    }

    /// Require [`patterns::INTEGER_PATTERN`].
    ///
    /// `"0"` and single-character values are rejected.
    pub fn is_integer(&mut self) -> &mut Self {
        self.matches_pattern(patterns::integer())
    }

    /// Require a signed decimal number with optional exponent.
    pub fn is_number(&mut self) -> &mut Self {
        self.matches_pattern(patterns::number())
    }

    /// Require a UK postcode.
    pub fn is_postcode(&mut self) -> &mut Self {
        self.matches_pattern(patterns::postcode())
    }

    /// Require a UK driving licence number.
    pub fn is_driving_licence(&mut self) -> &mut Self {
        self.matches_pattern(patterns::driving_licence())
    }

    /// Require an empty value.
    pub fn is_empty(&mut self) -> &mut Self {
        self.matches_pattern(patterns::empty())
    }

    /// Reject an empty value.
    pub fn is_not_empty(&mut self) -> &mut Self {
        self.excludes_pattern(patterns::empty())
    }

    /// Require at least one matched field to be checked.
    pub fn must_be_checked(&mut self) -> &mut Self {
        self.rules.must_be_checked = true;
        self
    }

    /// Require fewer than `n` characters.
    pub fn max_length(&mut self, n: usize) -> &mut Self {
        self.rules.length.less_than = Some(n);
        self
    }

    /// Require more than `n` characters.
    pub fn min_length(&mut self, n: usize) -> &mut Self {
        self.rules.length.greater_than = Some(n);
        self
    }

    /// Require exactly `n` characters.
    pub fn equal_length(&mut self, n: usize) -> &mut Self {
        self.rules.length.equal_to = Some(n);
        self
    }

    /// Check the value of every matched field instead of only the first.
    pub fn across_all_matches(&mut self) -> &mut Self {
        self.rules.scope = Scope::AllMatches;
        self
    }

    /// Freeze the configuration.
    pub fn build(&self) -> RuleSet {
        self.rules.clone()
    }
}

impl From<RuleSetBuilder> for RuleSet {
    fn from(builder: RuleSetBuilder) -> Self {
        builder.rules
    }
}
