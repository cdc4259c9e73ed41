//! Field access
//!
//! The evaluation core never talks to a document directly. It asks a
//! [`FieldSource`] for the fields a selector currently matches and reads each
//! [`FieldHandle`] at evaluation time; handles are never kept between checks.
//!
//! [`Field`] and [`FieldMap`] are in-memory implementations, useful for
//! headless validation and tests.
//!
//! # Example
//!
//! ```rust
//! use tick_of_truth::{Field, FieldHandle, FieldMap, FieldSource};
//!
//! let mut form = FieldMap::new();
//! form.insert("#email", Field::text("a@b.co"));
//! form.insert("[name=plan]", Field::checkbox("basic", false));
//! form.insert("[name=plan]", Field::checkbox("pro", true));
//!
//! let plans = form.resolve("[name=plan]");
//! assert_eq!(plans.len(), 2);
//! assert!(plans[1].is_checked());
//! assert!(form.resolve("#missing").is_empty());
//! ```

use std::collections::HashMap;

/// A live field as seen at evaluation time.
pub trait FieldHandle {
    /// The field's current value.
    fn value(&self) -> String;

    /// Whether a checkable field is checked. Non-checkable fields return `false`.
    fn is_checked(&self) -> bool;
}

/// Resolves selectors to the fields they currently match.
pub trait FieldSource {
    /// Handle type returned by [`FieldSource::resolve`].
    type Handle: FieldHandle;

    /// Return every field matching `selector`, in document order.
    fn resolve(&self, selector: &str) -> Vec<Self::Handle>;
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    type Handle = S::Handle;

    fn resolve(&self, selector: &str) -> Vec<Self::Handle> {
        (**self).resolve(selector)
    }
}

/// A snapshot of a field's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Current value.
    pub value: String,
    /// Checked state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub checked: bool,
}

impl Field {
    /// A text field holding `value`.
    pub fn text(value: impl Into<String>) -> Self {
        Field {
            value: value.into(),
            checked: false,
        }
    }

    /// A checkbox or radio button with the given value and checked state.
    pub fn checkbox(value: impl Into<String>, checked: bool) -> Self {
        Field {
            value: value.into(),
            checked,
        }
    }
}

impl FieldHandle for Field {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn is_checked(&self) -> bool {
        self.checked
    }
}

impl<H: FieldHandle + ?Sized> FieldHandle for &H {
    fn value(&self) -> String {
        (**self).value()
    }

    fn is_checked(&self) -> bool {
        (**self).is_checked()
    }
}

/// Fields keyed by selector.
///
/// Selectors are matched literally; a selector may hold several fields, as a
/// radio group does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldMap {
    fields: HashMap<String, Vec<Field>>,
}

impl FieldMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field under `selector`, after any fields already there.
    pub fn insert(&mut self, selector: impl Into<String>, field: Field) -> &mut Self {
        self.fields.entry(selector.into()).or_default().push(field);
        self
    }

    /// Replace the value of the first field under `selector`, adding a text
    /// field if none exists.
    pub fn set_value(&mut self, selector: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.fields.get_mut(selector).and_then(|f| f.first_mut()) {
            Some(field) => field.value = value,
            None => {
                self.insert(selector, Field::text(value));
            }
        }
        self
    }

    /// Set the checked state of the field under `selector` whose value is `value`.
    ///
    /// Returns `false` if no such field exists.
    pub fn set_checked(&mut self, selector: &str, value: &str, checked: bool) -> bool {
        let found = self
            .fields
            .get_mut(selector)
            .and_then(|fields| fields.iter_mut().find(|f| f.value == value));
        match found {
            Some(field) => {
                field.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Remove every field under `selector`.
    pub fn remove(&mut self, selector: &str) -> Option<Vec<Field>> {
        self.fields.remove(selector)
    }

    /// Fields under `selector`, if any.
    pub fn get(&self, selector: &str) -> Option<&[Field]> {
        self.fields.get(selector).map(Vec::as_slice)
    }
}

impl FieldSource for FieldMap {
    type Handle = Field;

    fn resolve(&self, selector: &str) -> Vec<Field> {
        self.fields.get(selector).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_is_not_checked() {
        let field = Field::text("hello");
        assert_eq!(field.value(), "hello");
        assert!(!field.is_checked());
    }

    #[test]
    fn test_insert_keeps_document_order() {
        let mut form = FieldMap::new();
        form.insert("[name=a]", Field::checkbox("1", false))
            .insert("[name=a]", Field::checkbox("2", true));

        let values: Vec<String> = form.resolve("[name=a]").iter().map(|f| f.value()).collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn test_set_value_updates_first_field() {
        let mut form = FieldMap::new();
        form.insert("#x", Field::text("old"));
        form.insert("#x", Field::text("second"));
        form.set_value("#x", "new");

        let fields = form.get("#x").unwrap();
        assert_eq!(fields[0].value, "new");
        assert_eq!(fields[1].value, "second");
    }

    #[test]
    fn test_set_value_creates_missing_field() {
        let mut form = FieldMap::new();
        form.set_value("#new", "v");
        assert_eq!(form.resolve("#new"), vec![Field::text("v")]);
    }

    #[test]
    fn test_set_checked() {
        let mut form = FieldMap::new();
        form.insert("#terms", Field::checkbox("yes", false));

        assert!(form.set_checked("#terms", "yes", true));
        assert!(form.resolve("#terms")[0].is_checked());
        assert!(!form.set_checked("#terms", "no", true));
        assert!(!form.set_checked("#other", "yes", true));
    }

    #[test]
    fn test_remove() {
        let mut form = FieldMap::new();
        form.insert("#gone", Field::text(""));
        assert!(form.remove("#gone").is_some());
        assert!(form.resolve("#gone").is_empty());
    }

    #[test]
    fn test_source_by_reference() {
        fn count<S: FieldSource>(source: S, selector: &str) -> usize {
            source.resolve(selector).len()
        }

        let mut form = FieldMap::new();
        form.insert("#a", Field::text("a"));
        assert_eq!(count(&form, "#a"), 1);
    }
}
