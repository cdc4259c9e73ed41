//! Error presentation
//!
//! After each rule set is checked, the validator tells a [`Presenter`]
//! whether the field should be shown as invalid or valid. What that means is
//! up to the host.
//!
//! [`ClassPresenter`] implements the usual form styling on top of a
//! [`ClassHost`]: add an error class to the field's closest group container
//! and show the error label next to the field, or undo both. The class and
//! selector names come from an [`ErrorStyle`].
//!
//! # Example
//!
//! ```rust
//! use tick_of_truth::{ClassPresenter, ErrorStyle, Presenter};
//! use tick_of_truth::testing::RecordingHost;
//!
//! let mut presenter = ClassPresenter::new(RecordingHost::default(), ErrorStyle::default());
//! presenter.mark_invalid("#email");
//!
//! let host = presenter.into_host();
//! assert_eq!(
//!     host.calls,
//!     vec![
//!         "add .form-group error #email".to_string(),
//!         "show .label-error #email".to_string(),
//!     ]
//! );
//! ```

/// Receives the outcome of each rule set.
pub trait Presenter {
    /// Show the field(s) matched by `selector` as invalid.
    fn mark_invalid(&mut self, selector: &str);

    /// Clear any invalid indication from the field(s) matched by `selector`.
    fn mark_valid(&mut self, selector: &str);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn mark_invalid(&mut self, selector: &str) {
        (**self).mark_invalid(selector);
    }

    fn mark_valid(&mut self, selector: &str) {
        (**self).mark_valid(selector);
    }
}

/// A presenter that does nothing.
///
/// For checks whose outcome is only needed as a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPresenter;

impl Presenter for NoPresenter {
    fn mark_invalid(&mut self, _selector: &str) {}

    fn mark_valid(&mut self, _selector: &str) {}
}

/// Names used to style invalid fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ErrorStyle {
    /// Selector of the closest ancestor that receives the error class.
    pub group_selector: String,
    /// Class added to that ancestor while the field is invalid.
    pub error_class: String,
    /// Selector of the error label, looked up among the field's siblings.
    pub label_selector: String,
}

impl Default for ErrorStyle {
    fn default() -> Self {
        ErrorStyle {
            group_selector: ".form-group".to_string(),
            error_class: "error".to_string(),
            label_selector: ".label-error".to_string(),
        }
    }
}

impl ErrorStyle {
    /// Set the group container selector.
    pub fn with_group_selector(mut self, selector: impl Into<String>) -> Self {
        self.group_selector = selector.into();
        self
    }

    /// Set the error class.
    pub fn with_error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Set the error label selector.
    pub fn with_label_selector(mut self, selector: impl Into<String>) -> Self {
        self.label_selector = selector.into();
        self
    }
}

/// Document operations [`ClassPresenter`] needs from the host.
pub trait ClassHost {
    /// Add `class` to the closest ancestor of `selector` matching `ancestor`.
    fn add_class_to_closest(&mut self, selector: &str, ancestor: &str, class: &str);

    /// Remove `class` from the closest ancestor of `selector` matching `ancestor`.
    fn remove_class_from_closest(&mut self, selector: &str, ancestor: &str, class: &str);

    /// Show or hide the elements matching `sibling` under the parent of `selector`.
    fn set_sibling_visible(&mut self, selector: &str, sibling: &str, visible: bool);
}

/// [`Presenter`] that toggles an error class and an error label.
#[derive(Debug, Clone)]
pub struct ClassPresenter<H> {
    host: H,
    style: ErrorStyle,
}

impl<H: ClassHost> ClassPresenter<H> {
    /// Present errors on `host` using `style`.
    pub fn new(host: H, style: ErrorStyle) -> Self {
        ClassPresenter { host, style }
    }

    /// The style in use.
    pub fn style(&self) -> &ErrorStyle {
        &self.style
    }

    /// Borrow the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Give back the host.
    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H: ClassHost> Presenter for ClassPresenter<H> {
    fn mark_invalid(&mut self, selector: &str) {
        self.host
            .add_class_to_closest(selector, &self.style.group_selector, &self.style.error_class);
        self.host
            .set_sibling_visible(selector, &self.style.label_selector, true);
    }

    fn mark_valid(&mut self, selector: &str) {
        self.host.remove_class_from_closest(
            selector,
            &self.style.group_selector,
            &self.style.error_class,
        );
        self.host
            .set_sibling_visible(selector, &self.style.label_selector, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    #[test]
    fn test_default_style() {
        let style = ErrorStyle::default();
        assert_eq!(style.group_selector, ".form-group");
        assert_eq!(style.error_class, "error");
        assert_eq!(style.label_selector, ".label-error");
    }

    #[test]
    fn test_style_setters() {
        let style = ErrorStyle::default()
            .with_group_selector(".field")
            .with_error_class("is-invalid")
            .with_label_selector(".hint");
        assert_eq!(style.group_selector, ".field");
        assert_eq!(style.error_class, "is-invalid");
        assert_eq!(style.label_selector, ".hint");
    }

    #[test]
    fn test_mark_valid_undoes_invalid() {
        let style = ErrorStyle::default().with_error_class("bad");
        let mut presenter = ClassPresenter::new(RecordingHost::default(), style);
        assert_eq!(presenter.style().error_class, "bad");
        presenter.mark_invalid("#name");
        presenter.mark_valid("#name");

        assert_eq!(
            presenter.host().calls,
            vec![
                "add .form-group bad #name",
                "show .label-error #name",
                "remove .form-group bad #name",
                "hide .label-error #name",
            ]
        );
    }

    #[test]
    fn test_no_presenter_is_silent() {
        let mut presenter = NoPresenter;
        presenter.mark_invalid("#a");
        presenter.mark_valid("#a");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_style_from_partial_json() {
        let style: ErrorStyle = serde_json::from_str(r#"{"error_class": "has-error"}"#).unwrap();
        assert_eq!(style.error_class, "has-error");
        assert_eq!(style.group_selector, ".form-group");
    }
}
