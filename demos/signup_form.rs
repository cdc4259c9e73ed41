//! Signup form example
//!
//! Builds the rules for a signup form once, then checks a few submissions
//! against an in-memory form, printing what a page would show.
//!
//! Run with `RUST_LOG`-style output enabled via tracing-subscriber:
//!
//! ```text
//! cargo run --example signup_form
//! ```

use tick_of_truth::prelude::*;

/// Prints each class/label change instead of touching a document.
#[derive(Debug, Default)]
struct ConsoleHost;

impl ClassHost for ConsoleHost {
    fn add_class_to_closest(&mut self, selector: &str, ancestor: &str, class: &str) {
        println!("  {}: closest {} += .{}", selector, ancestor, class);
    }

    fn remove_class_from_closest(&mut self, selector: &str, ancestor: &str, class: &str) {
        println!("  {}: closest {} -= .{}", selector, ancestor, class);
    }

    fn set_sibling_visible(&mut self, selector: &str, sibling: &str, visible: bool) {
        let state = if visible { "shown" } else { "hidden" };
        println!("  {}: sibling {} {}", selector, sibling, state);
    }
}

fn build_validator() -> Result<Validator, ValidationError> {
    let mut form = validate("#email", |rules| {
        rules.is_email().max_length(255);
    })?;
    form.watch("#phone").is_phone();
    form.watch("#postcode").is_postcode();
    form.watch("#username")
        .is_not_empty()
        .min_length(2)
        .max_length(21)
        .is_not("admin");
    form.watch("[name=terms]").must_be_checked();
    Ok(form.build())
}

fn submission(email: &str, phone: &str, postcode: &str, username: &str, terms: bool) -> FieldMap {
    let mut fields = FieldMap::new();
    fields
        .insert("#email", Field::text(email))
        .insert("#phone", Field::text(phone))
        .insert("#postcode", Field::text(postcode))
        .insert("#username", Field::text(username))
        .insert("[name=terms]", Field::checkbox("accepted", terms));
    fields
}

fn main() -> Result<(), ValidationError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let validator = build_validator()?;
    let mut presenter = ClassPresenter::new(ConsoleHost, ErrorStyle::default());

    println!("=== Submission 1: everything filled in ===");
    let good = submission("ada@example.com", "07700900123", "SW1 1AA", "ada", true);
    let report = validator.run(&good, &mut presenter);
    println!("valid: {}\n", report.is_valid());

    println!("=== Submission 2: several mistakes ===");
    let bad = submission("ada@example", "123", "SW1 1AA", "admin", false);
    let report = validator.run(&bad, &mut presenter);
    println!("valid: {}", report.is_valid());
    for failure in report.failures() {
        println!("  - {}", failure);
    }

    Ok(())
}
