//! Predicate combinators for field rules
//!
//! Every rule a [`RuleSet`](crate::RuleSet) holds is a [`Predicate`] over the
//! field value: [`Equals`] for exact and excluded matches, [`Matches`] for
//! pattern rules and [`LengthBounds`] for length rules. Rule categories are
//! stored as [`AllOf`] (positive rules) and [`NoneOf`] (negative rules), so a
//! category with nothing configured is always satisfied.
//!
//! # Example
//!
//! ```rust
//! use tick_of_truth::predicate::*;
//!
//! let mut not_an_email = NoneOf::default();
//! not_an_email.push(matches(patterns::email()));
//!
//! let length = LengthBounds {
//!     less_than: Some(21),
//!     greater_than: Some(2),
//!     equal_to: None,
//! };
//!
//! assert!(not_an_email.check("john_doe") && length.check("john_doe"));
//! assert!(!length.check("ab")); // too short
//! assert!(!not_an_email.check("john@example.com"));
//! ```

mod combinators;
mod string;

pub mod patterns;
pub mod prelude;

// Re-export core trait
pub use combinators::Predicate;

// Re-export combinator types
pub use combinators::{AllOf, NoneOf};

// Re-export string predicates
pub use string::{equals, matches, Equals, LengthBounds, Matches};
