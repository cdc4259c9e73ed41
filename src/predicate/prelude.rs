//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use tick_of_truth::predicate::prelude::*;
//!
//! let mut code = NoneOf::default();
//! code.push(equals("0000"));
//! assert!(code.check("1234"));
//! assert!(!code.check("0000"));
//! ```

// Core trait
pub use super::combinators::Predicate;

// Rule lists
pub use super::combinators::{AllOf, NoneOf};

// String predicates
pub use super::string::{equals, matches, LengthBounds};
