//! Core predicate trait and rule lists
//!
//! This module provides the foundational `Predicate` trait and the list
//! combinators a [`RuleSet`](crate::RuleSet) stores its rule categories in.

/// A check over values of type T.
///
/// # Example
///
/// ```rust
/// use tick_of_truth::predicate::*;
///
/// let filled = |s: &str| !s.trim().is_empty();
/// assert!(filled.check("hello"));
/// assert!(!filled.check("  "));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Satisfied when every contained predicate is satisfied.
///
/// The list grows at runtime, so an empty `AllOf` is satisfied by anything.
///
/// # Example
///
/// ```rust
/// use tick_of_truth::predicate::*;
///
/// let mut p = AllOf::default();
/// assert!(p.check("anything"));
///
/// p.push(equals("same"));
/// assert!(p.check("same"));
///
/// p.push(equals("other"));
/// assert!(!p.check("same"));
/// ```
#[derive(Clone, Debug)]
pub struct AllOf<P>(pub Vec<P>);

impl<P> AllOf<P> {
    /// Append a predicate.
    pub fn push(&mut self, predicate: P) {
        self.0.push(predicate);
    }

    /// Number of contained predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no predicate is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P> Default for AllOf<P> {
    fn default() -> Self {
        AllOf(Vec::new())
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Satisfied when no contained predicate is satisfied.
///
/// An empty `NoneOf` is satisfied by anything.
///
/// # Example
///
/// ```rust
/// use tick_of_truth::predicate::*;
///
/// let mut p = NoneOf::default();
/// p.push(equals("admin"));
/// p.push(equals("root"));
/// assert!(p.check("alice"));
/// assert!(!p.check("root"));
/// ```
#[derive(Clone, Debug)]
pub struct NoneOf<P>(pub Vec<P>);

impl<P> NoneOf<P> {
    /// Append a predicate.
    pub fn push(&mut self, predicate: P) {
        self.0.push(predicate);
    }

    /// Number of contained predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no predicate is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P> Default for NoneOf<P> {
    fn default() -> Self {
        NoneOf(Vec::new())
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for NoneOf<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}
