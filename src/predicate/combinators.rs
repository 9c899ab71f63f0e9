//! Core predicate trait and logical combinators
//!
//! This module provides the `Predicate` trait every check is built on, and the
//! `and`/`or`/`not` combinators for composing predicates.

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// let short_ascii = PredicateExt::<str>::and(printable_ascii(), |s: &str| s.len() <= 8);
/// assert!(short_ascii.check("J0hn"));
/// assert!(!short_ascii.check("much too long"));
/// assert!(!short_ascii.check("tab\there"));
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

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types, so composed predicates cost nothing
/// beyond the checks they run.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// let absent_or_empty = PredicateExt::<Vec<u8>>::not(has_elements());
/// assert!(absent_or_empty.check(&Vec::<u8>::new()));
/// assert!(!absent_or_empty.check(&vec![1]));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    /// The second predicate is not evaluated when the first fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use precondition::predicate::*;
    ///
    /// let p = PredicateExt::<Option<Vec<i32>>>::and(present(), has_elements());
    /// assert!(p.check(&Some(vec![1])));
    /// assert!(!p.check(&Some(Vec::<i32>::new())));
    /// assert!(!p.check(&None::<Vec<i32>>));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use precondition::predicate::*;
    ///
    /// let p = PredicateExt::<str>::or(ascii_alphanumeric(), |s: &str| s == "-");
    /// assert!(p.check("abc123"));
    /// assert!(p.check("-"));
    /// assert!(!p.check("a-b"));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use precondition::predicate::*;
    ///
    /// let p = PredicateExt::<Option<i32>>::not(not_null());
    /// assert!(p.check(&None::<i32>));
    /// assert!(!p.check(&Some(1)));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{ascii_alphanumeric, has_elements, is_null, not_null, present};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_and() {
        let p = PredicateExt::<Option<Vec<u8>>>::and(present(), has_elements());
        assert!(p.check(&Some(vec![1, 2])));
        assert!(!p.check(&Some(Vec::<u8>::new())));
        assert!(!p.check(&None::<Vec<u8>>));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = AtomicUsize::new(0);
        let counted = |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };

        let p = PredicateExt::<str>::and(ascii_alphanumeric(), counted);
        assert!(!p.check("no spaces allowed"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(p.check("ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_or() {
        let p = PredicateExt::<Option<i32>>::or(is_null(), |v: &Option<i32>| *v == Some(0));
        assert!(p.check(&None::<i32>));
        assert!(p.check(&Some(0)));
        assert!(!p.check(&Some(1)));
    }

    #[test]
    fn test_not() {
        let p = PredicateExt::<Option<&str>>::not(not_null());
        assert!(p.check(&None::<&str>));
        assert!(!p.check(&Some("x")));
    }

    #[test]
    fn test_not_is_null_matches_not_null() {
        let inverted = PredicateExt::<Option<u8>>::not(is_null());
        for value in [None, Some(0), Some(255)] {
            assert_eq!(inverted.check(&value), not_null().check(&value));
        }
    }

    #[test]
    fn test_closure_as_predicate() {
        let even_len = |s: &str| s.len() % 2 == 0;
        assert!(even_len.check("ab"));
        assert!(!even_len.check("abc"));

        let p = PredicateExt::<str>::and(even_len, ascii_alphanumeric());
        assert!(p.check("ab12"));
        assert!(!p.check("a b "));
    }
}
