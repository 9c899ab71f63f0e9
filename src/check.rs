//! The assertion facade
//!
//! Every function here follows one template: evaluate a predicate over a
//! borrowed value, return `Ok(true)` if it holds, and otherwise turn the
//! failure descriptor into a [`CheckError`] and return it. Nothing is retained
//! or mutated, so the functions are safe to call from any thread.
//!
//! | Check | Passes when |
//! |---|---|
//! | [`not_null`] | the value is present |
//! | [`is_null`] | the value is absent |
//! | [`is_true`] | the condition is `true` |
//! | [`is_false`] | the condition is `false` |
//! | [`not_empty`] | the collection is present and has at least one element |
//! | [`not_empty_or_null`] | same outcome as `not_empty`, built as "present and has elements" |
//! | [`is_ascii`] | every character is printable ASCII (32..=126) |
//! | [`is_alphanumeric`] | every character is in `[a-zA-Z0-9]` |
//!
//! The character checks pass for an empty string.
//!
//! # Example
//!
//! ```rust
//! use precondition::{check, raise, CheckError};
//!
//! #[derive(Debug, PartialEq)]
//! enum OrderError {
//!     NoItems,
//! }
//!
//! fn place_order(customer: Option<&str>, items: &[u32]) -> Result<usize, CheckError<OrderError>> {
//!     check::not_null(&customer, "customer cannot be null").map_err(CheckError::widen)?;
//!     check::not_empty(items, raise(OrderError::NoItems))?;
//!     Ok(items.len())
//! }
//!
//! assert_eq!(place_order(Some("ada"), &[7]), Ok(1));
//! assert_eq!(
//!     place_order(None, &[7]),
//!     Err(CheckError::illegal_argument("customer cannot be null"))
//! );
//! assert_eq!(
//!     place_order(Some("ada"), &[]),
//!     Err(CheckError::Caller(OrderError::NoItems))
//! );
//! ```

use std::convert::Infallible;

use crate::error::CheckError;
use crate::failure::Failure;
use crate::predicate::{
    ascii_alphanumeric, has_elements, present, printable_ascii, Collection, IsNull, NotNull,
    Nullable, Predicate, PredicateExt, Text,
};

/// Outcome of a check: `Ok(true)` when it holds.
pub type Checked<E = Infallible> = Result<bool, CheckError<E>>;

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn conclude<F: Failure>(name: &'static str, passed: bool, failure: F) -> Checked<F::Caller> {
    if passed {
        return Ok(true);
    }

    let error = failure.into_check_error();
    #[cfg(feature = "tracing")]
    tracing::debug!(check = name, kind = error.kind(), "precondition failed");
    Err(error)
}

/// Check `value` against any predicate.
///
/// The named checks in this module are shorthands for common predicates; use
/// this one for conditions built with [`PredicateExt`].
///
/// # Example
///
/// ```rust
/// use precondition::check::check_that;
/// use precondition::predicate::*;
///
/// let slug = PredicateExt::<str>::and(has_elements(), all_chars(|c: char| {
///     c.is_ascii_lowercase() || c == '-'
/// }));
///
/// assert_eq!(check_that("hello-world", slug, "bad slug"), Ok(true));
/// assert!(check_that("Hello World", slug, "bad slug").is_err());
/// ```
pub fn check_that<T, P, F>(value: &T, predicate: P, failure: F) -> Checked<F::Caller>
where
    T: ?Sized,
    P: Predicate<T>,
    F: Failure,
{
    conclude("check_that", predicate.check(value), failure)
}

/// Check that `value` is not the null/absent reference.
///
/// # Example
///
/// ```rust
/// use precondition::{check, CheckError};
///
/// assert_eq!(check::not_null(&Some(8080), "port cannot be null"), Ok(true));
/// assert_eq!(
///     check::not_null(&None::<u16>, "x cannot be null"),
///     Err(CheckError::illegal_argument("x cannot be null"))
/// );
/// ```
pub fn not_null<N, F>(value: &N, failure: F) -> Checked<F::Caller>
where
    N: Nullable + ?Sized,
    F: Failure,
{
    conclude("not_null", NotNull.check(value), failure)
}

/// Check that `value` is the null/absent reference.
///
/// # Example
///
/// ```rust
/// use precondition::check;
///
/// assert_eq!(check::is_null(&None::<String>, "session already open"), Ok(true));
/// assert!(check::is_null(&Some("s-1"), "session already open").is_err());
/// ```
pub fn is_null<N, F>(value: &N, failure: F) -> Checked<F::Caller>
where
    N: Nullable + ?Sized,
    F: Failure,
{
    conclude("is_null", IsNull.check(value), failure)
}

/// Check that `condition` is `true`.
///
/// # Example
///
/// ```rust
/// use precondition::check;
///
/// let retries = 3;
/// assert_eq!(check::is_true(retries > 0, "retries must be positive"), Ok(true));
/// assert!(check::is_true(retries > 5, "too few retries").is_err());
/// ```
pub fn is_true<F: Failure>(condition: bool, failure: F) -> Checked<F::Caller> {
    conclude("is_true", condition, failure)
}

/// Check that `condition` is `false`.
///
/// # Example
///
/// ```rust
/// use precondition::check;
///
/// assert_eq!(check::is_false(false, "already closed"), Ok(true));
/// assert!(check::is_false(true, "already closed").is_err());
/// ```
pub fn is_false<F: Failure>(condition: bool, failure: F) -> Checked<F::Caller> {
    conclude("is_false", !condition, failure)
}

/// Check that a collection is present and has at least one element.
///
/// An absent collection (`None`) fails like an empty one.
///
/// # Example
///
/// ```rust
/// use precondition::check;
///
/// assert_eq!(check::not_empty(&[1], "empty"), Ok(true));
/// assert!(check::not_empty(&Vec::<i32>::new(), "empty").is_err());
/// assert!(check::not_empty(&None::<Vec<i32>>, "empty").is_err());
/// ```
pub fn not_empty<C, F>(collection: &C, failure: F) -> Checked<F::Caller>
where
    C: Collection + ?Sized,
    F: Failure,
{
    conclude("not_empty", has_elements().check(collection), failure)
}

/// Check that a collection is not null and not empty.
///
/// Equivalent to [`not_null`] followed by [`not_empty`] with the same failure,
/// so its outcome always matches [`not_empty`].
///
/// # Example
///
/// ```rust
/// use precondition::check;
///
/// assert_eq!(check::not_empty_or_null(&Some(vec!["a"]), "no tags"), Ok(true));
/// assert!(check::not_empty_or_null(&Some(Vec::<&str>::new()), "no tags").is_err());
/// assert!(check::not_empty_or_null(&None::<Vec<&str>>, "no tags").is_err());
/// ```
pub fn not_empty_or_null<C, F>(collection: &C, failure: F) -> Checked<F::Caller>
where
    C: Collection + ?Sized,
    F: Failure,
{
    let populated = PredicateExt::<C>::and(present(), has_elements());
    conclude("not_empty_or_null", populated.check(collection), failure)
}

/// Check that every character is printable ASCII (ordinals 32 through 126).
///
/// Accepts a string or a single `char`. Control characters such as `\n` and
/// `\t` fail. An empty string passes.
///
/// # Example
///
/// ```rust
/// use precondition::check;
///
/// assert_eq!(check::is_ascii("Well, this is cool", "bad"), Ok(true));
/// assert!(check::is_ascii("Well,\n this is cool", "bad").is_err());
/// assert_eq!(check::is_ascii(&'~', "bad"), Ok(true));
/// ```
pub fn is_ascii<S, F>(text: &S, failure: F) -> Checked<F::Caller>
where
    S: Text + ?Sized,
    F: Failure,
{
    conclude("is_ascii", printable_ascii().check(text), failure)
}

/// Check that every character is an ASCII letter or digit.
///
/// Accepts a string or a single `char`. An empty string passes.
///
/// # Example
///
/// ```rust
/// use precondition::check;
///
/// assert_eq!(check::is_alphanumeric("J0hnD03", "bad"), Ok(true));
/// assert!(check::is_alphanumeric("John Doe", "bad").is_err());
/// ```
pub fn is_alphanumeric<S, F>(text: &S, failure: F) -> Checked<F::Caller>
where
    S: Text + ?Sized,
    F: Failure,
{
    conclude("is_alphanumeric", ascii_alphanumeric().check(text), failure)
}
