//! Failure descriptors
//!
//! Every check takes a failure descriptor as its last argument: the thing to
//! produce when the check does not hold. A descriptor is either a plain
//! message or the caller's own error object.
//!
//! - A message (`&str`, `String`, `Cow<str>`) becomes
//!   [`CheckError::IllegalArgument`].
//! - An error object wrapped with [`raise`] becomes [`CheckError::Caller`],
//!   moved through without being inspected or changed.
//! - [`raise_with`] defers building the error object until a check fails.
//!
//! # Example
//!
//! ```rust
//! use precondition::{check, raise, raise_with, CheckError};
//!
//! #[derive(Debug, PartialEq)]
//! enum ConfigError {
//!     MissingHost,
//!     BadName(String),
//! }
//!
//! let host: Option<&str> = None;
//!
//! assert_eq!(
//!     check::not_null(&host, "host cannot be null"),
//!     Err(CheckError::illegal_argument("host cannot be null"))
//! );
//! assert_eq!(
//!     check::not_null(&host, raise(ConfigError::MissingHost)),
//!     Err(CheckError::Caller(ConfigError::MissingHost))
//! );
//!
//! let name = "db primary";
//! let result = check::is_alphanumeric(name, raise_with(|| ConfigError::BadName(name.to_string())));
//! assert_eq!(result, Err(CheckError::Caller(ConfigError::BadName("db primary".into()))));
//! ```

use std::borrow::Cow;
use std::convert::Infallible;

use crate::error::CheckError;

/// Something a check can turn into its error when it fails.
///
/// Descriptors are consumed only on failure; a passing check drops them.
pub trait Failure {
    /// The caller's error type carried by [`CheckError::Caller`].
    ///
    /// Plain messages use `Infallible`.
    type Caller;

    /// Build the error for a failed check.
    fn into_check_error(self) -> CheckError<Self::Caller>;
}

impl<'a> Failure for &'a str {
    type Caller = Infallible;

    fn into_check_error(self) -> CheckError<Infallible> {
        CheckError::IllegalArgument(self.to_owned())
    }
}

impl<'a> Failure for &'a String {
    type Caller = Infallible;

    fn into_check_error(self) -> CheckError<Infallible> {
        CheckError::IllegalArgument(self.clone())
    }
}

impl Failure for String {
    type Caller = Infallible;

    fn into_check_error(self) -> CheckError<Infallible> {
        CheckError::IllegalArgument(self)
    }
}

impl<'a> Failure for Cow<'a, str> {
    type Caller = Infallible;

    fn into_check_error(self) -> CheckError<Infallible> {
        CheckError::IllegalArgument(self.into_owned())
    }
}

/// A pre-built caller error, produced verbatim when a check fails.
///
/// Created by [`raise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raise<E>(pub E);

impl<E> Failure for Raise<E> {
    type Caller = E;

    #[inline]
    fn into_check_error(self) -> CheckError<E> {
        CheckError::Caller(self.0)
    }
}

/// Use `error` as the failure of a check.
///
/// # Example
///
/// ```rust
/// use precondition::{check, raise, CheckError};
///
/// let err = check::is_false(true, raise(std::fmt::Error)).unwrap_err();
/// assert_eq!(err, CheckError::Caller(std::fmt::Error));
/// ```
pub fn raise<E>(error: E) -> Raise<E> {
    Raise(error)
}

/// A caller error built lazily, only when a check fails.
///
/// Created by [`raise_with`].
#[derive(Clone, Copy, Debug)]
pub struct RaiseWith<F>(pub F);

impl<E, F> Failure for RaiseWith<F>
where
    F: FnOnce() -> E,
{
    type Caller = E;

    #[inline]
    fn into_check_error(self) -> CheckError<E> {
        CheckError::Caller((self.0)())
    }
}

/// Build the failure of a check with `f`, called only if the check fails.
///
/// # Example
///
/// ```rust
/// use precondition::{check, raise_with};
///
/// let mut built = 0;
/// let result = check::is_true(true, raise_with(|| {
///     built += 1;
///     "never built"
/// }));
/// assert_eq!(result, Ok(true));
/// assert_eq!(built, 0);
/// ```
pub fn raise_with<E, F>(f: F) -> RaiseWith<F>
where
    F: FnOnce() -> E,
{
    RaiseWith(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_becomes_illegal_argument() {
        assert_eq!(
            "x cannot be null".into_check_error(),
            CheckError::illegal_argument("x cannot be null")
        );
    }

    #[test]
    fn test_owned_and_borrowed_strings() {
        let owned = String::from("owned");
        assert_eq!(
            (&owned).into_check_error(),
            CheckError::illegal_argument("owned")
        );
        assert_eq!(owned.into_check_error(), CheckError::illegal_argument("owned"));

        let cow: Cow<'_, str> = Cow::Borrowed("cow");
        assert_eq!(cow.into_check_error(), CheckError::illegal_argument("cow"));
    }

    #[test]
    fn test_raise_moves_error_through() {
        let err = raise(vec![1, 2, 3]).into_check_error();
        assert_eq!(err, CheckError::Caller(vec![1, 2, 3]));
    }

    #[test]
    fn test_raise_preserves_identity() {
        let boxed = Box::new(7_u64);
        let addr: *const u64 = &*boxed;

        let err = raise(boxed).into_check_error();
        let returned = err.into_caller().expect("caller error");
        assert!(std::ptr::eq(addr, &*returned));
    }

    #[test]
    fn test_raise_with_builds_on_demand() {
        let err = raise_with(|| format!("code {}", 500)).into_check_error();
        assert_eq!(err, CheckError::Caller("code 500".to_string()));
    }
}
