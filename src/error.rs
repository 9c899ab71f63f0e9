//! The error returned by a failed check
//!
//! A failed check produces a [`CheckError`], a closed enumeration with exactly
//! two shapes:
//!
//! - [`CheckError::IllegalArgument`] wraps the plain message the caller passed
//!   as the failure descriptor.
//! - [`CheckError::Caller`] wraps the caller's own pre-built error object,
//!   moved through untouched.
//!
//! # Examples
//!
//! ```
//! use precondition::{check, raise, CheckError};
//!
//! let err = check::not_null(&None::<u32>, "port cannot be null").unwrap_err();
//! assert_eq!(err.message(), Some("port cannot be null"));
//!
//! let err = check::is_true(false, raise(404)).unwrap_err();
//! assert_eq!(err, CheckError::Caller(404));
//! ```

use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;

/// The failure produced when a check does not hold.
///
/// `E` is the type of the caller-supplied error object. Checks given a plain
/// message can never produce the `Caller` variant, so their error type is
/// `CheckError<Infallible>` (the default). Use [`CheckError::widen`] to mix
/// both kinds of check in one function.
///
/// With the `serde` feature, `CheckError<E>` is `Serialize` when `E` is.
/// `Infallible` is not, so widen a message-form failure (for example with
/// `widen::<String>()`) before serializing it.
///
/// # Examples
///
/// ```
/// use precondition::CheckError;
///
/// let err: CheckError<std::io::Error> = CheckError::illegal_argument("bad input");
/// assert!(err.is_illegal_argument());
/// assert_eq!(err.to_string(), "bad input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckError<E = Infallible> {
    /// Default unchecked "invalid argument" failure built from a message.
    IllegalArgument(String),
    /// The caller's own error object, unmodified.
    Caller(E),
}

impl<E> CheckError<E> {
    /// Create an `IllegalArgument` failure from a message.
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        CheckError::IllegalArgument(message.into())
    }

    /// Returns `true` if this failure was built from a plain message.
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, CheckError::IllegalArgument(_))
    }

    /// Returns `true` if this failure carries the caller's error object.
    pub fn is_caller(&self) -> bool {
        matches!(self, CheckError::Caller(_))
    }

    /// The message of an `IllegalArgument` failure, exactly as supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use precondition::CheckError;
    ///
    /// let err = CheckError::<()>::illegal_argument("x cannot be null");
    /// assert_eq!(err.message(), Some("x cannot be null"));
    /// assert_eq!(CheckError::Caller(()).message(), None);
    /// ```
    pub fn message(&self) -> Option<&str> {
        match self {
            CheckError::IllegalArgument(message) => Some(message),
            CheckError::Caller(_) => None,
        }
    }

    /// Borrow the caller's error object, if this failure carries one.
    pub fn caller(&self) -> Option<&E> {
        match self {
            CheckError::IllegalArgument(_) => None,
            CheckError::Caller(error) => Some(error),
        }
    }

    /// Take back the caller's error object, if this failure carries one.
    ///
    /// # Examples
    ///
    /// ```
    /// use precondition::{check, raise};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Missing(&'static str);
    ///
    /// let err = check::not_null(&None::<u8>, raise(Missing("user"))).unwrap_err();
    /// assert_eq!(err.into_caller(), Some(Missing("user")));
    /// ```
    pub fn into_caller(self) -> Option<E> {
        match self {
            CheckError::IllegalArgument(_) => None,
            CheckError::Caller(error) => Some(error),
        }
    }

    /// Transform the caller's error object, leaving messages untouched.
    pub fn map_caller<E2, F>(self, f: F) -> CheckError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            CheckError::IllegalArgument(message) => CheckError::IllegalArgument(message),
            CheckError::Caller(error) => CheckError::Caller(f(error)),
        }
    }

    /// Collapse both shapes into one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use precondition::CheckError;
    ///
    /// let status = |err: CheckError<u16>| err.fold(|_| 400, |code| code);
    ///
    /// assert_eq!(status(CheckError::illegal_argument("bad")), 400);
    /// assert_eq!(status(CheckError::Caller(409)), 409);
    /// ```
    pub fn fold<T, M, C>(self, on_message: M, on_caller: C) -> T
    where
        M: FnOnce(String) -> T,
        C: FnOnce(E) -> T,
    {
        match self {
            CheckError::IllegalArgument(message) => on_message(message),
            CheckError::Caller(error) => on_caller(error),
        }
    }

    /// Short name of the failure shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::IllegalArgument(_) => "illegal_argument",
            CheckError::Caller(_) => "caller",
        }
    }
}

impl CheckError<Infallible> {
    /// Re-type a message failure so it can flow through a function whose
    /// error type carries a caller error.
    ///
    /// # Examples
    ///
    /// ```
    /// use precondition::{check, raise, CheckError};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum SignupError {
    ///     Underage,
    /// }
    ///
    /// fn signup(name: &str, adult: bool) -> Result<(), CheckError<SignupError>> {
    ///     check::is_alphanumeric(name, "name must be alphanumeric").map_err(CheckError::widen)?;
    ///     check::is_true(adult, raise(SignupError::Underage))?;
    ///     Ok(())
    /// }
    ///
    /// assert!(signup("alice", true).is_ok());
    /// assert_eq!(
    ///     signup("alice", false),
    ///     Err(CheckError::Caller(SignupError::Underage))
    /// );
    /// ```
    pub fn widen<E>(self) -> CheckError<E> {
        match self {
            CheckError::IllegalArgument(message) => CheckError::IllegalArgument(message),
            CheckError::Caller(never) => match never {},
        }
    }
}

impl<E: fmt::Display> fmt::Display for CheckError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::IllegalArgument(message) => f.write_str(message),
            CheckError::Caller(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<E: StdError + 'static> StdError for CheckError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CheckError::IllegalArgument(_) => None,
            CheckError::Caller(error) => error.source(),
        }
    }
}
