//! # Precondition
//!
//! Named precondition checks that return `Ok(true)` when they hold and an
//! error built from the caller's failure descriptor when they don't.
//!
//! A failure descriptor is either a plain message, which becomes
//! [`CheckError::IllegalArgument`], or the caller's own error object wrapped
//! with [`raise`], which is handed back untouched as [`CheckError::Caller`].
//!
//! ## Quick Example
//!
//! ```rust
//! use precondition::{check, raise, CheckError};
//!
//! // Plain message
//! let err = check::not_null(&None::<&str>, "x cannot be null").unwrap_err();
//! assert_eq!(err.message(), Some("x cannot be null"));
//!
//! // Caller-supplied error object
//! #[derive(Debug, PartialEq)]
//! struct InvalidUsername;
//!
//! assert_eq!(check::is_alphanumeric("J0hnD03", raise(InvalidUsername)), Ok(true));
//! assert_eq!(
//!     check::is_alphanumeric("John Doe", raise(InvalidUsername)),
//!     Err(CheckError::Caller(InvalidUsername))
//! );
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: emit a `debug` event for every failed check.
//! - `serde`: `Serialize` for [`CheckError`].
//! - `proptest`: `Arbitrary` for [`CheckError`] and string strategies in
//!   [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod error;
pub mod failure;
pub mod predicate;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use check::Checked;
pub use error::CheckError;
pub use failure::{raise, raise_with, Failure, Raise, RaiseWith};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check::{self, check_that, Checked};
    pub use crate::error::CheckError;
    pub use crate::failure::{raise, raise_with, Failure};
    pub use crate::predicate::{Predicate, PredicateExt};
}
