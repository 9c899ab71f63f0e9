//! Testing utilities for code that runs checks
//!
//! This module provides assertion macros for check outcomes and, behind the
//! `proptest` feature, property-based testing support.
//!
//! # Examples
//!
//! ```rust
//! use precondition::{assert_caller, assert_fails, assert_illegal_argument, assert_passes};
//! use precondition::{check, raise};
//!
//! assert_passes!(check::is_true(true, "unused"));
//! assert_fails!(check::not_empty("", "empty"));
//! assert_illegal_argument!(check::not_null(&None::<u8>, "x cannot be null"), "x cannot be null");
//! assert_caller!(check::is_false(true, raise(7)), 7);
//! ```

/// Assert that a check passed with the affirmative result.
///
/// # Example
///
/// ```rust
/// use precondition::{assert_passes, check};
///
/// assert_passes!(check::is_alphanumeric("J0hnD03", "bad"));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($check:expr) => {
        match $check {
            ::core::result::Result::Ok(true) => {}
            ::core::result::Result::Ok(false) => {
                panic!("Expected check to pass, got Ok(false)");
            }
            ::core::result::Result::Err(e) => {
                panic!("Expected check to pass, got failure: {:?}", e);
            }
        }
    };
}

/// Assert that a check failed, whatever the failure shape.
///
/// # Example
///
/// ```rust
/// use precondition::{assert_fails, check};
///
/// assert_fails!(check::is_ascii("tab\there", "bad"));
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($check:expr) => {
        match $check {
            ::core::result::Result::Err(_) => {}
            ::core::result::Result::Ok(v) => {
                panic!("Expected check to fail, got Ok({:?})", v);
            }
        }
    };
}

/// Assert that a check failed with an `IllegalArgument` carrying `message`.
///
/// # Example
///
/// ```rust
/// use precondition::{assert_illegal_argument, check};
///
/// assert_illegal_argument!(check::is_true(false, "must hold"), "must hold");
/// ```
#[macro_export]
macro_rules! assert_illegal_argument {
    ($check:expr, $message:expr) => {
        match $check {
            ::core::result::Result::Err($crate::CheckError::IllegalArgument(message)) => {
                assert_eq!(message, $message);
            }
            ::core::result::Result::Err($crate::CheckError::Caller(e)) => {
                panic!("Expected IllegalArgument, got Caller: {:?}", e);
            }
            ::core::result::Result::Ok(v) => {
                panic!(
                    "Expected IllegalArgument {:?}, got Ok({:?})",
                    $message, v
                );
            }
        }
    };
}

/// Assert that a check failed with the caller's error, equal to `expected`.
///
/// # Example
///
/// ```rust
/// use precondition::{assert_caller, check, raise};
///
/// assert_caller!(check::not_null(&None::<u8>, raise("missing")), "missing");
/// ```
#[macro_export]
macro_rules! assert_caller {
    ($check:expr, $expected:expr) => {
        match $check {
            ::core::result::Result::Err($crate::CheckError::Caller(e)) => {
                assert_eq!(e, $expected);
            }
            ::core::result::Result::Err($crate::CheckError::IllegalArgument(message)) => {
                panic!("Expected Caller, got IllegalArgument: {:?}", message);
            }
            ::core::result::Result::Ok(v) => {
                panic!("Expected Caller {:?}, got Ok({:?})", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::CheckError;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<E> Arbitrary for CheckError<E>
where
    E: Arbitrary + 'static,
{
    type Parameters = E::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any::<String>().prop_map(CheckError::IllegalArgument),
            any_with::<E>(args).prop_map(CheckError::Caller),
        ]
        .boxed()
    }
}

/// Strings made only of printable ASCII (ordinals 32..=126).
#[cfg(feature = "proptest")]
pub fn printable_ascii_string() -> impl Strategy<Value = String> {
    "[ -~]{0,64}"
}

/// Strings made only of `a-z`, `A-Z` and `0-9`.
#[cfg(feature = "proptest")]
pub fn ascii_alphanumeric_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{0,64}"
}

#[cfg(test)]
mod tests {
    use crate::{check, raise, CheckError};

    #[test]
    fn assert_passes_macro() {
        assert_passes!(check::not_null(&Some(1), "null"));
    }

    #[test]
    fn assert_fails_macro() {
        assert_fails!(check::is_null(&Some(1), "present"));
        assert_fails!(check::is_null(&Some(1), raise(1)));
    }

    #[test]
    fn assert_illegal_argument_macro() {
        assert_illegal_argument!(check::not_empty(&Vec::<u8>::new(), "empty"), "empty");
    }

    #[test]
    fn assert_caller_macro() {
        assert_caller!(check::is_true(false, raise(vec![1, 2])), vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "Expected check to pass, got failure")]
    fn assert_passes_panics_on_failure() {
        assert_passes!(check::is_true(false, "nope"));
    }

    #[test]
    #[should_panic(expected = "Expected check to pass, got Ok(false)")]
    fn assert_passes_panics_on_false() {
        assert_passes!(Ok::<bool, CheckError>(false));
    }

    #[test]
    #[should_panic(expected = "Expected check to fail")]
    fn assert_fails_panics_on_success() {
        assert_fails!(check::is_true(true, "nope"));
    }

    #[test]
    #[should_panic(expected = "Expected IllegalArgument, got Caller")]
    fn assert_illegal_argument_panics_on_caller() {
        assert_illegal_argument!(check::is_true(false, raise(3)), "three");
    }

    #[test]
    #[should_panic(expected = "Expected Caller, got IllegalArgument")]
    fn assert_caller_panics_on_message() {
        assert_caller!(
            check::is_true(false, "message").map_err(CheckError::widen::<u8>),
            3
        );
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::{ascii_alphanumeric_string, printable_ascii_string};
        use crate::{check, CheckError};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn check_error_arbitrary_generates_both_shapes(
                err in any::<CheckError<i32>>()
            ) {
                match &err {
                    CheckError::IllegalArgument(m) => prop_assert_eq!(err.message(), Some(m.as_str())),
                    CheckError::Caller(e) => prop_assert_eq!(err.caller(), Some(e)),
                }
            }

            #[test]
            fn printable_strings_pass_is_ascii(s in printable_ascii_string()) {
                prop_assert_eq!(check::is_ascii(s.as_str(), "bad"), Ok(true));
            }

            #[test]
            fn alphanumeric_strings_pass_is_alphanumeric(s in ascii_alphanumeric_string()) {
                prop_assert_eq!(check::is_alphanumeric(s.as_str(), "bad"), Ok(true));
            }
        }
    }
}
