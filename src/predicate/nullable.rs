//! Nullability predicates
//!
//! Rust has no null reference; absence is spelled `Option::None` or a null raw
//! pointer. [`Nullable`] abstracts over both so `not_null`/`is_null` checks
//! accept either.

use super::combinators::Predicate;

/// A value that may be the null/absent reference.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::Nullable;
///
/// assert!(Nullable::is_null(&None::<u8>));
/// assert!(!Nullable::is_null(&Some(1)));
/// assert!(Nullable::is_null(&std::ptr::null::<u8>()));
/// ```
pub trait Nullable {
    /// Returns `true` if this is the null/absent reference.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// Predicate that checks a value is not the null/absent reference.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotNull;

impl<N: Nullable + ?Sized> Predicate<N> for NotNull {
    #[inline]
    fn check(&self, value: &N) -> bool {
        !value.is_null()
    }
}

/// Create a predicate that checks a value is present.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// assert!(not_null().check(&Some("host")));
/// assert!(!not_null().check(&None::<&str>));
/// ```
pub fn not_null() -> NotNull {
    NotNull
}

/// Predicate that checks a value is the null/absent reference.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNull;

impl<N: Nullable + ?Sized> Predicate<N> for IsNull {
    #[inline]
    fn check(&self, value: &N) -> bool {
        value.is_null()
    }
}

/// Create a predicate that checks a value is absent.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// assert!(is_null().check(&None::<u32>));
/// assert!(!is_null().check(&Some(0_u32)));
/// ```
pub fn is_null() -> IsNull {
    IsNull
}
