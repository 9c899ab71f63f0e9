//! Collection predicates
//!
//! This module provides the predicates behind the emptiness checks. A
//! [`Collection`] reports how many elements it holds, or that it is absent
//! altogether (`Option::None` stands in for a null collection).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::combinators::Predicate;

/// A sequence or collection whose element count can be inspected.
///
/// `element_count` returns `None` for an absent collection.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::Collection;
///
/// assert_eq!(vec![1, 2, 3].element_count(), Some(3));
/// assert_eq!("".element_count(), Some(0));
/// assert_eq!(None::<Vec<u8>>.element_count(), None);
/// ```
pub trait Collection {
    /// Number of elements, or `None` if the collection is absent.
    fn element_count(&self) -> Option<usize>;
}

impl<T> Collection for [T] {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Collection for [T; N] {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Collection for Vec<T> {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Collection for VecDeque<T> {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

// Strings count bytes: only zero versus non-zero matters here.
impl Collection for str {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Collection for String {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> Collection for HashSet<T, S> {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Collection for BTreeSet<T> {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<C: Collection> Collection for Option<C> {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        self.as_ref().and_then(Collection::element_count)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        (**self).element_count()
    }
}

impl<C: Collection + ?Sized> Collection for Box<C> {
    #[inline]
    fn element_count(&self) -> Option<usize> {
        (**self).element_count()
    }
}

/// Predicate that checks a collection is present (not null), empty or not.
#[derive(Clone, Copy, Default, Debug)]
pub struct Present;

impl<C: Collection + ?Sized> Predicate<C> for Present {
    #[inline]
    fn check(&self, value: &C) -> bool {
        value.element_count().is_some()
    }
}

/// Create a predicate that checks a collection is present.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// assert!(present().check(&Some(Vec::<u8>::new())));
/// assert!(!present().check(&None::<Vec<u8>>));
/// ```
pub fn present() -> Present {
    Present
}

/// Predicate that checks a collection holds at least one element.
///
/// An absent collection has no elements and fails.
#[derive(Clone, Copy, Default, Debug)]
pub struct HasElements;

impl<C: Collection + ?Sized> Predicate<C> for HasElements {
    #[inline]
    fn check(&self, value: &C) -> bool {
        matches!(value.element_count(), Some(count) if count > 0)
    }
}

/// Create a predicate that checks a collection has at least one element.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// assert!(has_elements().check(&vec![1]));
/// assert!(!has_elements().check(&Vec::<i32>::new()));
/// assert!(!has_elements().check(&None::<Vec<i32>>));
/// ```
pub fn has_elements() -> HasElements {
    HasElements
}
