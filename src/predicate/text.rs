//! Character-class predicates
//!
//! This module provides predicates over a single `char` or every character of
//! a string. Both are [`Text`], so the same predicate value checks either.
//!
//! An empty string has no characters, so every character-class predicate
//! holds for it.

use super::combinators::Predicate;

/// A single character or a string of characters.
pub trait Text {
    /// Returns `true` if `f` holds for every character.
    fn all_chars<F: FnMut(char) -> bool>(&self, f: F) -> bool;
}

impl Text for char {
    #[inline]
    fn all_chars<F: FnMut(char) -> bool>(&self, mut f: F) -> bool {
        f(*self)
    }
}

impl Text for str {
    #[inline]
    fn all_chars<F: FnMut(char) -> bool>(&self, f: F) -> bool {
        self.chars().all(f)
    }
}

impl Text for String {
    #[inline]
    fn all_chars<F: FnMut(char) -> bool>(&self, f: F) -> bool {
        self.as_str().all_chars(f)
    }
}

impl<S: Text + ?Sized> Text for &S {
    #[inline]
    fn all_chars<F: FnMut(char) -> bool>(&self, f: F) -> bool {
        (**self).all_chars(f)
    }
}

/// Predicate that checks if all characters satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(pub F);

impl<S, F> Predicate<S> for AllChars<F>
where
    S: Text + ?Sized,
    F: Fn(char) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &S) -> bool {
        value.all_chars(&self.0)
    }
}

/// Create a predicate that checks if all characters satisfy a condition.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// assert!(all_chars(|c: char| c.is_ascii_digit()).check("2024"));
/// assert!(!all_chars(|c: char| c.is_ascii_digit()).check("20x4"));
/// ```
pub fn all_chars<F: Fn(char) -> bool + Send + Sync>(f: F) -> AllChars<F> {
    AllChars(f)
}

/// Returns `true` for printable ASCII: ordinals 32 (space) through 126 (`~`).
///
/// Control characters such as `\n` and `\t` are not printable.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::is_printable_ascii;
///
/// assert!(is_printable_ascii(' '));
/// assert!(is_printable_ascii('~'));
/// assert!(!is_printable_ascii('\n'));
/// assert!(!is_printable_ascii('\u{7f}'));
/// ```
#[inline]
pub fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Returns `true` for `a-z`, `A-Z` and `0-9` only.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::is_ascii_alphanumeric;
///
/// assert!(is_ascii_alphanumeric('J'));
/// assert!(is_ascii_alphanumeric('0'));
/// assert!(!is_ascii_alphanumeric('_'));
/// assert!(!is_ascii_alphanumeric('é'));
/// ```
#[inline]
pub fn is_ascii_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Create a predicate that checks if all characters are printable ASCII.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// assert!(printable_ascii().check("Well, this is cool"));
/// assert!(!printable_ascii().check("Well,\n this is cool"));
/// assert!(printable_ascii().check(&'!'));
/// ```
pub fn printable_ascii() -> AllChars<fn(char) -> bool> {
    AllChars(is_printable_ascii)
}

/// Create a predicate that checks if all characters are ASCII letters or digits.
///
/// # Example
///
/// ```rust
/// use precondition::predicate::*;
///
/// assert!(ascii_alphanumeric().check("J0hnD03"));
/// assert!(!ascii_alphanumeric().check("John Doe"));
/// assert!(!ascii_alphanumeric().check(&'-'));
/// ```
pub fn ascii_alphanumeric() -> AllChars<fn(char) -> bool> {
    AllChars(is_ascii_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_ascii_bounds() {
        assert!(!is_printable_ascii(char::from(31)));
        assert!(is_printable_ascii(char::from(32)));
        assert!(is_printable_ascii(char::from(126)));
        assert!(!is_printable_ascii(char::from(127)));
        assert!(!is_printable_ascii('\t'));
        assert!(!is_printable_ascii('ü'));
    }

    #[test]
    fn test_printable_ascii_every_ordinal() {
        for ordinal in 0_u8..=127 {
            let expected = (32..=126).contains(&ordinal);
            assert_eq!(is_printable_ascii(char::from(ordinal)), expected, "{}", ordinal);
        }
    }

    #[test]
    fn test_ascii_alphanumeric() {
        assert!(ascii_alphanumeric().check("abcXYZ019"));
        assert!(!ascii_alphanumeric().check("John Doe"));
        assert!(!ascii_alphanumeric().check("hello_123"));
        // Unicode letters and digits are outside the class
        assert!(!ascii_alphanumeric().check("héllo"));
        assert!(!ascii_alphanumeric().check("١٢٣"));
    }

    #[test]
    fn test_single_char() {
        assert!(printable_ascii().check(&'a'));
        assert!(!printable_ascii().check(&'\n'));
        assert!(ascii_alphanumeric().check(&'7'));
        assert!(!ascii_alphanumeric().check(&' '));
    }

    #[test]
    fn test_owned_string() {
        assert!(printable_ascii().check(&String::from("ok ok")));
        assert!(!ascii_alphanumeric().check(&String::from("not ok")));
    }

    #[test]
    fn test_empty_string_is_vacuously_true() {
        assert!(printable_ascii().check(""));
        assert!(ascii_alphanumeric().check(""));
        assert!(all_chars(|_| false).check(""));
    }

    #[test]
    fn test_all_chars_stops_at_first_failure() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let seen = AtomicUsize::new(0);
        let p = all_chars(|c: char| {
            seen.fetch_add(1, Ordering::SeqCst);
            c != 'x'
        });
        assert!(!p.check("abxdef"));
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }
}
