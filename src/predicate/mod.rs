//! Predicates behind the checks
//!
//! Each check in [`crate::check`] evaluates one of the predicates in this
//! module. They are exposed so callers can compose their own conditions with
//! [`PredicateExt::and`], [`PredicateExt::or`] and [`PredicateExt::not`] and
//! run them through [`crate::check::check_that`].
//!
//! # Example
//!
//! ```rust
//! use precondition::predicate::*;
//!
//! assert!(not_null().check(&Some(1)));
//! assert!(has_elements().check(&vec!["a"]));
//! assert!(printable_ascii().check("Well, this is cool"));
//! assert!(!ascii_alphanumeric().check("John Doe"));
//!
//! let tag = PredicateExt::<str>::and(has_elements(), ascii_alphanumeric());
//! assert!(tag.check("v2"));
//! assert!(!tag.check(""));
//! ```

mod collection;
mod combinators;
mod nullable;
mod text;

pub mod prelude;

// Re-export core trait
pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use collection::{has_elements, present, Collection, HasElements, Present};
pub use nullable::{is_null, not_null, IsNull, NotNull, Nullable};
pub use text::{
    all_chars, ascii_alphanumeric, is_ascii_alphanumeric, is_printable_ascii, printable_ascii,
    AllChars, Text,
};
