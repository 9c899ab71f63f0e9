//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use precondition::predicate::prelude::*;
//!
//! let p = PredicateExt::<Option<String>>::and(present(), has_elements());
//! assert!(p.check(&Some("x".to_string())));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Input shapes
pub use super::collection::Collection;
pub use super::nullable::Nullable;
pub use super::text::Text;

// Predicates
pub use super::collection::{has_elements, present};
pub use super::nullable::{is_null, not_null};
pub use super::text::{all_chars, ascii_alphanumeric, printable_ascii};
