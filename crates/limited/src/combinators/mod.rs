//! Predicate combinators
//!
//! Combinators build new predicates out of existing ones. They are usually
//! reached through [`PredicateExt`](crate::predicate::PredicateExt):
//!
//! ```
//! use limited::prelude::*;
//!
//! let code = exact_length(3).or(exact_length(5)).and(is_lowercase());
//! assert!(code.test("abc"));
//! assert!(code.test("abcde"));
//! assert!(!code.test("ABC"));
//! assert!(!code.test("abcd"));
//! ```

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
