//! AND combinator - logical conjunction of predicates
//!
//! # Examples
//!
//! ```
//! use limited::combinators::And;
//! use limited::predicates::{max_length, min_length};
//! use limited::Predicate;
//!
//! let both = And::new(min_length(5), max_length(20));
//! assert!(both.test("hello"));
//! assert!(!both.test("hi"));
//! ```

use crate::error::ValidationError;
use crate::predicate::Predicate;

/// Combines two predicates with logical AND.
///
/// The rejection reported is the one of the first failing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left predicate.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right predicate.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right predicates.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Predicate for And<L, R>
where
    L: Predicate,
    R: Predicate<Input = L::Input>,
{
    type Input = L::Input;

    #[inline]
    fn test(&self, input: &Self::Input) -> bool {
        self.left.test(input) && self.right.test(input)
    }

    fn reject(&self, input: &Self::Input) -> ValidationError {
        if self.left.test(input) {
            self.right.reject(input)
        } else {
            self.left.reject(input)
        }
    }
}

/// Creates an `And` combinator from two predicates.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Predicate,
    R: Predicate<Input = L::Input>,
{
    And::new(left, right)
}
