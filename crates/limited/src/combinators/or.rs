//! OR combinator - logical disjunction of predicates

use crate::error::ValidationError;
use crate::predicate::Predicate;

/// Combines two predicates with logical OR.
///
/// When both sides fail the rejection nests both reasons.
///
/// ```
/// use limited::combinators::Or;
/// use limited::predicates::exact_length;
/// use limited::Predicate;
///
/// let p = Or::new(exact_length(5), exact_length(10));
/// assert!(p.test("hello"));
/// assert!(p.test("helloworld"));
/// assert!(!p.test("hi"));
/// assert_eq!(p.reject("hi").nested.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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
}

impl<L, R> Predicate for Or<L, R>
where
    L: Predicate,
    R: Predicate<Input = L::Input>,
{
    type Input = L::Input;

    #[inline]
    fn test(&self, input: &Self::Input) -> bool {
        self.left.test(input) || self.right.test(input)
    }

    fn reject(&self, input: &Self::Input) -> ValidationError {
        ValidationError::new("or_failed", "All alternatives failed")
            .with_nested(vec![self.left.reject(input), self.right.reject(input)])
    }
}

/// Creates an `Or` combinator from two predicates.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Predicate,
    R: Predicate<Input = L::Input>,
{
    Or::new(left, right)
}
