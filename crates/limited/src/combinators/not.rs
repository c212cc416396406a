//! NOT combinator - logical negation of a predicate

use crate::error::ValidationError;
use crate::predicate::Predicate;

/// Inverts a predicate.
///
/// ```
/// use limited::combinators::Not;
/// use limited::predicates::contains;
/// use limited::Predicate;
///
/// let p = Not::new(contains("admin"));
/// assert!(p.test("user123"));
/// assert!(!p.test("admin123"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Not<P> {
    pub(crate) inner: P,
}

impl<P> Not<P> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner predicate.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Extracts the inner predicate.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> Predicate for Not<P>
where
    P: Predicate,
{
    type Input = P::Input;

    #[inline]
    fn test(&self, input: &Self::Input) -> bool {
        !self.inner.test(input)
    }

    fn reject(&self, _input: &Self::Input) -> ValidationError {
        ValidationError::new("not_failed", "Value must not satisfy the inner predicate")
    }
}

/// Creates a `Not` combinator from a predicate.
pub fn not<P: Predicate>(predicate: P) -> Not<P> {
    Not::new(predicate)
}
