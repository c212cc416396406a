//! Enumerated-set membership

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::error::{ConfigError, ValidationError};
use crate::predicate::Predicate;

/// Requires a value that is a member of a fixed, non-empty set.
///
/// `T` is the input type, which may be unsized: `OneOf<str>` owns its
/// members as `String`s and tests `&str` input.
///
/// ```
/// use limited::predicates::OneOf;
/// use limited::Predicate;
///
/// let colors = OneOf::<str>::new(["red", "green", "blue"]).unwrap();
/// assert!(colors.test("red"));
/// assert!(!colors.test("purple"));
///
/// let dice = OneOf::<u8>::new(1..=6).unwrap();
/// assert!(dice.test(&6));
/// assert!(!dice.test(&7));
/// ```
pub struct OneOf<T>
where
    T: ?Sized + ToOwned,
{
    allowed: HashSet<T::Owned>,
}

impl<T> OneOf<T>
where
    T: ?Sized + ToOwned + Eq + Hash,
    T::Owned: Eq + Hash,
{
    /// Creates a membership predicate. Fails if `values` is empty.
    pub fn new<I, V>(values: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = V>,
        V: Into<T::Owned>,
    {
        let allowed: HashSet<T::Owned> = values.into_iter().map(Into::into).collect();
        if allowed.is_empty() {
            return Err(ConfigError::EmptySet);
        }
        Ok(Self { allowed })
    }

    /// Returns true if `value` is a member of the set.
    pub fn contains(&self, value: &T) -> bool {
        self.allowed.contains(value)
    }

    /// Number of allowed values.
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Always false: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Iterates over the allowed values in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.allowed.iter().map(<T::Owned as Borrow<T>>::borrow)
    }
}

impl<T> Predicate for OneOf<T>
where
    T: ?Sized + ToOwned + Eq + Hash,
    T::Owned: Eq + Hash,
{
    type Input = T;

    #[inline]
    fn test(&self, input: &T) -> bool {
        self.contains(input)
    }

    fn reject(&self, _input: &T) -> ValidationError {
        ValidationError::new("one_of", "Value must be one of the allowed values")
            .with_param("allowed", self.allowed.len().to_string())
    }
}

impl<T> Clone for OneOf<T>
where
    T: ?Sized + ToOwned,
    T::Owned: Clone,
{
    fn clone(&self) -> Self {
        Self {
            allowed: self.allowed.clone(),
        }
    }
}

impl<T> fmt::Debug for OneOf<T>
where
    T: ?Sized + ToOwned,
    T::Owned: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneOf")
            .field("allowed", &self.allowed)
            .finish()
    }
}

/// Creates a membership predicate.
pub fn one_of<T, I, V>(values: I) -> Result<OneOf<T>, ConfigError>
where
    T: ?Sized + ToOwned + Eq + Hash,
    T::Owned: Eq + Hash,
    I: IntoIterator<Item = V>,
    V: Into<T::Owned>,
{
    OneOf::new(values)
}
