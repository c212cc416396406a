//! Numeric range predicates

use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::{ConfigError, ValidationError};
use crate::predicate::Predicate;

crate::predicate! {
    /// Requires a value of at least `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(value: T);
}

crate::predicate! {
    /// Requires a value of at most `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(value: T);
}

/// Requires a value within the inclusive range `[min, max]`.
///
/// Construction fails if `min > max` or if the bounds are not comparable
/// (a NaN bound).
///
/// ```
/// use limited::predicates::InRange;
/// use limited::Predicate;
///
/// let percent = InRange::new(0, 100).unwrap();
/// assert!(percent.test(&50));
/// assert!(!percent.test(&150));
/// assert!(!percent.test(&-1));
///
/// assert!(InRange::new(10, 0).is_err());
/// assert!(InRange::new(f64::NAN, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InRange<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Display + Copy> InRange<T> {
    /// Creates a range predicate.
    pub fn new(min: T, max: T) -> Result<Self, ConfigError> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { min, max }),
            _ => Err(ConfigError::invalid_range(min, max)),
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: PartialOrd + Display + Copy> Predicate for InRange<T> {
    type Input = T;

    #[inline]
    fn test(&self, input: &T) -> bool {
        *input >= self.min && *input <= self.max
    }

    fn reject(&self, input: &T) -> ValidationError {
        ValidationError::out_of_range(self.min, self.max, *input)
    }
}

/// Creates a range predicate.
pub fn in_range<T: PartialOrd + Display + Copy>(min: T, max: T) -> Result<InRange<T>, ConfigError> {
    InRange::new(min, max)
}
