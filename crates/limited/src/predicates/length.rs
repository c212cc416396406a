//! String length predicates
//!
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructors for byte-length counting when the input is
//! known to be ASCII.

use crate::error::{ConfigError, ValidationError};
use crate::predicate::Predicate;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::predicate! {
    /// Requires a non-empty string.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN / MAX / EXACT LENGTH
// ============================================================================

crate::predicate! {
    /// Requires a string of at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length predicate that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

crate::predicate! {
    /// Requires a string of at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, self.mode.measure(input)) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length predicate that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

crate::predicate! {
    /// Requires a string of exactly `length` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) == self.length }
    error(self, input) {
        ValidationError::new(
            "exact_length",
            format!("String must be exactly {} characters", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", self.mode.measure(input).to_string())
    }
    new(length: usize) { Self { length, mode: LengthMode::Chars } }
    fn exact_length(length: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Requires a string length within `[min, max]`.
///
/// Cheaper than `min_length(a).and(max_length(b))` since it measures once.
/// Construction fails if `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    min: usize,
    max: usize,
    mode: LengthMode,
}

impl LengthRange {
    /// Creates a length range predicate (counts Unicode chars).
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        Self::with_mode(min, max, LengthMode::Chars)
    }

    /// Creates a length range predicate that counts bytes.
    pub fn bytes(min: usize, max: usize) -> Result<Self, ConfigError> {
        Self::with_mode(min, max, LengthMode::Bytes)
    }

    fn with_mode(min: usize, max: usize, mode: LengthMode) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::invalid_range(min, max));
        }
        Ok(Self { min, max, mode })
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Predicate for LengthRange {
    type Input = str;

    #[inline]
    fn test(&self, input: &str) -> bool {
        (self.min..=self.max).contains(&self.mode.measure(input))
    }

    fn reject(&self, input: &str) -> ValidationError {
        ValidationError::new(
            "length_range",
            format!(
                "String length must be between {} and {}",
                self.min, self.max
            ),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", self.mode.measure(input).to_string())
    }
}

/// Creates a length range predicate.
pub fn length_range(min: usize, max: usize) -> Result<LengthRange, ConfigError> {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
