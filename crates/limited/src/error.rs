//! Error types
//!
//! Two kinds of failure exist and they never mix:
//!
//! - [`ValidationError`] describes input that did not satisfy a rule. It is an
//!   ordinary, expected outcome and is returned as a value.
//! - [`ConfigError`] describes a rule that could not be built (malformed
//!   pattern, inverted range, empty set). It is a defect in the rule
//!   definition and surfaces when the rule is constructed, never while
//!   validating.
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` so the
//! common case of static codes and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Ordered key-value parameters attached to a [`ValidationError`].
///
/// Typically 0-3 entries, kept inline.
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

/// Structured description of why a value was rejected.
///
/// # Examples
///
/// ```
/// use limited::ValidationError;
///
/// let error = ValidationError::new("max_length", "Must be at most 5 characters")
///     .with_param("max", "5")
///     .with_param("actual", "13");
///
/// assert_eq!(error.param("max"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling, e.g. `"max_length"`.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Name of the rule or field the error belongs to, if known.
    pub field: Option<Cow<'static, str>>,

    /// Parameters describing the failed check, e.g. `[("max", "5"), ("actual", "13")]`.
    pub params: ErrorParams,

    /// Errors of the individual alternatives when a composite check failed.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field (or rule name) this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        for (i, error) in self.nested.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, error)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "out_of_range" error.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            "out_of_range",
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// A rule could not be constructed from its configuration.
///
/// Returned by fallible predicate constructors and by
/// [`RuleConfig::build`](crate::config::RuleConfig::build).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The regular expression does not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Lower bound is greater than upper bound, or a bound is not comparable.
    #[error("invalid range: min `{min}` must not exceed max `{max}`")]
    InvalidRange { min: String, max: String },

    /// An enumerated set of allowed values has no members.
    #[error("allowed-value set must not be empty")]
    EmptySet,

    /// A serialized rule definition could not be parsed.
    #[error("malformed rule definition: {reason}")]
    Malformed { reason: String },
}

impl ConfigError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "CONFIG_INVALID_PATTERN",
            Self::InvalidRange { .. } => "CONFIG_INVALID_RANGE",
            Self::EmptySet => "CONFIG_EMPTY_SET",
            Self::Malformed { .. } => "CONFIG_MALFORMED",
        }
    }

    pub(crate) fn invalid_range(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
