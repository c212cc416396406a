//! Rules described as data
//!
//! A [`RuleConfig`] is a serializable description of a string rule. Building
//! it checks the whole configuration up front (patterns compile, ranges are
//! ordered, sets are non-empty) and yields a [`ConfiguredRule`], which is an
//! ordinary [`Rule`] and can back a [`limit!`](crate::limit) tag.
//!
//! ```
//! use limited::prelude::*;
//!
//! let config = RuleConfig::from_json(
//!     r#"{ "kind": "length_range", "min": 3, "max": 20, "normalize": "trim_lowercase" }"#,
//! )
//! .unwrap();
//! let rule = config.build().unwrap();
//!
//! assert_eq!(rule.validate("  Alice ".to_string()).as_deref(), Some("alice"));
//! assert_eq!(rule.validate("al".to_string()), None);
//! ```
//!
//! Configurations are plain immutable values. A rule built from one never
//! changes; to use a different configuration, build a new rule.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ConfigError, ValidationError};
use crate::normalize::{CollapseWhitespace, Lowercase, Normalize, Trim, TrimLowercase};
use crate::predicate::Predicate;
use crate::predicates::{LengthRange, Matches, MaxLength, MinLength, OneOf};
use crate::validator::{Rule, Validator};

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalizers selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Leave input untouched.
    #[default]
    None,
    /// See [`Trim`].
    Trim,
    /// See [`Lowercase`].
    Lowercase,
    /// See [`TrimLowercase`].
    TrimLowercase,
    /// See [`CollapseWhitespace`].
    CollapseWhitespace,
}

impl Normalize<String> for Normalization {
    fn normalize(&self, raw: String) -> String {
        match self {
            Self::None => raw,
            Self::Trim => Trim.normalize(raw),
            Self::Lowercase => Lowercase.normalize(raw),
            Self::TrimLowercase => TrimLowercase.normalize(raw),
            Self::CollapseWhitespace => CollapseWhitespace.normalize(raw),
        }
    }
}

// ============================================================================
// RULE CONFIG
// ============================================================================

/// The check a [`RuleConfig`] performs, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckConfig {
    /// At most `max` characters (bytes if `bytes` is set).
    MaxLength {
        max: usize,
        #[serde(default)]
        bytes: bool,
    },
    /// At least `min` characters (bytes if `bytes` is set).
    MinLength {
        min: usize,
        #[serde(default)]
        bytes: bool,
    },
    /// Between `min` and `max` characters inclusive.
    LengthRange {
        min: usize,
        max: usize,
        #[serde(default)]
        bytes: bool,
    },
    /// Matches a regular expression.
    Pattern { pattern: String },
    /// Equal to one of `values`.
    OneOf { values: Vec<String> },
}

impl CheckConfig {
    /// The `kind` tag of this check.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MaxLength { .. } => "max_length",
            Self::MinLength { .. } => "min_length",
            Self::LengthRange { .. } => "length_range",
            Self::Pattern { .. } => "pattern",
            Self::OneOf { .. } => "one_of",
        }
    }

    fn predicate(&self) -> Result<BoxedPredicate, ConfigError> {
        let predicate: BoxedPredicate = match self {
            Self::MaxLength { max, bytes: false } => Box::new(MaxLength::new(*max)),
            Self::MaxLength { max, bytes: true } => Box::new(MaxLength::bytes(*max)),
            Self::MinLength { min, bytes: false } => Box::new(MinLength::new(*min)),
            Self::MinLength { min, bytes: true } => Box::new(MinLength::bytes(*min)),
            Self::LengthRange {
                min,
                max,
                bytes: false,
            } => Box::new(LengthRange::new(*min, *max)?),
            Self::LengthRange {
                min,
                max,
                bytes: true,
            } => Box::new(LengthRange::bytes(*min, *max)?),
            Self::Pattern { pattern } => Box::new(Matches::new(pattern)?),
            Self::OneOf { values } => Box::new(OneOf::<str>::new(values.iter().cloned())?),
        };
        Ok(predicate)
    }
}

/// A string rule described as data.
///
/// ```
/// use limited::config::{CheckConfig, Normalization, RuleConfig};
///
/// let config = RuleConfig::new(CheckConfig::MaxLength { max: 5, bytes: false })
///     .with_normalize(Normalization::Trim);
///
/// assert_eq!(
///     serde_json::to_string(&config).unwrap(),
///     r#"{"kind":"max_length","max":5,"bytes":false,"normalize":"trim"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// What the rule checks.
    #[serde(flatten)]
    pub check: CheckConfig,

    /// How raw input is canonicalized before the check.
    #[serde(default)]
    pub normalize: Normalization,
}

impl RuleConfig {
    /// Creates a configuration that does not normalize.
    pub fn new(check: CheckConfig) -> Self {
        Self {
            check,
            normalize: Normalization::None,
        }
    }

    /// Sets the normalization.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_normalize(mut self, normalize: Normalization) -> Self {
        self.normalize = normalize;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|error| ConfigError::Malformed {
            reason: error.to_string(),
        })
    }

    /// Checks the configuration and builds the rule it describes.
    pub fn build(&self) -> Result<ConfiguredRule, ConfigError> {
        let predicate = self.check.predicate()?;
        tracing::debug!(
            kind = self.check.kind(),
            normalize = ?self.normalize,
            "rule built from configuration"
        );
        Ok(ConfiguredRule {
            config: self.clone(),
            validator: Validator::new(predicate, self.normalize),
        })
    }
}

// ============================================================================
// CONFIGURED RULE
// ============================================================================

type BoxedPredicate = Box<dyn Predicate<Input = str> + Send + Sync>;

/// A rule built from a [`RuleConfig`].
///
/// Deserializes from the same representation as [`RuleConfig`], building the
/// rule in the process, and serializes back to it.
#[derive(Deserialize)]
#[serde(try_from = "RuleConfig")]
pub struct ConfiguredRule {
    config: RuleConfig,
    validator: Validator<String, BoxedPredicate, Normalization>,
}

impl ConfiguredRule {
    /// The configuration this rule was built from.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }
}

impl Rule for ConfiguredRule {
    type Payload = String;

    fn normalize(&self, raw: String) -> String {
        self.validator.normalize(raw)
    }

    fn admits(&self, value: &String) -> bool {
        self.validator.admits(value)
    }

    fn reject(&self, value: &String) -> ValidationError {
        self.validator.reject(value)
    }
}

impl TryFrom<RuleConfig> for ConfiguredRule {
    type Error = ConfigError;

    fn try_from(config: RuleConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl Serialize for ConfiguredRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.config.serialize(serializer)
    }
}

impl fmt::Debug for ConfiguredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredRule")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
