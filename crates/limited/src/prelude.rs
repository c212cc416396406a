//! Prelude module for convenient imports.
//!
//! ```
//! use limited::prelude::*;
//! ```

pub use crate::combinators::{And, Not, Or};
pub use crate::config::{CheckConfig, ConfiguredRule, Normalization, RuleConfig};
pub use crate::error::{ConfigError, ValidationError};
pub use crate::limited::{Limit, Limited, ensure};
pub use crate::normalize::{
    CollapseWhitespace, Identity, Lowercase, Normalize, Trim, TrimLowercase,
};
pub use crate::predicate::{FnPredicate, Predicate, PredicateExt, from_fn};
pub use crate::predicates::*;
pub use crate::validator::{Rule, Validator};
pub use crate::{limit, predicate};
