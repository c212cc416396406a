//! # limited
//!
//! Values that can only exist once a validation rule has admitted them.
//!
//! A rule is a [`Validator`]: one [`Predicate`] (whose fields are its
//! configuration) bound to one [normalizer](normalize::Normalize). A
//! [`Limited<L>`] wraps a normalized payload together with the type-level tag
//! `L` of the rule that admitted it. Code receiving a `Limited<L>` never needs
//! to re-check it.
//!
//! ## Quick Start
//!
//! ```
//! use limited::prelude::*;
//!
//! limit! {
//!     /// Display names: trimmed, 1 to 5 characters.
//!     pub ShortName: Validator<String, LengthRange, Trim> =
//!         Validator::new(LengthRange::new(1, 5)?, Trim);
//!
//!     /// Percentages.
//!     pub Percent: Validator<i64, InRange<i64>> = Validator::unnormalized(InRange::new(0, 100)?);
//! }
//!
//! let name = Limited::<ShortName>::create("  short".to_string()).unwrap();
//! assert_eq!(name.extract(), "short");
//! assert!(Limited::<ShortName>::create("much too long".to_string()).is_none());
//!
//! let error = Limited::<Percent>::try_create(150).unwrap_err();
//! assert_eq!(error.code, "out_of_range");
//! ```
//!
//! ## Modules
//!
//! - [`normalize`]: canonicalization applied before every check
//! - [`predicate`] and [`predicates`]: the checks themselves
//! - [`combinators`]: `and`, `or`, `not`
//! - [`validator`]: predicate plus normalizer, and the [`Rule`] trait
//! - [`mod@limited`]: the [`Limited`] wrapper and [`Limit`] tags
//! - [`config`]: rules described as serializable data
//!
//! ## Errors
//!
//! Rejected input is an ordinary outcome: `None` from
//! [`Limited::create`], or a [`ValidationError`] from
//! [`Limited::try_create`]. A rule that cannot be built is a
//! [`ConfigError`], reported by the constructor that was handed the bad
//! configuration.

#![forbid(unsafe_code)]

pub mod combinators;
pub mod config;
pub mod error;
pub mod limited;
mod macros;
pub mod normalize;
pub mod predicate;
pub mod predicates;
pub mod prelude;
pub mod validator;

pub use error::{ConfigError, ValidationError};
pub use limited::{Limit, Limited, ensure};
pub use predicate::{Predicate, PredicateExt};
pub use validator::{Rule, Validator};

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
