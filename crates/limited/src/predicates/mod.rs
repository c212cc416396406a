//! Built-in predicates
//!
//! Ready-made configurable predicates. Each struct's fields are its
//! configuration; constructors that can be handed inconsistent configuration
//! (inverted ranges, malformed patterns, empty sets) return
//! [`ConfigError`](crate::ConfigError).
//!
//! # Categories
//!
//! - **Length**: [`MaxLength`], [`MinLength`], [`ExactLength`], [`LengthRange`], [`NotEmpty`]
//! - **Range**: [`Min`], [`Max`], [`InRange`]
//! - **Pattern**: [`Matches`], [`Contains`], [`StartsWith`], [`EndsWith`],
//!   [`Alphanumeric`], [`IsLowercase`]
//! - **Set**: [`OneOf`]

pub mod length;
pub mod pattern;
pub mod range;
pub mod set;

pub use length::{
    ExactLength, LengthMode, LengthRange, MaxLength, MinLength, NotEmpty, exact_length,
    length_range, max_length, min_length, not_empty,
};

pub use pattern::{
    Alphanumeric, Contains, EndsWith, IsLowercase, Matches, StartsWith, alphanumeric, contains,
    ends_with, is_lowercase, matches, starts_with,
};

pub use range::{InRange, Max, Min, in_range, max, min};

pub use set::{OneOf, one_of};
