//! Predicates
//!
//! A predicate is a pure test over a configuration and a normalized value.
//! In this crate the configuration lives in the predicate's own fields: a
//! [`MaxLength`](crate::predicates::MaxLength) *is* the pair
//! `(max, |max, s| len(s) <= max)`. When a rule is easier to express as an
//! explicit `(config, fn)` pair, use [`from_fn`].
//!
//! Predicates never panic on bad input. Failure is the `false` result of
//! [`Predicate::test`]; [`Predicate::reject`] only describes it.

use std::fmt;
use std::marker::PhantomData;

use crate::combinators::{And, Not, Or};
use crate::error::ValidationError;

// ============================================================================
// CORE PREDICATE TRAIT
// ============================================================================

/// A pure, deterministic test over a value.
///
/// # Examples
///
/// ```
/// use limited::{Predicate, ValidationError};
///
/// struct Even;
///
/// impl Predicate for Even {
///     type Input = i64;
///
///     fn test(&self, input: &i64) -> bool {
///         input % 2 == 0
///     }
///
///     fn reject(&self, _input: &i64) -> ValidationError {
///         ValidationError::new("even", "Value must be even")
///     }
/// }
///
/// assert!(Even.test(&4));
/// assert!(!Even.test(&3));
/// ```
pub trait Predicate {
    /// The type being tested (can be `?Sized`, e.g. `str`).
    type Input: ?Sized;

    /// Returns `true` if `input` satisfies the predicate.
    fn test(&self, input: &Self::Input) -> bool;

    /// Describes why `input` does not satisfy the predicate.
    ///
    /// Only meaningful when [`test`](Predicate::test) returned `false`.
    fn reject(&self, input: &Self::Input) -> ValidationError {
        let _ = input;
        ValidationError::new("predicate", "Value does not satisfy the predicate")
    }
}

impl<P> Predicate for &P
where
    P: Predicate + ?Sized,
{
    type Input = P::Input;

    #[inline]
    fn test(&self, input: &Self::Input) -> bool {
        (**self).test(input)
    }

    fn reject(&self, input: &Self::Input) -> ValidationError {
        (**self).reject(input)
    }
}

impl<P> Predicate for Box<P>
where
    P: Predicate + ?Sized,
{
    type Input = P::Input;

    #[inline]
    fn test(&self, input: &Self::Input) -> bool {
        (**self).test(input)
    }

    fn reject(&self, input: &Self::Input) -> ValidationError {
        (**self).reject(input)
    }
}

// ============================================================================
// PREDICATE EXTENSION TRAIT
// ============================================================================

/// Combinator methods, implemented for every [`Predicate`].
///
/// ```
/// use limited::prelude::*;
///
/// let username = min_length(3).and(max_length(20));
/// assert!(username.test("alice"));
/// assert!(!username.test("al"));
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must hold. Short-circuits on the first failure.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Predicate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one predicate must hold. Short-circuits on the first success.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Predicate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the predicate.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Predicate> PredicateExt for T {}

// ============================================================================
// FUNCTION PREDICATE
// ============================================================================

/// A predicate given as explicit configuration plus a `(config, value) -> bool`
/// function.
///
/// Created with [`from_fn`].
pub struct FnPredicate<C, F, I: ?Sized> {
    config: C,
    test: F,
    _input: PhantomData<fn(&I)>,
}

impl<C, F, I> FnPredicate<C, F, I>
where
    F: Fn(&C, &I) -> bool,
    I: ?Sized,
{
    /// Binds `test` to `config`.
    pub fn new(config: C, test: F) -> Self {
        Self {
            config,
            test,
            _input: PhantomData,
        }
    }

    /// Returns the bound configuration.
    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<C, F, I> Predicate for FnPredicate<C, F, I>
where
    F: Fn(&C, &I) -> bool,
    I: ?Sized,
{
    type Input = I;

    #[inline]
    fn test(&self, input: &I) -> bool {
        (self.test)(&self.config, input)
    }
}

impl<C: Clone, F: Clone, I: ?Sized> Clone for FnPredicate<C, F, I> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            test: self.test.clone(),
            _input: PhantomData,
        }
    }
}

impl<C: fmt::Debug, F, I: ?Sized> fmt::Debug for FnPredicate<C, F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Creates a predicate from a configuration value and a test function.
///
/// # Examples
///
/// ```
/// use limited::predicate::{Predicate, from_fn};
///
/// let short = from_fn(5usize, |max: &usize, s: &str| s.chars().count() <= *max);
/// assert!(short.test("short"));
/// assert!(!short.test("much too long"));
/// assert_eq!(*short.config(), 5);
/// ```
pub fn from_fn<C, I, F>(config: C, test: F) -> FnPredicate<C, F, I>
where
    F: Fn(&C, &I) -> bool,
    I: ?Sized,
{
    FnPredicate::new(config, test)
}
