//! Validators
//!
//! A [`Validator`] pairs one predicate (which carries its configuration) with
//! one normalizer and turns raw input into either a canonical, admitted value
//! or nothing. The [`Rule`] trait abstracts over anything with that shape so
//! [`Limited`](crate::Limited) can be tagged with any of them.
//!
//! ```
//! use limited::prelude::*;
//!
//! let short: Validator<String, MaxLength, Trim> = Validator::new(max_length(5), Trim);
//!
//! assert_eq!(short.validate("  short".to_string()).as_deref(), Some("short"));
//! assert_eq!(short.validate("much too long".to_string()), None);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::error::ValidationError;
use crate::normalize::{Identity, Normalize};
use crate::predicate::{FnPredicate, Predicate};

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A validation rule over an owned payload.
///
/// Implementors supply the three primitive steps; the provided
/// [`validate`](Rule::validate) and [`check`](Rule::check) always normalize
/// first and test the normalized value, so both agree on every input.
pub trait Rule {
    /// The payload type being validated.
    type Payload;

    /// Canonicalizes raw input. Must be idempotent.
    fn normalize(&self, raw: Self::Payload) -> Self::Payload;

    /// Returns true if an already-normalized value satisfies the rule.
    fn admits(&self, value: &Self::Payload) -> bool;

    /// Describes why an already-normalized value does not satisfy the rule.
    fn reject(&self, value: &Self::Payload) -> ValidationError;

    /// Returns the normalized value if it satisfies the rule.
    ///
    /// Never panics; rejection is `None`.
    fn validate(&self, raw: Self::Payload) -> Option<Self::Payload> {
        let value = self.normalize(raw);
        if self.admits(&value) {
            Some(value)
        } else {
            None
        }
    }

    /// Like [`validate`](Rule::validate), but explains a rejection.
    fn check(&self, raw: Self::Payload) -> Result<Self::Payload, ValidationError> {
        let value = self.normalize(raw);
        if self.admits(&value) {
            Ok(value)
        } else {
            Err(self.reject(&value))
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A predicate bound to a normalizer, validating payloads of type `T`.
///
/// `T` only needs to borrow as the predicate's input, so a `String` payload
/// works with `str` predicates. Neither the predicate nor the normalizer can
/// be replaced or mutated after construction.
pub struct Validator<T, P, N = Identity> {
    predicate: P,
    normalizer: N,
    _payload: PhantomData<fn(T) -> T>,
}

impl<T, P, N> Validator<T, P, N>
where
    P: Predicate,
    N: Normalize<T>,
    T: Borrow<P::Input>,
{
    /// Binds `predicate` to `normalizer`.
    pub fn new(predicate: P, normalizer: N) -> Self {
        Self {
            predicate,
            normalizer,
            _payload: PhantomData,
        }
    }

    /// Returns the predicate, which carries the rule's configuration.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Returns the normalizer.
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }
}

impl<T, P> Validator<T, P, Identity>
where
    P: Predicate,
    T: Borrow<P::Input>,
{
    /// A validator that tests raw input as-is.
    pub fn unnormalized(predicate: P) -> Self {
        Self::new(predicate, Identity)
    }
}

impl<T, C, F, I, N> Validator<T, FnPredicate<C, F, I>, N>
where
    F: Fn(&C, &I) -> bool,
    I: ?Sized,
    N: Normalize<T>,
    T: Borrow<I>,
{
    /// Builds a validator from explicit configuration, a `(config, value) -> bool`
    /// predicate function and a normalizer.
    ///
    /// ```
    /// use limited::prelude::*;
    ///
    /// type Short = Validator<String, FnPredicate<usize, fn(&usize, &str) -> bool, str>, Trim>;
    ///
    /// fn within(max: &usize, s: &str) -> bool {
    ///     s.chars().count() <= *max
    /// }
    ///
    /// let short: Short = Validator::from_fn(5, within as fn(&usize, &str) -> bool, Trim);
    /// assert_eq!(*short.config(), 5);
    /// assert!(short.validate(" short ".to_string()).is_some());
    /// ```
    pub fn from_fn(config: C, predicate: F, normalizer: N) -> Self {
        Self::new(FnPredicate::new(config, predicate), normalizer)
    }

    /// Returns the bound configuration.
    pub fn config(&self) -> &C {
        self.predicate.config()
    }
}

impl<T, P, N> Rule for Validator<T, P, N>
where
    P: Predicate,
    N: Normalize<T>,
    T: Borrow<P::Input>,
{
    type Payload = T;

    #[inline]
    fn normalize(&self, raw: T) -> T {
        self.normalizer.normalize(raw)
    }

    #[inline]
    fn admits(&self, value: &T) -> bool {
        self.predicate.test(value.borrow())
    }

    fn reject(&self, value: &T) -> ValidationError {
        self.predicate.reject(value.borrow())
    }
}

impl<T, P: Clone, N: Clone> Clone for Validator<T, P, N> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            normalizer: self.normalizer.clone(),
            _payload: PhantomData,
        }
    }
}

impl<T, P: fmt::Debug, N: fmt::Debug> fmt::Debug for Validator<T, P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("predicate", &self.predicate)
            .field("normalizer", &self.normalizer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Trim;
    use crate::predicate::PredicateExt;
    use crate::predicates::{InRange, MaxLength, Matches, max_length, min_length};

    fn short() -> Validator<String, MaxLength, Trim> {
        Validator::new(max_length(5), Trim)
    }

    #[test]
    fn test_validate_normalizes_before_testing() {
        assert_eq!(short().validate("  short".to_string()), Some("short".to_string()));
        assert_eq!(short().validate("much too long".to_string()), None);
    }

    #[test]
    fn test_validate_trailing_whitespace_does_not_count() {
        // 5 chars plus padding: only valid because the padding is normalized away
        assert!(short().validate("hello     ".to_string()).is_some());
    }

    #[test]
    fn test_check_explains_rejection() {
        let error = short().check("much too long".to_string()).unwrap_err();
        assert_eq!(error.code, "max_length");
        assert_eq!(error.param("actual"), Some("13"));
    }

    #[test]
    fn test_validate_is_deterministic() {
        let v = short();
        for raw in ["  short", "much too long", "", "12345 "] {
            assert_eq!(v.validate(raw.to_string()), v.validate(raw.to_string()));
        }
    }

    #[test]
    fn test_integer_range() {
        let v: Validator<i64, InRange<i64>> = Validator::unnormalized(InRange::new(0, 100).unwrap());
        assert_eq!(v.validate(50), Some(50));
        assert_eq!(v.validate(150), None);
        assert_eq!(v.validate(-1), None);
    }

    #[test]
    fn test_closure_normalizer() {
        let v: Validator<i64, InRange<i64>, _> =
            Validator::new(InRange::new(0, 10).unwrap(), |n: i64| n.abs());
        assert_eq!(v.validate(-7), Some(7));
        assert_eq!(v.validate(-11), None);
    }

    #[test]
    fn test_from_fn() {
        let v: Validator<String, _, _> = Validator::from_fn(
            (3usize, 8usize),
            |(min, max): &(usize, usize), s: &str| (*min..=*max).contains(&s.len()),
            Trim,
        );
        assert_eq!(*v.config(), (3, 8));
        assert!(v.validate(" abcd ".to_string()).is_some());
        assert!(v.validate("ab".to_string()).is_none());
        assert_eq!(v.check("ab".to_string()).unwrap_err().code, "predicate");
    }

    #[test]
    fn test_composed_predicate() {
        let v: Validator<String, _, _> = Validator::new(
            min_length(3).and(max_length(8)).and(Matches::new("^[a-z]+$").unwrap()),
            Trim,
        );
        assert!(v.validate(" abc ".to_string()).is_some());
        assert!(v.validate("ab".to_string()).is_none());
        assert_eq!(v.check("ABCD".to_string()).unwrap_err().code, "invalid_format");
    }

    #[test]
    fn test_accessors_and_debug() {
        let v = short();
        assert_eq!(v.predicate().max, 5);
        assert_eq!(*v.normalizer(), Trim);
        assert!(format!("{v:?}").starts_with("Validator { predicate: MaxLength"));
    }
}
