//! Limited values
//!
//! A [`Limited<L>`] holds a payload that the rule of the tag `L` admitted.
//! The only ways in are [`Limited::create`], [`Limited::try_create`] and the
//! conversions built on them, so holding a `Limited<L>` proves the payload is
//! the normalized form of some raw input that satisfied `L`'s rule.
//!
//! Tags are uninhabited types declared with [`limit!`](crate::limit). Each
//! tag owns exactly one rule, built lazily on first use and shared by every
//! value carrying that tag.
//!
//! ```
//! use limited::prelude::*;
//!
//! limit! {
//!     pub ShortName: Validator<String, MaxLength, Trim> = Validator::new(max_length(5), Trim);
//! }
//!
//! let name = Limited::<ShortName>::create("  short".to_string()).unwrap();
//! assert_eq!(name.extract(), "short");
//!
//! assert!(Limited::<ShortName>::create("much too long".to_string()).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::ValidationError;
use crate::validator::Rule;

// ============================================================================
// LIMIT TAG
// ============================================================================

/// A type-level tag bound to one process-wide rule.
///
/// Usually implemented through [`limit!`](crate::limit). A manual
/// implementation must return the same rule from every call to
/// [`rule`](Limit::rule).
pub trait Limit: 'static {
    /// The payload type of values carrying this tag.
    type Payload;

    /// The rule values carrying this tag satisfy.
    type Rule: Rule<Payload = Self::Payload> + Send + Sync + 'static;

    /// Tag name, used in `Debug` output, log fields and error fields.
    const NAME: &'static str;

    /// Returns the tag's rule.
    fn rule() -> &'static Self::Rule;
}

/// Forces construction of `L`'s rule and returns it.
///
/// A rule declared with a bad configuration panics on first use; calling
/// this during start-up moves that panic ahead of any validation.
///
/// ```
/// use limited::prelude::*;
///
/// limit! {
///     pub Slug: Validator<String, Matches, TrimLowercase> =
///         Validator::new(Matches::new("^[a-z0-9-]+$")?, TrimLowercase);
/// }
///
/// let rule = limited::ensure::<Slug>();
/// assert_eq!(rule.predicate().as_str(), "^[a-z0-9-]+$");
/// ```
pub fn ensure<L: Limit>() -> &'static L::Rule {
    L::rule()
}

// ============================================================================
// LIMITED VALUE
// ============================================================================

/// A payload admitted by the rule of tag `L`.
///
/// Equality, ordering and hashing look only at the payload: two values with
/// different tags but equal payloads compare equal.
pub struct Limited<L: Limit> {
    value: L::Payload,
    _limit: PhantomData<fn() -> L>,
}

impl<L: Limit> Limited<L> {
    /// Validates `raw` against `L`'s rule and wraps the normalized result.
    ///
    /// Returns `None` when the rule rejects the input.
    pub fn create(raw: L::Payload) -> Option<Self> {
        let rule = L::rule();
        let value = rule.normalize(raw);
        if rule.admits(&value) {
            Some(Self::admitted(value))
        } else {
            tracing::trace!(limit = L::NAME, "value rejected");
            None
        }
    }

    /// Like [`create`](Self::create), but explains a rejection.
    ///
    /// The error's `field` is set to the tag name.
    pub fn try_create(raw: L::Payload) -> Result<Self, ValidationError> {
        match L::rule().check(raw) {
            Ok(value) => Ok(Self::admitted(value)),
            Err(error) => {
                tracing::trace!(limit = L::NAME, code = %error.code, "value rejected");
                Err(error.with_field(L::NAME))
            }
        }
    }

    fn admitted(value: L::Payload) -> Self {
        Self {
            value,
            _limit: PhantomData,
        }
    }

    /// Consumes the value and returns the payload.
    pub fn extract(self) -> L::Payload {
        self.value
    }

    /// Borrows the payload.
    pub fn get(&self) -> &L::Payload {
        &self.value
    }

    /// Re-validates the payload against another tag's rule.
    ///
    /// Equivalent to `Limited::<M>::create(self.extract())`. Normalization of
    /// `M` applies, so the payload may change.
    pub fn convert_to<M>(self) -> Option<Limited<M>>
    where
        M: Limit<Payload = L::Payload>,
    {
        Limited::create(self.value)
    }

    /// Like [`convert_to`](Self::convert_to), but explains a rejection.
    pub fn try_convert_to<M>(self) -> Result<Limited<M>, ValidationError>
    where
        M: Limit<Payload = L::Payload>,
    {
        Limited::try_create(self.value)
    }

    /// Name of the tag.
    pub fn name(&self) -> &'static str {
        L::NAME
    }
}

// ============================================================================
// TRAIT IMPLS
// ============================================================================

impl<L: Limit> Clone for Limited<L>
where
    L::Payload: Clone,
{
    fn clone(&self) -> Self {
        Self::admitted(self.value.clone())
    }
}

impl<L: Limit> Copy for Limited<L> where L::Payload: Copy {}

impl<L: Limit> fmt::Debug for Limited<L>
where
    L::Payload: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(L::NAME).field(&self.value).finish()
    }
}

impl<L: Limit> fmt::Display for Limited<L>
where
    L::Payload: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<L, M> PartialEq<Limited<M>> for Limited<L>
where
    L: Limit,
    M: Limit<Payload = L::Payload>,
    L::Payload: PartialEq,
{
    fn eq(&self, other: &Limited<M>) -> bool {
        self.value == other.value
    }
}

impl<L: Limit> Eq for Limited<L> where L::Payload: Eq {}

impl<L, M> PartialOrd<Limited<M>> for Limited<L>
where
    L: Limit,
    M: Limit<Payload = L::Payload>,
    L::Payload: PartialOrd,
{
    fn partial_cmp(&self, other: &Limited<M>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<L: Limit> Ord for Limited<L>
where
    L::Payload: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<L: Limit> Hash for Limited<L>
where
    L::Payload: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<L: Limit> Deref for Limited<L> {
    type Target = L::Payload;

    fn deref(&self) -> &L::Payload {
        &self.value
    }
}

impl<L: Limit> AsRef<L::Payload> for Limited<L> {
    fn as_ref(&self) -> &L::Payload {
        &self.value
    }
}

impl<L> FromStr for Limited<L>
where
    L: Limit<Payload = String>,
{
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_create(s.to_owned())
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl<L: Limit> Serialize for Limited<L>
where
    L::Payload: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Deserializes the raw payload and admits it through [`Limited::try_create`],
/// so deserialization cannot bypass the rule.
impl<'de, L: Limit> Deserialize<'de> for Limited<L>
where
    L::Payload: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = L::Payload::deserialize(deserializer)?;
        Self::try_create(raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::normalize::{Identity, Trim, TrimLowercase};
    use crate::predicates::{InRange, Matches, MaxLength, MinLength, max_length, min_length};
    use crate::validator::Validator;

    crate::limit! {
        ShortName: Validator<String, MaxLength, Trim> = Validator::new(max_length(5), Trim);
        LongName: Validator<String, MinLength, Trim> = Validator::new(min_length(3), Trim);
        Lower: Validator<String, Matches, TrimLowercase> =
            Validator::new(Matches::new("^[a-z]+$")?, TrimLowercase);
        Percent: Validator<i64, InRange<i64>, Identity> = Validator::unnormalized(InRange::new(0, 100)?);
    }

    #[test]
    fn test_create_and_extract() {
        let name = Limited::<ShortName>::create("  short".to_string()).unwrap();
        assert_eq!(name.get(), "short");
        assert_eq!(name.extract(), "short");
    }

    #[test]
    fn test_create_rejects() {
        assert!(Limited::<ShortName>::create("much too long".to_string()).is_none());
        assert!(Limited::<Percent>::create(150).is_none());
    }

    #[test]
    fn test_try_create_names_the_limit() {
        let error = Limited::<ShortName>::try_create("much too long".to_string()).unwrap_err();
        assert_eq!(error.field.as_deref(), Some("ShortName"));
        assert_eq!(error.code, "max_length");
    }

    #[test]
    fn test_equality_ignores_tag() {
        let a = Limited::<ShortName>::create("alice".to_string()).unwrap();
        let b = Limited::<LongName>::create("alice".to_string()).unwrap();
        assert!(a == b);
        assert!(b == a);

        let c = Limited::<LongName>::create("bobby".to_string()).unwrap();
        assert!(a != c);
        assert!(a < c);
    }

    #[test]
    fn test_convert_to() {
        let short = Limited::<ShortName>::create("abc".to_string()).unwrap();
        let long: Limited<LongName> = short.clone().convert_to().unwrap();
        assert_eq!(long.get(), "abc");

        let tiny = Limited::<ShortName>::create("ab".to_string()).unwrap();
        assert!(tiny.convert_to::<LongName>().is_none());
        assert_eq!(
            short.try_convert_to::<Lower>().unwrap().extract(),
            "abc"
        );
    }

    #[test]
    fn test_convert_to_applies_target_normalizer() {
        let mixed = Limited::<LongName>::create("ABCD".to_string()).unwrap();
        let lower = mixed.convert_to::<Lower>().unwrap();
        assert_eq!(lower.get(), "abcd");
    }

    #[test]
    fn test_debug_and_display() {
        let name = Limited::<ShortName>::create("bob".to_string()).unwrap();
        assert_eq!(format!("{name:?}"), "ShortName(\"bob\")");
        assert_eq!(name.to_string(), "bob");
        assert_eq!(name.name(), "ShortName");
    }

    #[test]
    fn test_copy_for_copy_payloads() {
        let p = Limited::<Percent>::create(42).unwrap();
        let q = p;
        assert_eq!(*p + *q, 84);
    }

    #[test]
    fn test_hash_by_payload() {
        let mut set = HashSet::new();
        set.insert(Limited::<ShortName>::create("bob".to_string()).unwrap());
        set.insert(Limited::<ShortName>::create(" bob ".to_string()).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_str() {
        let lower: Limited<Lower> = " HELLO ".parse().unwrap();
        assert_eq!(lower.as_ref(), "hello");
        assert!("hello world".parse::<Limited<Lower>>().is_err());
    }

    #[test]
    fn test_ensure_returns_shared_rule() {
        assert!(std::ptr::eq(ensure::<ShortName>(), ShortName::rule()));
        assert_eq!(ensure::<ShortName>().predicate().max, 5);
    }

    #[test]
    fn test_limited_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Limited<ShortName>>();
        assert_send_sync::<Limited<Percent>>();
    }
}
