//! Normalizers
//!
//! A normalizer canonicalizes raw input before a predicate looks at it. The
//! normalized form is also what a [`Limited`](crate::Limited) value stores,
//! so every stored payload is canonical.
//!
//! Normalizers must be pure, total and idempotent:
//! `normalize(normalize(x)) == normalize(x)`.
//!
//! Any `Fn(T) -> T` is a normalizer, so ad-hoc canonicalization does not need
//! a named type:
//!
//! ```
//! use limited::normalize::Normalize;
//!
//! let upper = |s: String| s.to_uppercase();
//! assert_eq!(upper.normalize("abc".to_string()), "ABC");
//! ```

/// Canonicalizes a raw payload.
pub trait Normalize<T> {
    /// Returns the canonical form of `raw`.
    fn normalize(&self, raw: T) -> T;
}

impl<T, F> Normalize<T> for F
where
    F: Fn(T) -> T,
{
    #[inline]
    fn normalize(&self, raw: T) -> T {
        self(raw)
    }
}

/// Leaves the payload untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity;

impl<T> Normalize<T> for Identity {
    #[inline]
    fn normalize(&self, raw: T) -> T {
        raw
    }
}

/// Strips leading and trailing whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Trim;

impl Normalize<String> for Trim {
    fn normalize(&self, raw: String) -> String {
        let trimmed = raw.trim();
        if trimmed.len() == raw.len() {
            raw
        } else {
            trimmed.to_owned()
        }
    }
}

/// Converts the payload to lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lowercase;

impl Normalize<String> for Lowercase {
    fn normalize(&self, raw: String) -> String {
        raw.to_lowercase()
    }
}

/// Trims, then lowercases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrimLowercase;

impl Normalize<String> for TrimLowercase {
    fn normalize(&self, raw: String) -> String {
        Lowercase.normalize(Trim.normalize(raw))
    }
}

/// Trims and replaces every internal whitespace run with a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollapseWhitespace;

impl Normalize<String> for CollapseWhitespace {
    fn normalize(&self, raw: String) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.normalize(42), 42);
        assert_eq!(Identity.normalize(String::from("  x ")), "  x ");
    }

    #[test]
    fn test_trim() {
        assert_eq!(Trim.normalize(String::from("  short")), "short");
        assert_eq!(Trim.normalize(String::from("short\t\n")), "short");
        assert_eq!(Trim.normalize(String::from("   ")), "");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(Lowercase.normalize(String::from("MiXeD")), "mixed");
        assert_eq!(Lowercase.normalize(String::from("already")), "already");
    }

    #[test]
    fn test_trim_lowercase() {
        assert_eq!(TrimLowercase.normalize(String::from("  ABC ")), "abc");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            CollapseWhitespace.normalize(String::from("  a \t b\n\nc  ")),
            "a b c"
        );
    }

    #[test]
    fn test_closure_normalizer() {
        let abs = |n: i64| n.abs();
        assert_eq!(abs.normalize(-5), 5);
        assert_eq!(abs.normalize(abs.normalize(-5)), 5);
    }

    #[test]
    fn test_idempotent() {
        for raw in ["  Hello  World ", "x", "", " \t "] {
            let once = CollapseWhitespace.normalize(raw.to_string());
            let twice = CollapseWhitespace.normalize(once.clone());
            assert_eq!(once, twice);

            let once = TrimLowercase.normalize(raw.to_string());
            let twice = TrimLowercase.normalize(once.clone());
            assert_eq!(once, twice);
        }
    }
}
