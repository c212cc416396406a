//! String pattern predicates
//!
//! [`Matches`] compiles its regular expression once, when the predicate is
//! constructed. A malformed pattern is a [`ConfigError`] at that point and can
//! never surface while validating.

use crate::error::{ConfigError, ValidationError};

// ============================================================================
// REGEX
// ============================================================================

crate::predicate! {
    /// Requires a string matching a regular expression.
    ///
    /// ```
    /// use limited::predicates::Matches;
    /// use limited::Predicate;
    ///
    /// let word = Matches::new("^[a-z]+$").unwrap();
    /// assert!(word.test("abc"));
    /// assert!(!word.test("ABC"));
    ///
    /// assert!(Matches::new("^[a-z+$").is_err());
    /// ```
    pub Matches { regex: regex::Regex } for str;
    rule(self, input) { self.regex.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("pattern")
            .with_param("pattern", self.regex.as_str().to_string())
    }
    new(pattern: &str) -> ConfigError {
        let regex = regex::Regex::new(pattern).map_err(|error| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: error.to_string(),
        })?;
        tracing::trace!(pattern, "compiled pattern");
        Ok(Self { regex })
    }
    fn matches(pattern: &str) -> ConfigError;
}

impl Matches {
    /// Returns the source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

// ============================================================================
// SUBSTRINGS
// ============================================================================

crate::predicate! {
    /// Requires a string containing a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String } for str;
    rule(self, input) { input.contains(&self.substring) }
    error(self, input) {
        ValidationError::new(
            "contains",
            format!("String must contain '{}'", self.substring),
        )
        .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::predicate! {
    /// Requires a string starting with a prefix.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String } for str;
    rule(self, input) { input.starts_with(&self.prefix) }
    error(self, input) {
        ValidationError::new(
            "starts_with",
            format!("String must start with '{}'", self.prefix),
        )
        .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::predicate! {
    /// Requires a string ending with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String } for str;
    rule(self, input) { input.ends_with(&self.suffix) }
    error(self, input) {
        ValidationError::new(
            "ends_with",
            format!("String must end with '{}'", self.suffix),
        )
        .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::predicate! {
    /// Requires a string of letters and digits only.
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub Alphanumeric { allow_spaces: bool } for str;
    rule(self, input) {
        input.chars().all(|c| c.is_alphanumeric() || (self.allow_spaces && c == ' '))
    }
    error(self, input) {
        ValidationError::new("alphanumeric", if self.allow_spaces {
            "String must contain only letters, numbers, and spaces"
        } else {
            "String must contain only letters and numbers"
        })
    }
    new() { Self { allow_spaces: false } }
    fn alphanumeric();
}

crate::predicate! {
    /// Requires a string without uppercase letters.
    pub IsLowercase for str;
    rule(input) { !input.chars().any(char::is_uppercase) }
    error(input) { ValidationError::new("lowercase", "String must be lowercase") }
    fn is_lowercase();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;

    #[test]
    fn test_matches() {
        let p = matches("^[a-z]+$").unwrap();
        assert!(p.test("abc"));
        assert!(!p.test("ABC"));
        assert!(!p.test(""));
        assert_eq!(p.as_str(), "^[a-z]+$");
    }

    #[test]
    fn test_matches_malformed_pattern() {
        match Matches::new("(unclosed") {
            Err(ConfigError::InvalidPattern { pattern, reason }) => {
                assert_eq!(pattern, "(unclosed");
                assert!(!reason.is_empty());
            }
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_matches_rejection_names_pattern() {
        let p = matches(r"^\d{3}-\d{4}$").unwrap();
        let error = p.reject("invalid");
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.param("pattern"), Some(r"^\d{3}-\d{4}$"));
    }

    #[test]
    fn test_contains_starts_ends() {
        assert!(contains("test").test("this is a test"));
        assert!(!contains("test").test("hello world"));
        assert!(starts_with("http://").test("http://example.com"));
        assert!(!starts_with("http://").test("https://example.com"));
        assert!(ends_with(".com").test("example.com"));
        assert!(!ends_with(".com").test("example.org"));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(alphanumeric().test("hello123"));
        assert!(!alphanumeric().test("hello_123"));
        assert!(!alphanumeric().test("hello 123"));
        assert!(Alphanumeric { allow_spaces: true }.test("hello 123"));
    }

    #[test]
    fn test_is_lowercase() {
        assert!(is_lowercase().test("hello123"));
        assert!(!is_lowercase().test("Hello"));
    }
}
