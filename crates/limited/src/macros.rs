//! Macros for declaring predicates and limits with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`predicate!`]: create a complete predicate (struct + `Predicate` impl + factory fn)
//! - [`limit!`]: declare a rule tag bound to a process-wide rule
//!
//! # Examples
//!
//! ```rust,ignore
//! use limited::{limit, predicate};
//! use limited::ValidationError;
//!
//! // Unit predicate (no fields)
//! predicate! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_blank", "must not be blank") }
//!     fn not_blank();
//! }
//!
//! limit! {
//!     /// A title of at most 80 characters.
//!     pub Title: Validator<String, MaxLength, Trim> = Validator::new(max_length(80), Trim);
//! }
//! ```

// ============================================================================
// PREDICATE MACRO
// ============================================================================

/// Creates a complete predicate: struct definition, `Predicate` implementation,
/// constructor, and factory function.
///
/// The fields of the struct are the predicate's configuration. `rule` is the
/// boolean test, `error` builds the rejection reported when `rule` is false.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit predicate** (zero-sized, no fields):
/// ```rust,ignore
/// predicate! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_empty", "empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields, or a custom `new`):
/// ```rust,ignore
/// predicate! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxLength { max: usize } for str;
///     rule(self, input) { input.chars().count() <= self.max }
///     error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Fallible constructor**: fields become private and get read accessors,
/// so the configuration checked by `new` cannot be bypassed:
/// ```rust,ignore
/// predicate! {
///     pub Matches { regex: regex::Regex } for str;
///     rule(self, input) { self.regex.is_match(input) }
///     error(self, input) { ValidationError::invalid_format("pattern") }
///     new(pattern: &str) -> ConfigError { /* ... */ }
///     fn matches(pattern: &str) -> ConfigError;
/// }
/// ```
///
/// **Generic predicate**:
/// ```rust,ignore
/// predicate! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::new("min", format!("must be >= {}", self.min)) }
///     fn min(value: T);
/// }
/// ```
#[macro_export]
macro_rules! predicate {
    // ── Shared `Predicate` impl for non-generic structs ──────────────────
    (@impl $name:ident for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        impl $crate::Predicate for $name {
            type Input = $input;

            #[inline]
            fn test(&$self_, $inp: &Self::Input) -> bool $rule

            #[allow(unused_variables)]
            fn reject(&$self2, $einp: &Self::Input) -> $crate::ValidationError $err
        }
    };

    // ── Unit predicate + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::Predicate for $name {
            type Input = $input;

            #[inline]
            fn test(&self, $inp: &Self::Input) -> bool $rule

            #[allow(unused_variables)]
            fn reject(&self, $einp: &Self::Input) -> $crate::ValidationError $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::predicate!(@impl $name for $input; rule($self_, $inp) $rule error($self2, $einp) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    //
    // The type after `->` is the error type; the macro wraps it in Result.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body

            $(
                #[must_use]
                pub fn $field(&self) -> &$fty {
                    &self.$field
                }
            )+
        }

        $crate::predicate!(@impl $name for $input; rule($self_, $inp) $rule error($self2, $einp) $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::predicate!(@impl $name for $input; rule($self_, $inp) $rule error($self2, $einp) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$g:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$g> {
            $(pub $field: $fty,)+
        }

        impl<$g: $first_bound $(+ $rest_bound)*> $name<$g> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$g: $first_bound $(+ $rest_bound)*> $crate::Predicate for $name<$g> {
            type Input = $input;

            #[inline]
            fn test(&$self_, $inp: &Self::Input) -> bool $rule

            #[allow(unused_variables)]
            fn reject(&$self2, $einp: &Self::Input) -> $crate::ValidationError $err
        }

        #[must_use]
        $vis fn $factory<$g: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$g> {
            $name::new($($farg),*)
        }
    };

}

// ============================================================================
// LIMIT MACRO
// ============================================================================

/// Declares a rule tag: an uninhabited type implementing [`Limit`](crate::Limit)
/// whose rule is built once, on first use, and shared process-wide.
///
/// The initializer runs inside a function returning
/// `Result<Rule, ConfigError>`, so fallible rule constructors can use `?`.
/// A rule whose configuration is rejected panics on first use with the
/// [`ConfigError`](crate::ConfigError); call [`ensure`](crate::ensure) at
/// start-up to surface such defects before any value is validated.
///
/// # Examples
///
/// ```
/// use limited::prelude::*;
///
/// limit! {
///     /// Lowercase ASCII words.
///     pub Word: Validator<String, Matches, Trim> =
///         Validator::new(Matches::new("^[a-z]+$")?, Trim);
/// }
///
/// limit! {
///     /// Percentages.
///     pub Percent: Validator<i64, InRange<i64>> = Validator::unnormalized(InRange::new(0, 100)?);
/// }
///
/// assert!(Limited::<Word>::create(" abc ".to_string()).is_some());
/// assert!(Limited::<Percent>::create(101).is_none());
/// ```
#[macro_export]
macro_rules! limit {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis $name:ident: $rule_ty:ty = $init:expr;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[allow(clippy::empty_enum)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum $name {}

            impl $crate::Limit for $name {
                type Payload = <$rule_ty as $crate::Rule>::Payload;
                type Rule = $rule_ty;

                const NAME: &'static str = ::std::stringify!($name);

                fn rule() -> &'static Self::Rule {
                    #[allow(clippy::unnecessary_wraps)]
                    fn build() -> ::std::result::Result<$rule_ty, $crate::ConfigError> {
                        ::std::result::Result::Ok($init)
                    }

                    static RULE: ::std::sync::LazyLock<$rule_ty> = ::std::sync::LazyLock::new(|| {
                        match build() {
                            ::std::result::Result::Ok(rule) => {
                                $crate::__private::tracing::debug!(
                                    limit = ::std::stringify!($name),
                                    "rule initialized"
                                );
                                rule
                            }
                            ::std::result::Result::Err(error) => ::std::panic!(
                                "invalid rule for limit `{}`: {}",
                                ::std::stringify!($name),
                                error
                            ),
                        }
                    });

                    &RULE
                }
            }
        )+
    };
}
