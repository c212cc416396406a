//! Property-based tests for limited.

use limited::prelude::*;
use proptest::prelude::*;

limit! {
    Short: Validator<String, MaxLength, Trim> = Validator::new(max_length(5), Trim);
    Medium: Validator<String, MaxLength, Trim> = Validator::new(max_length(20), Trim);
    Folded: Validator<String, LengthRange, TrimLowercase> =
        Validator::new(LengthRange::new(2, 12)?, TrimLowercase);
    Percent: Validator<i64, InRange<i64>> = Validator::unnormalized(InRange::new(0, 100)?);
}

// ============================================================================
// VALIDATE: Some(normalize(x)) iff predicate(normalize(x))
// ============================================================================

proptest! {
    #[test]
    fn validate_agrees_with_predicate_on_normalized(s in ".{0,30}") {
        let v: Validator<String, MaxLength, Trim> = Validator::new(max_length(5), Trim);
        let normalized = Trim.normalize(s.clone());
        let expected = max_length(5).test(&normalized).then(|| normalized.clone());
        prop_assert_eq!(v.validate(s), expected);
    }

    #[test]
    fn validate_is_deterministic(s in ".{0,30}") {
        let v: Validator<String, LengthRange, TrimLowercase> =
            Validator::new(LengthRange::new(2, 12).unwrap(), TrimLowercase);
        prop_assert_eq!(v.validate(s.clone()), v.validate(s));
    }

    #[test]
    fn validate_and_check_agree(n in any::<i64>()) {
        let v: Validator<i64, InRange<i64>> = Validator::unnormalized(InRange::new(0, 100).unwrap());
        prop_assert_eq!(v.validate(n), v.check(n).ok());
    }
}

// ============================================================================
// NORMALIZERS ARE IDEMPOTENT
// ============================================================================

proptest! {
    #[test]
    fn normalizers_idempotent(s in "\\PC{0,30}") {
        for normalization in [
            Normalization::None,
            Normalization::Trim,
            Normalization::Lowercase,
            Normalization::TrimLowercase,
            Normalization::CollapseWhitespace,
        ] {
            let once = normalization.normalize(s.clone());
            let twice = normalization.normalize(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}

// ============================================================================
// LIMITED VALUES
// ============================================================================

proptest! {
    #[test]
    fn extract_after_create_is_normalized_input(s in ".{0,30}") {
        if let Some(value) = Limited::<Folded>::create(s.clone()) {
            prop_assert_eq!(value.extract(), TrimLowercase.normalize(s));
        }
    }

    #[test]
    fn create_succeeds_iff_rule_validates(s in ".{0,30}") {
        let rule = limited::ensure::<Short>();
        prop_assert_eq!(
            Limited::<Short>::create(s.clone()).map(Limited::extract),
            rule.validate(s)
        );
    }

    #[test]
    fn convert_to_matches_create_of_extract(s in ".{0,30}") {
        if let Some(medium) = Limited::<Medium>::create(s) {
            let direct = Limited::<Short>::create(medium.get().clone());
            let converted = medium.convert_to::<Short>();
            prop_assert_eq!(converted.map(Limited::extract), direct.map(Limited::extract));
        }
    }

    #[test]
    fn equality_is_payload_equality(a in "[a-e]{0,5}", b in "[a-e]{0,5}") {
        let short = Limited::<Short>::create(a.clone()).unwrap();
        let medium = Limited::<Medium>::create(b.clone()).unwrap();
        prop_assert_eq!(short == medium, a == b);
    }

    #[test]
    fn percent_round_trips_through_json(n in 0i64..=100) {
        let value = Limited::<Percent>::create(n).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        let back: Limited<Percent> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, value);
    }
}
