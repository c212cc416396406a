//! End-to-end behaviour of limited values through the public API.

use limited::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

limit! {
    /// At most 5 characters after trimming.
    ShortText: Validator<String, MaxLength, Trim> = Validator::new(max_length(5), Trim);

    /// At most 20 characters after trimming.
    MediumText: Validator<String, MaxLength, Trim> = Validator::new(max_length(20), Trim);

    /// Integers in `[0, 100]`.
    Percent: Validator<i64, InRange<i64>> = Validator::unnormalized(InRange::new(0, 100)?);

    /// Lowercase ASCII words.
    Word: Validator<String, Matches> = Validator::unnormalized(Matches::new("^[a-z]+$")?);

    /// A pattern that does not compile.
    Broken: Validator<String, Matches> = Validator::unnormalized(Matches::new("^[a-z+$")?);

    /// Built from a JSON rule definition.
    Role: ConfiguredRule = RuleConfig::from_json(
        r#"{ "kind": "one_of", "values": ["admin", "editor", "viewer"], "normalize": "trim_lowercase" }"#,
    )?
    .build()?;
}

// ============================================================================
// CREATE / EXTRACT
// ============================================================================

#[rstest]
#[case("  short", Some("short"))]
#[case("short", Some("short"))]
#[case("hello     ", Some("hello"))]
#[case("much too long", None)]
#[case("", Some(""))]
fn short_text_trims_then_checks_length(#[case] raw: &str, #[case] expected: Option<&str>) {
    let created = Limited::<ShortText>::create(raw.to_string());
    assert_eq!(created.map(Limited::extract).as_deref(), expected);
}

#[rstest]
#[case(50, true)]
#[case(0, true)]
#[case(100, true)]
#[case(150, false)]
#[case(-1, false)]
fn percent_accepts_closed_range(#[case] raw: i64, #[case] accepted: bool) {
    assert_eq!(Limited::<Percent>::create(raw).is_some(), accepted);
}

#[test]
fn rejection_reason_names_the_limit() {
    let error = Limited::<Percent>::try_create(150).unwrap_err();
    assert_eq!(error.field.as_deref(), Some("Percent"));
    assert_eq!(error.code, "out_of_range");
    assert_eq!(error.param("actual"), Some("150"));
}

// ============================================================================
// CONVERSION
// ============================================================================

#[test]
fn convert_into_looser_rule_keeps_payload() {
    let short = Limited::<ShortText>::create("short".to_string()).unwrap();
    let medium: Limited<MediumText> = short.convert_to().unwrap();
    assert_eq!(medium.extract(), "short");
}

#[test]
fn convert_into_stricter_rule_fails() {
    let medium = Limited::<MediumText>::create("toolongstring".to_string()).unwrap();
    assert!(medium.clone().convert_to::<ShortText>().is_none());

    let error = medium.try_convert_to::<ShortText>().unwrap_err();
    assert_eq!(error.field.as_deref(), Some("ShortText"));
    assert_eq!(error.code, "max_length");
}

#[rstest]
#[case("abc")]
#[case("  padded  ")]
#[case("toolongstring")]
#[case("")]
fn convert_agrees_with_create_from_extract(#[case] raw: &str) {
    let Some(medium) = Limited::<MediumText>::create(raw.to_string()) else {
        return;
    };
    let direct = Limited::<ShortText>::create(medium.get().clone());
    let converted = medium.convert_to::<ShortText>();
    assert_eq!(converted.map(Limited::extract), direct.map(Limited::extract));
}

#[test]
fn values_compare_by_payload_across_limits() {
    let short = Limited::<ShortText>::create("same".to_string()).unwrap();
    let medium = Limited::<MediumText>::create("  same ".to_string()).unwrap();
    assert!(short == medium);
    assert!(medium == short);
}

// ============================================================================
// PATTERNS
// ============================================================================

#[rstest]
#[case("abc", true)]
#[case("ABC", false)]
#[case("abc1", false)]
#[case("", false)]
fn word_matches_pattern(#[case] raw: &str, #[case] accepted: bool) {
    assert_eq!(Limited::<Word>::create(raw.to_string()).is_some(), accepted);
}

#[test]
fn malformed_pattern_fails_at_construction() {
    let error = Matches::new("^[a-z+$").unwrap_err();
    assert_eq!(error.code(), "CONFIG_INVALID_PATTERN");
}

#[test]
#[should_panic(expected = "invalid rule for limit `Broken`")]
fn malformed_pattern_in_limit_fails_on_first_use() {
    limited::ensure::<Broken>();
}

// ============================================================================
// CONFIGURED RULES
// ============================================================================

#[rstest]
#[case("admin", Some("admin"))]
#[case("  Editor ", Some("editor"))]
#[case("root", None)]
fn role_from_json_rule(#[case] raw: &str, #[case] expected: Option<&str>) {
    let role: Option<Limited<Role>> = raw.parse().ok();
    assert_eq!(role.map(Limited::extract).as_deref(), expected);
}

#[test]
fn configured_rule_keeps_its_config() {
    let rule = limited::ensure::<Role>();
    assert_eq!(rule.config().check.kind(), "one_of");
    assert_eq!(rule.config().normalize, Normalization::TrimLowercase);
}
