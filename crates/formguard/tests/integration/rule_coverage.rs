//! One-field scenarios sweeping the built-in rule library.

use formguard::prelude::*;
use rstest::rstest;

/// Runs a single text field through a session and returns the failing
/// rule's name, if any.
fn failing_rule(rules: &str, value: &str) -> Option<String> {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new("field", rules));
    let source = StaticSource::new().text("field", value);
    match validator.validate(&source) {
        Outcome::Proceed => None,
        Outcome::Suppress => Some(validator.errors()[0].rule.to_string()),
    }
}

#[rstest]
// presence
#[case("required", "x", None)]
#[case("required", "", Some("required"))]
#[case("default[Select one]", "Select one", Some("default"))]
#[case("default[Select one]", "Blue", None)]
// email
#[case("valid_email", "user@example.com", None)]
#[case("valid_email", "user@@example.com", Some("valid_email"))]
#[case("valid_emails", "a@b.com,c@d.org", None)]
#[case("valid_emails", "a@b.com,not-an-email", Some("valid_emails"))]
// length, counted in characters
#[case("min_length[3]", "abc", None)]
#[case("min_length[3]", "ab", Some("min_length"))]
#[case("min_length[3]", "äöü", None)]
#[case("max_length[3]", "abcd", Some("max_length"))]
#[case("exact_length[4]", "abcd", None)]
#[case("exact_length[4]", "abc", Some("exact_length"))]
// malformed bounds fail closed
#[case("min_length[abc]", "whatever", Some("min_length"))]
// numeric
#[case("numeric", "0042", None)]
#[case("numeric", "-1", Some("numeric"))]
#[case("integer", "-17", None)]
#[case("integer", "1.5", Some("integer"))]
#[case("decimal", "-0.5", None)]
#[case("decimal", ".5", None)]
#[case("decimal", "1.", Some("decimal"))]
#[case("is_natural", "0", None)]
#[case("is_natural", "-1", Some("is_natural"))]
#[case("is_natural_no_zero", "0", Some("is_natural_no_zero"))]
#[case("is_natural_no_zero", "7", None)]
#[case("greater_than[17]", "18", None)]
#[case("greater_than[17]", "17", Some("greater_than"))]
#[case("greater_than[17]", "abc", Some("greater_than"))]
#[case("greater_than[5abc]", "10", Some("greater_than"))]
#[case("less_than[10]", "9.5", None)]
#[case("less_than[10]", "10", Some("less_than"))]
// character classes
#[case("alpha", "Hello", None)]
#[case("alpha", "Hello1", Some("alpha"))]
#[case("alpha_numeric", "abc123", None)]
#[case("alpha_numeric", "abc-123", Some("alpha_numeric"))]
#[case("alpha_dash", "abc-123_x", None)]
#[case("alpha_dash", "abc.123", Some("alpha_dash"))]
// network formats
#[case("valid_ip", "192.168.0.1", None)]
#[case("valid_ip", "256.0.0.1", Some("valid_ip"))]
#[case("valid_url", "https://example.com/path", None)]
#[case("valid_url", "not a url", Some("valid_url"))]
// base64 alphabet check only
#[case("valid_base64", "SGVsbG8=", None)]
#[case("valid_base64", "SGVs bG8=", Some("valid_base64"))]
// Luhn
#[case("valid_credit_card", "4111111111111111", None)]
#[case("valid_credit_card", "4111-1111-1111-1111", None)]
#[case("valid_credit_card", "4111111111111112", Some("valid_credit_card"))]
#[case("valid_credit_card", "4111x1111", Some("valid_credit_card"))]
// unknown rule names pass
#[case("no_such_rule", "anything", None)]
fn rule_table(#[case] rules: &str, #[case] value: &str, #[case] expected: Option<&str>) {
    assert_eq!(
        failing_rule(rules, value).as_deref(),
        expected,
        "rules={rules:?} value={value:?}"
    );
}

#[test]
fn file_type_applies_to_file_controls_only() {
    let mut validator = FormValidator::new();
    validator.register_field(FieldSpec::new("avatar", "required|is_file_type[jpg,png]"));

    let jpg = StaticSource::new().file("avatar", "me.jpg");
    assert_eq!(validator.validate(&jpg), Outcome::Proceed);

    let gif = StaticSource::new().file("avatar", "me.gif");
    validator.validate(&gif);
    assert_eq!(validator.errors()[0].rule, "is_file_type");

    // a text control with the same value is exempt
    let text = StaticSource::new().text("avatar", "me.gif");
    assert_eq!(validator.validate(&text), Outcome::Proceed);
}

#[test]
fn negated_callback_sees_empty_values() {
    let mut validator = FormValidator::new();
    validator
        .register_field(FieldSpec::new("coupon", "!callback_known_coupon"))
        .register_callback("known_coupon", |value, _| !value.is_empty());

    let empty = StaticSource::new().text("coupon", "");
    validator.validate(&empty);
    assert_eq!(validator.errors()[0].rule, "callback_known_coupon");

    let mut plain = FormValidator::new();
    plain
        .register_field(FieldSpec::new("coupon", "callback_known_coupon"))
        .register_callback("known_coupon", |value, _| !value.is_empty());
    assert_eq!(plain.validate(&empty), Outcome::Proceed);
}
