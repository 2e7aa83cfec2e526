//! Table tests for the built-in rule catalog.

use rstest::rstest;
use vkit_validator::prelude::*;

fn code_of<V>(validator: &V, input: &V::Input) -> Option<String>
where
    V: Validate + ?Sized,
{
    match validator.validate(input) {
        Ok(()) => None,
        Err(RuleFailure::Invalid(error)) => Some(error.code.into_owned()),
        Err(RuleFailure::Runtime(error)) => panic!("unexpected runtime error: {error}"),
    }
}

// ============================================================================
// ETH ADDRESS
// ============================================================================

#[rstest]
#[case::valid_address("0x32Be343B94f860124dC4fEe278FDCBD38C102D88", None)]
#[case::empty_string("", Some("eth.0x"))]
#[case::banana("banana", Some("eth.0x"))]
#[case::short_banana("0xbanana", Some("eth.length"))]
#[case::non_hex("0xXXXXXXXXXXf860124dC4fEe278FDCBD3XXXXXXXX", Some("eth.hex"))]
#[case::wrong_length("0x42d35cc663", Some("eth.length"))]
fn eth_address_table(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(code_of(&eth_address(), input).as_deref(), expected);
}

// ============================================================================
// EMAIL
// ============================================================================

#[rstest]
#[case::local_domain("abc@example", false)]
#[case::valid("abc@example.com", true)]
#[case::unparseable("whooops.com", false)]
#[case::display_name("Abc Example <abc@example.com>", true)]
#[case::display_name_local_domain("Abc <abc@example>", false)]
#[case::two_ats("a@b@example.com", false)]
#[case::empty("", false)]
#[case::utf8_local_part("jos\u{e9}@example.com", true)]
#[case::quoted_local_part("\"john doe\"@example.com", true)]
#[case::underscore_in_domain("a@ex_ample.com", true)]
#[case::trailing_comment("a@example.com (comment)", true)]
#[case::quoted_display_name("\"Doe, John\" <john@example.com>", true)]
#[case::dotted_display_name("John Q. Public <john@example.com>", true)]
#[case::single_member_group("Team: lead@example.com;", true)]
#[case::ip_domain_literal("a@[192.168.0.1]", true)]
#[case::comma_in_display_name("Alice, Bob <a@example.com>", false)]
#[case::semicolon_in_display_name("Alice; <a@example.com>", false)]
#[case::two_addresses("a@example.com, b@example.com", false)]
#[case::double_dot_local_part("a..b@example.com", false)]
#[case::unclosed_angle("Abc <abc@example.com", false)]
#[case::trailing_text("a@example.com trailing", false)]
fn is_email_table(#[case] input: &str, #[case] valid: bool) {
    let result = code_of(&is_email(), input);
    if valid {
        assert_eq!(result, None);
    } else {
        assert_eq!(result.as_deref(), Some("isEmail.invalid"));
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

#[rstest]
#[case::not_empty(Box::new(not_empty()), "", "notEmpty.empty", "may not be empty.")]
#[case::min_length(
    Box::new(min_length(5)),
    "abc",
    "minLength.length",
    "must be minimum 5 characters long."
)]
#[case::max_length(
    Box::new(max_length(2)),
    "abc",
    "maxLength.length",
    "must be max 2 characters long."
)]
#[case::one_of(
    Box::new(one_of(["red", "green", "blue"])),
    "pink",
    "oneOf.notFound",
    "is not one of red, green, blue."
)]
#[case::eth_prefix(Box::new(eth_address()), "banana", "eth.0x", "must start with '0x'.")]
#[case::eth_length(
    Box::new(eth_address()),
    "0xabc",
    "eth.length",
    "must be 42 characters long."
)]
#[case::eth_hex(
    Box::new(eth_address()),
    "0xzz32Be343B94f860124dC4fEe278FDCBD38C102D",
    "eth.hex",
    "may only contain hexadecimal characters."
)]
fn string_rule_messages(
    #[case] rule: Box<dyn Validate<Input = str>>,
    #[case] input: &str,
    #[case] code: &str,
    #[case] message: &str,
) {
    let failure = rule.validate(input).unwrap_err();
    let error = failure.as_invalid().expect("validation error");
    assert_eq!(error.code, code);
    assert_eq!(error.message, message);
}

#[rstest]
#[case(min(1_i64), 0, "min.invalid", "must be at least 1.")]
#[case(min(-5_i64), -6, "min.invalid", "must be at least -5.")]
fn min_messages(
    #[case] rule: Min<i64>,
    #[case] input: i64,
    #[case] code: &str,
    #[case] message: &str,
) {
    let failure = rule.validate(&input).unwrap_err();
    let error = failure.as_invalid().unwrap();
    assert_eq!(error.code, code);
    assert_eq!(error.message, message);
}

#[test]
fn regex_rule_reports_pattern_mismatch() {
    let rule = matches_regex(r"^[A-Z]{3}$").expect("valid pattern");
    assert_eq!(code_of(&rule, "ABC"), None);
    assert_eq!(code_of(&rule, "abc").as_deref(), Some("regex.invalid"));

    let failure = rule.validate("abc").unwrap_err();
    assert_eq!(failure.as_invalid().unwrap().message, "does not match expected pattern.");
}

#[test]
fn malformed_regex_is_a_runtime_error() {
    let error = matches_regex("[unterminated").unwrap_err();
    assert!(matches!(error, RuntimeError::InvalidPattern { .. }));
}
