//! Integration tests for the public evaluation API.
//!
//! These tests exercise `evaluate` and `evaluate_with` the way a counting
//! game would: compare the value to the expected count and surface the
//! failure kind otherwise.

mod test_util;

use mathcount::{FailureKind, Limits, Number, evaluate_with};
use rstest::rstest;
use test_util::{assert_failure, failure_of, value_of};

#[rstest]
#[case("1", 1)]
#[case("3-2", 1)]
#[case("1+2", 3)]
#[case("2*3!", 12)]
#[case("5*(4+3)+6!", 755)]
#[case("6^4+5*(3!+2)+1", 1337)]
fn matches_expected_count(#[case] src: &str, #[case] count: i64) {
    assert_eq!(value_of(src), count);
}

#[rstest]
fn fractional_result_never_matches_a_count() {
    let value = value_of("5/2");
    assert_eq!(value, Number::Real(2.5));
    assert_ne!(value, 2);
    assert_ne!(value, 3);
}

#[rstest]
#[case::empty("", FailureKind::EmptyInput, None)]
#[case::disallowed_digit("9", FailureKind::DisallowedDigit, Some('9'))]
#[case::duplicate_digit("1+1", FailureKind::DuplicateDigit, Some('1'))]
#[case::disallowed_character("+1", FailureKind::DisallowedCharacter, Some('+'))]
#[case::unexpected_end("1+", FailureKind::UnexpectedEnd, None)]
#[case::missing_paren("(1+2", FailureKind::MissingClosingParen, Some(')'))]
#[case::division_by_zero("4/0", FailureKind::DivisionByZero, Some('/'))]
#[case::invalid_power("(1-2)^(3/4)", FailureKind::InvalidPower, Some('^'))]
#[case::invalid_factorial("(1-2)!", FailureKind::InvalidFactorial, Some('!'))]
#[case::trailing("1+2x", FailureKind::TrailingCharacters, Some('x'))]
fn reports_each_failure_kind(
    #[case] src: &str,
    #[case] kind: FailureKind,
    #[case] offending: Option<char>,
) {
    assert_failure(src, kind, offending);
}

#[rstest]
fn failure_detail_names_power_domain() {
    let err = failure_of("(1-(3-2))^(4-5)");
    assert_eq!(err.kind(), FailureKind::InvalidPower);
    assert!(err.detail().contains("negative power"), "{}", err.detail());
}

#[rstest]
#[expect(clippy::expect_used, reason = "tests use expect for clarity")]
fn custom_limits_apply() {
    let limits = Limits::default().with_max_depth(0);
    assert_eq!(evaluate_with("1+2", &limits), Ok(Number::Integer(3)));
    let err = evaluate_with("(1+2)", &limits)
        .expect_err("nesting accepted");
    assert_eq!(err.kind(), FailureKind::NestingTooDeep);
}
