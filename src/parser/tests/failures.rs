//! Tests for structural failures reported by the evaluator.

use crate::FailureKind;
use crate::test_util::{assert_failure, expect_failure};
use rstest::rstest;

#[rstest]
#[case::empty("")]
#[case::spaces("   ")]
#[case::quotes_only("``")]
#[case::quoted_space("` `")]
fn rejects_empty_input(#[case] src: &str) {
    assert_failure(src, FailureKind::EmptyInput, None);
}

#[rstest]
#[case::letter("1+2x", 'x')]
#[case::second_operand("1 2", '2')]
#[case::extra_paren("(1+2))", ')')]
#[case::digit_after_factorial("3!4", '4')]
fn rejects_trailing_characters(#[case] src: &str, #[case] ch: char) {
    assert_failure(src, FailureKind::TrailingCharacters, Some(ch));
}

#[rstest]
#[case::leading_plus("+1", '+')]
#[case::leading_minus("-1", '-')]
#[case::empty_group("()", ')')]
#[case::double_operator("1+*2", '*')]
#[case::letter("x", 'x')]
#[case::multibyte("1+π", 'π')]
#[case::bare_factorial("!", '!')]
fn rejects_characters_where_value_expected(#[case] src: &str, #[case] ch: char) {
    assert_failure(src, FailureKind::DisallowedCharacter, Some(ch));
}

#[rstest]
#[case::dangling_operator("1+")]
#[case::dangling_caret("2^")]
#[case::open_paren("(")]
#[case::dangling_in_quotes("`3*`")]
fn rejects_unexpected_end(#[case] src: &str) {
    assert_failure(src, FailureKind::UnexpectedEnd, None);
}

#[rstest]
#[case::at_end("(1+2")]
#[case::before_digit("(1+2 3")]
#[case::nested("((1+2)*3")]
fn rejects_unclosed_group(#[case] src: &str) {
    assert_failure(src, FailureKind::MissingClosingParen, Some(')'));
}

#[rstest]
fn renders_failure_with_character() {
    let err = expect_failure("1+1");
    assert_eq!(err.to_string(), "error at character '1': digit used more than once");
}

#[rstest]
fn renders_failure_without_character() {
    let err = expect_failure("");
    assert_eq!(err.to_string(), "error: empty input");
}
