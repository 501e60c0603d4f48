//! Assertion helpers for verifying evaluation outcomes in tests.

use crate::{FailureKind, Number, ParseFailure, evaluate};

/// Assert that `src` evaluates to `expected`.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use mathcount::{Number, test_util::assert_evaluates};
/// assert_evaluates("3-2", Number::Integer(1));
/// # }
/// ```
///
/// # Panics
/// Panics if evaluation fails or produces a different value.
#[track_caller]
pub fn assert_evaluates(src: &str, expected: Number) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "source {src:?}"),
        Err(err) => panic!("source {src:?} failed: {err}"),
    }
}

/// Evaluate `src` and return the failure it must produce.
///
/// # Panics
/// Panics if evaluation succeeds.
#[track_caller]
pub fn expect_failure(src: &str) -> ParseFailure {
    match evaluate(src) {
        Ok(value) => panic!("source {src:?} evaluated to {value}, expected failure"),
        Err(err) => err,
    }
}

/// Assert that `src` fails with `kind`, implicating `offending`.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use mathcount::{FailureKind, test_util::assert_failure};
/// assert_failure("1+2x", FailureKind::TrailingCharacters, Some('x'));
/// # }
/// ```
///
/// # Panics
/// Panics if evaluation succeeds or fails differently.
#[track_caller]
pub fn assert_failure(src: &str, kind: FailureKind, offending: Option<char>) {
    let err = expect_failure(src);
    assert_eq!(err.kind(), kind, "source {src:?}: {err}");
    assert_eq!(err.offending(), offending, "source {src:?}: {err}");
}
