//! Shared test utilities for integration tests.
//!
//! These helpers mirror a subset of the `mathcount::test_util` module without
//! requiring the `test-support` feature, enabling integration tests to
//! compile against the published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use mathcount::{FailureKind, Number, ParseFailure, SyntaxKind, evaluate};

/// Evaluate `src`, panicking with the failure if it is rejected.
#[track_caller]
#[must_use]
pub fn value_of(src: &str) -> Number {
    match evaluate(src) {
        Ok(value) => value,
        Err(err) => panic!("source {src:?} failed: {err}"),
    }
}

/// Evaluate `src`, panicking if it is accepted.
#[track_caller]
#[must_use]
pub fn failure_of(src: &str) -> ParseFailure {
    match evaluate(src) {
        Ok(value) => panic!("source {src:?} evaluated to {value}, expected failure"),
        Err(err) => err,
    }
}

/// Assert that `src` fails with `kind` and `offending`.
#[track_caller]
pub fn assert_failure(src: &str, kind: FailureKind, offending: Option<char>) {
    let err = failure_of(src);
    assert_eq!((err.kind(), err.offending()), (kind, offending), "source {src:?}");
}

/// Collect only the kinds from a token sequence.
#[must_use]
pub fn kinds(tokens: &[(SyntaxKind, mathcount::Span)]) -> Vec<SyntaxKind> {
    tokens.iter().map(|(k, _)| *k).collect()
}
