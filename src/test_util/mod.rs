//! Helpers for asserting over evaluation results in tests.
//!
//! These functions reduce boilerplate when checking that an expression
//! evaluates to a value or fails with a particular kind and character.

mod assertions;

pub use assertions::{assert_evaluates, assert_failure, expect_failure};
