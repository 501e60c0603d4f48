//! Library crate for mathcount.
//!
//! Exposes the token definitions, the tokenizer, and the evaluator for
//! counting expressions built from the digits 1 to 6.

#![forbid(unsafe_code)]

pub mod language;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use language::SyntaxKind;
pub use parser::{FailureKind, Limits, Number, ParseFailure, evaluate, evaluate_with};
pub use tokenizer::{Span, tokenize_with_trivia, tokenize_without_trivia};
