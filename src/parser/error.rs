//! Failure taxonomy for expression evaluation.
//!
//! Every rejection carries a [`FailureKind`] so callers can match on the
//! reason and phrase their own message. The implicated character and a
//! free-form English detail are attached for diagnostics.

use thiserror::Error;

/// Reason an expression was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The input contained nothing but whitespace and quotes.
    EmptyInput,
    /// A digit outside `1..=6` was used.
    DisallowedDigit,
    /// A digit was used a second time.
    DuplicateDigit,
    /// A value was expected but some other character was found.
    DisallowedCharacter,
    /// The input ended where a value was expected.
    UnexpectedEnd,
    /// A parenthesised group was not closed.
    MissingClosingParen,
    /// The divisor evaluated to zero.
    DivisionByZero,
    /// Exponentiation overflowed or left the real numbers.
    InvalidPower,
    /// `!` was applied to a negative or fractional value, or overflowed.
    InvalidFactorial,
    /// A complete expression was followed by more input.
    TrailingCharacters,
    /// `+`, `-`, `*` or `/` produced a non-finite value.
    Overflow,
    /// Parentheses or exponents were nested beyond the configured depth.
    NestingTooDeep,
    /// The input exceeded the configured length.
    InputTooLong,
}

impl FailureKind {
    /// Default English description used when no more specific detail is
    /// available.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty input",
            Self::DisallowedDigit => "digit not allowed, only 1 to 6 may be used",
            Self::DuplicateDigit => "digit used more than once",
            Self::DisallowedCharacter => "invalid character, expected a value",
            Self::UnexpectedEnd => "unexpected end of input, expected a value",
            Self::MissingClosingParen => "expected closing parenthesis",
            Self::DivisionByZero => "division by zero",
            Self::InvalidPower => "invalid power",
            Self::InvalidFactorial => "factorial of a negative or non-integer value",
            Self::TrailingCharacters => "unexpected characters after a complete expression",
            Self::Overflow => "result is too large",
            Self::NestingTooDeep => "expression is nested too deeply",
            Self::InputTooLong => "input is too long",
        }
    }
}

/// Structured rejection returned by [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", location(.offending), .detail)]
pub struct ParseFailure {
    kind: FailureKind,
    offending: Option<char>,
    detail: String,
}

impl ParseFailure {
    /// Failure implicating `ch`, described by the kind's default text.
    #[must_use]
    pub fn at(kind: FailureKind, ch: char) -> Self {
        Self::new(kind, Some(ch), kind.describe())
    }

    /// Failure with no implicated character.
    #[must_use]
    pub fn bare(kind: FailureKind) -> Self {
        Self::new(kind, None, kind.describe())
    }

    #[must_use]
    pub fn new(kind: FailureKind, offending: Option<char>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            offending,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The character implicated by the failure, absent for
    /// [`FailureKind::EmptyInput`], [`FailureKind::UnexpectedEnd`] and
    /// [`FailureKind::InputTooLong`].
    #[must_use]
    pub fn offending(&self) -> Option<char> {
        self.offending
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

fn location(offending: &Option<char>) -> String {
    match offending {
        Some(ch) => format!("error at character '{ch}'"),
        None => "error".to_string(),
    }
}
