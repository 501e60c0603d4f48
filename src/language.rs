//! Token kinds for counting expressions.
//!
//! This module defines the `SyntaxKind` enum covering every token the
//! tokenizer can emit. The evaluator dispatches on these kinds rather than on
//! raw characters.

/// Every possible token in an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "token naming follows the tokenizer table")]
pub enum SyntaxKind {
    // Trivia
    T_WHITESPACE,
    T_QUOTE,
    // Operands
    T_DIGIT,
    // Operators
    T_PLUS,
    T_MINUS,
    T_STAR,
    T_SLASH,
    T_CARET,
    T_BANG,
    // Grouping
    T_LPAREN,
    T_RPAREN,
    // Anything the tokenizer did not recognise
    N_ERROR,
}

impl SyntaxKind {
    /// Returns `true` for tokens the evaluator skips between operands and
    /// operators.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::T_WHITESPACE | Self::T_QUOTE)
    }
}
