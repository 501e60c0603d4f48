//! Lexical analysis for counting expressions.
//!
//! This module exposes `tokenize_with_trivia` and `tokenize_without_trivia`
//! which convert raw input text into a sequence of `(SyntaxKind, Span)`
//! pairs. It uses the `logos` crate to recognise tokens. Every significant
//! token covers exactly one character, so the evaluator can walk the token
//! sequence as if it were walking characters.

use logos::Logos;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"\s+")]
    Whitespace,
    #[regex(r"`+")]
    Quote,
    // Any decimal, superscript or subscript digit; the ledger accepts 1-6.
    #[regex(r"[\p{Nd}¹²³⁰⁴-⁹₀-₉]")]
    Digit,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

#[must_use]
fn tokenize_impl(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::with_capacity(src.len());
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        // Unknown characters are kept so the grammar can report them in order.
        let Ok(token) = result else {
            out.push((SyntaxKind::N_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::Whitespace => SyntaxKind::T_WHITESPACE,
            Token::Quote => SyntaxKind::T_QUOTE,
            Token::Digit => SyntaxKind::T_DIGIT,
            Token::Plus => SyntaxKind::T_PLUS,
            Token::Minus => SyntaxKind::T_MINUS,
            Token::Star => SyntaxKind::T_STAR,
            Token::Slash => SyntaxKind::T_SLASH,
            Token::Caret => SyntaxKind::T_CARET,
            Token::Bang => SyntaxKind::T_BANG,
            Token::LParen => SyntaxKind::T_LPAREN,
            Token::RParen => SyntaxKind::T_RPAREN,
        };
        out.push((kind, span));
    }
    out
}

/// Tokenise the source, excluding whitespace and quoting backticks.
///
/// # Examples
///
/// ```rust
/// use mathcount::{tokenize_without_trivia, SyntaxKind};
///
/// let tokens = tokenize_without_trivia("` 3 - 2 `");
/// assert_eq!(tokens.len(), 3);
/// assert!(!tokens.iter().any(|(k, _)| k.is_trivia()));
/// ```
#[must_use]
pub fn tokenize_without_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
        .into_iter()
        .filter(|(k, _)| !k.is_trivia())
        .collect()
}

/// Tokenise the provided expression text.
///
/// This variant retains whitespace and quote tokens, which the evaluator's
/// cursor skips between significant tokens.
///
/// # Examples
///
/// ```rust
/// use mathcount::{tokenize_with_trivia, SyntaxKind};
///
/// let tokens = tokenize_with_trivia("6! ");
/// let kinds: Vec<SyntaxKind> = tokens.iter().map(|(k, _)| *k).collect();
/// assert_eq!(
///     kinds,
///     vec![SyntaxKind::T_DIGIT, SyntaxKind::T_BANG, SyntaxKind::T_WHITESPACE]
/// );
/// ```
#[must_use]
pub fn tokenize_with_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
}
