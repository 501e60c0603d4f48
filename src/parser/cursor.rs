//! Forward-only cursor over the tokenised input.
//!
//! Provides lookahead, consumption, and trivia skipping for the evaluator.
//! The position never moves backwards.

use crate::{Span, SyntaxKind, tokenize_with_trivia};

/// A single lexed token together with the character it starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub(crate) kind: SyntaxKind,
    pub(crate) ch: char,
}

#[derive(Debug)]
pub(crate) struct Cursor {
    tokens: Vec<Lexeme>,
    pos: usize,
}

impl Cursor {
    /// Tokenises `src` and places the cursor before the first token.
    #[must_use]
    pub(crate) fn new(src: &str) -> Self {
        let tokens = tokenize_with_trivia(src)
            .into_iter()
            .map(|(kind, span)| Lexeme {
                kind,
                ch: first_char(src, &span),
            })
            .collect();
        Self { tokens, pos: 0 }
    }

    /// Returns the current token without consuming it, or `None` at the end
    /// of input.
    #[must_use]
    pub(crate) fn peek(&self) -> Option<Lexeme> {
        self.tokens.get(self.pos).copied()
    }

    /// Returns `true` when the current token has the given kind.
    #[must_use]
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek().is_some_and(|lx| lx.kind == kind)
    }

    /// Consumes and returns the current token.
    pub(crate) fn advance(&mut self) -> Option<Lexeme> {
        let current = self.peek();
        if current.is_some() {
            self.pos += 1;
        }
        current
    }

    /// Advances past whitespace and quote tokens.
    pub(crate) fn skip_insignificant(&mut self) {
        while self.peek().is_some_and(|lx| lx.kind.is_trivia()) {
            self.pos += 1;
        }
    }

    #[must_use]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Peeks at the first significant token after the current one without
    /// moving the cursor.
    #[must_use]
    pub(crate) fn peek_after_current(&self) -> Option<Lexeme> {
        self.tokens
            .iter()
            .skip(self.pos + 1)
            .find(|lx| !lx.kind.is_trivia())
            .copied()
    }
}

fn first_char(src: &str, span: &Span) -> char {
    src.get(span.start..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn skips_whitespace_and_quotes() {
        let mut cursor = Cursor::new("` \t 5`");
        cursor.skip_insignificant();
        assert_eq!(
            cursor.peek(),
            Some(Lexeme {
                kind: SyntaxKind::T_DIGIT,
                ch: '5'
            })
        );
        cursor.advance();
        cursor.skip_insignificant();
        assert!(cursor.is_at_end());
    }

    #[rstest]
    fn peeks_past_trivia_without_moving() {
        let mut cursor = Cursor::new("0 ` !");
        cursor.skip_insignificant();
        let next = cursor.peek_after_current();
        assert_eq!(
            next,
            Some(Lexeme {
                kind: SyntaxKind::T_BANG,
                ch: '!'
            })
        );
        assert!(cursor.at(SyntaxKind::T_DIGIT));
        cursor.advance();
        assert!(cursor.peek_after_current().is_none());
    }

    #[rstest]
    fn advance_stops_at_end() {
        let mut cursor = Cursor::new("1");
        assert!(cursor.advance().is_some());
        assert!(cursor.is_at_end());
        assert!(cursor.advance().is_none());
        assert!(cursor.peek().is_none());
    }

    #[rstest]
    #[case::digit("3", SyntaxKind::T_DIGIT, '3')]
    #[case::operator("^", SyntaxKind::T_CARET, '^')]
    #[case::unknown("x", SyntaxKind::N_ERROR, 'x')]
    #[case::multibyte("π", SyntaxKind::N_ERROR, 'π')]
    #[case::superscript_digit("²", SyntaxKind::T_DIGIT, '²')]
    fn reports_leading_character(
        #[case] src: &str,
        #[case] kind: SyntaxKind,
        #[case] ch: char,
    ) {
        let cursor = Cursor::new(src);
        assert_eq!(cursor.peek(), Some(Lexeme { kind, ch }));
        assert!(cursor.at(kind));
    }
}
