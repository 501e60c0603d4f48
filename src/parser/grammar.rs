//! Recursive-descent evaluator.
//!
//! Parses and evaluates in a single pass over the token cursor:
//!
//! ```text
//! expression := term ( ('+' | '-') term )*
//! term       := power ( ('*' | '/') power )*
//! power      := factor ( '^' power )?
//! factor     := primary ( '!' )*
//! primary    := DIGIT | '(' expression ')'
//! ```
//!
//! Every level skips whitespace and quotes before inspecting the next token.
//! The first rule violation aborts the whole session.

use crate::SyntaxKind;

use super::arith;
use super::cursor::Cursor;
use super::error::{FailureKind, ParseFailure};
use super::ledger::DigitLedger;
use super::limits::Limits;
use super::number::Number;

/// State owned by one evaluation.
pub(crate) struct Session {
    cursor: Cursor,
    ledger: DigitLedger,
    limits: Limits,
    depth: usize,
}

impl Session {
    /// Prepares a session over `src`.
    ///
    /// # Errors
    /// Returns [`FailureKind::InputTooLong`] when `src` exceeds the length
    /// limit.
    pub(crate) fn new(src: &str, limits: Limits) -> Result<Self, ParseFailure> {
        if src.chars().count() > limits.max_input_len() {
            return Err(ParseFailure::new(
                FailureKind::InputTooLong,
                None,
                format!(
                    "input is longer than {} characters",
                    limits.max_input_len()
                ),
            ));
        }
        Ok(Self {
            cursor: Cursor::new(src),
            ledger: DigitLedger::default(),
            limits,
            depth: 0,
        })
    }

    /// Evaluates the whole input.
    pub(crate) fn run(&mut self) -> Result<Number, ParseFailure> {
        self.cursor.skip_insignificant();
        if self.cursor.is_at_end() {
            return Err(ParseFailure::bare(FailureKind::EmptyInput));
        }
        let value = self.expression()?;
        self.cursor.skip_insignificant();
        if let Some(lx) = self.cursor.peek() {
            return Err(ParseFailure::at(FailureKind::TrailingCharacters, lx.ch));
        }
        Ok(Number::normalise(value))
    }

    /// Number of distinct digits consumed so far.
    pub(crate) fn digits_used(&self) -> u32 {
        self.ledger.len()
    }

    fn expression(&mut self) -> Result<f64, ParseFailure> {
        let mut value = self.term()?;
        loop {
            self.cursor.skip_insignificant();
            let op = match self.cursor.peek() {
                Some(lx) if matches!(lx.kind, SyntaxKind::T_PLUS | SyntaxKind::T_MINUS) => lx.kind,
                _ => break,
            };
            self.cursor.advance();
            let rhs = self.term()?;
            value = if op == SyntaxKind::T_PLUS {
                arith::add(value, rhs)?
            } else {
                arith::sub(value, rhs)?
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ParseFailure> {
        let mut value = self.power()?;
        loop {
            self.cursor.skip_insignificant();
            let op = match self.cursor.peek() {
                Some(lx) if matches!(lx.kind, SyntaxKind::T_STAR | SyntaxKind::T_SLASH) => lx.kind,
                _ => break,
            };
            self.cursor.advance();
            if op == SyntaxKind::T_STAR {
                let rhs = self.power()?;
                value = arith::mul(value, rhs)?;
            } else {
                self.reject_literal_zero_divisor()?;
                let rhs = self.power()?;
                value = arith::div(value, rhs)?;
            }
        }
        Ok(value)
    }

    // A bare `0` divisor is a division by zero before it is a disallowed digit.
    // `0!` and `0^x` are not zero divisors, so they fall through to the ledger.
    fn reject_literal_zero_divisor(&mut self) -> Result<(), ParseFailure> {
        self.cursor.skip_insignificant();
        let Some(lx) = self.cursor.peek() else {
            return Ok(());
        };
        if lx.kind != SyntaxKind::T_DIGIT || lx.ch != '0' {
            return Ok(());
        }
        let continues = self
            .cursor
            .peek_after_current()
            .is_some_and(|next| matches!(next.kind, SyntaxKind::T_BANG | SyntaxKind::T_CARET));
        if continues {
            Ok(())
        } else {
            Err(ParseFailure::at(FailureKind::DivisionByZero, '/'))
        }
    }

    fn power(&mut self) -> Result<f64, ParseFailure> {
        let base = self.factor()?;
        self.cursor.skip_insignificant();
        if !self.cursor.at(SyntaxKind::T_CARET) {
            return Ok(base);
        }
        self.cursor.advance();
        self.enter('^')?;
        let exp = self.power()?;
        self.leave();
        arith::pow(base, exp)
    }

    fn factor(&mut self) -> Result<f64, ParseFailure> {
        let mut value = self.primary()?;
        self.cursor.skip_insignificant();
        while self.cursor.at(SyntaxKind::T_BANG) {
            self.cursor.advance();
            value = arith::factorial(value)?;
            self.cursor.skip_insignificant();
        }
        Ok(value)
    }

    fn primary(&mut self) -> Result<f64, ParseFailure> {
        self.cursor.skip_insignificant();
        let Some(lx) = self.cursor.peek() else {
            return Err(ParseFailure::bare(FailureKind::UnexpectedEnd));
        };
        match lx.kind {
            SyntaxKind::T_DIGIT => {
                self.cursor.advance();
                self.ledger.consume(lx.ch).map(f64::from)
            }
            SyntaxKind::T_LPAREN => {
                self.cursor.advance();
                self.enter('(')?;
                let value = self.expression()?;
                self.leave();
                self.cursor.skip_insignificant();
                if !self.cursor.at(SyntaxKind::T_RPAREN) {
                    return Err(ParseFailure::at(FailureKind::MissingClosingParen, ')'));
                }
                self.cursor.advance();
                Ok(value)
            }
            _ => Err(ParseFailure::at(FailureKind::DisallowedCharacter, lx.ch)),
        }
    }

    fn enter(&mut self, ch: char) -> Result<(), ParseFailure> {
        self.depth += 1;
        if self.depth > self.limits.max_depth() {
            return Err(ParseFailure::new(
                FailureKind::NestingTooDeep,
                Some(ch),
                format!(
                    "expression is nested deeper than {} levels",
                    self.limits.max_depth()
                ),
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
