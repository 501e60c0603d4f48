//! Tracks which of the six allowed digits an expression has consumed.

use super::error::{FailureKind, ParseFailure};

/// Smallest digit an expression may use.
pub const MIN_DIGIT: u8 = 1;
/// Largest digit an expression may use.
pub const MAX_DIGIT: u8 = 6;

/// Set of digits consumed during one evaluation, stored as a bit mask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DigitLedger {
    used: u8,
}

impl DigitLedger {
    /// Records `ch` and returns its numeric value.
    ///
    /// # Errors
    /// Returns [`FailureKind::DisallowedDigit`] for anything outside
    /// `1..=6` and [`FailureKind::DuplicateDigit`] when the digit was
    /// already consumed.
    pub(crate) fn consume(&mut self, ch: char) -> Result<u8, ParseFailure> {
        let digit = ch
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .filter(|d| (MIN_DIGIT..=MAX_DIGIT).contains(d))
            .ok_or_else(|| ParseFailure::at(FailureKind::DisallowedDigit, ch))?;
        let bit = 1u8 << (digit - MIN_DIGIT);
        if self.used & bit != 0 {
            return Err(ParseFailure::at(FailureKind::DuplicateDigit, ch));
        }
        self.used |= bit;
        Ok(digit)
    }

    /// Number of distinct digits consumed so far.
    #[must_use]
    pub(crate) fn len(self) -> u32 {
        self.used.count_ones()
    }
}
