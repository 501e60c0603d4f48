//! Final value of an evaluation.
//!
//! Evaluation runs entirely in `f64`; only the finished value is classified
//! as integral or fractional.

use std::fmt;

use num_traits::ToPrimitive;

/// Result of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// The value has no fractional part and fits in an `i64`.
    Integer(i64),
    /// Any other finite value.
    Real(f64),
}

impl Number {
    /// Classifies a finished accumulator value.
    ///
    /// Whole values that fit in `i64` become [`Number::Integer`]; everything
    /// else stays [`Number::Real`]. Negative zero normalises to `0`.
    #[must_use]
    pub fn normalise(value: f64) -> Self {
        match value.to_i64() {
            Some(int) if value.fract() == 0.0 => Self::Integer(int),
            _ => Self::Real(value),
        }
    }

    /// Whether the value was classified as a whole number.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// The value as an `f64`, whichever way it was classified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathcount::{Number, evaluate};
    ///
    /// let half = evaluate("1/2").map(Number::as_f64);
    /// assert_eq!(half, Ok(0.5));
    /// assert_eq!(Number::Integer(755).as_f64(), 755.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers originate from f64 values"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(int) => int as f64,
            Self::Real(real) => real,
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Self::Integer(int) if int == other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(int) => write!(f, "{int}"),
            Self::Real(real) => write!(f, "{real}"),
        }
    }
}
