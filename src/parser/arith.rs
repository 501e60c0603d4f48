//! Checked floating-point operations used by the grammar.
//!
//! Each helper either yields a finite value or the failure naming the
//! operator that produced the problem. Infinities and NaNs never leave this
//! module.

#![expect(
    clippy::float_arithmetic,
    reason = "the evaluator computes in f64 by definition"
)]

use num_traits::ToPrimitive;

use super::error::{FailureKind, ParseFailure};

/// Largest `n` whose factorial is representable as a finite `f64`.
pub(crate) const MAX_FACTORIAL: u32 = 170;

fn finite(value: f64, op: char) -> Result<f64, ParseFailure> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseFailure::at(FailureKind::Overflow, op))
    }
}

pub(crate) fn add(lhs: f64, rhs: f64) -> Result<f64, ParseFailure> {
    finite(lhs + rhs, '+')
}

pub(crate) fn sub(lhs: f64, rhs: f64) -> Result<f64, ParseFailure> {
    finite(lhs - rhs, '-')
}

pub(crate) fn mul(lhs: f64, rhs: f64) -> Result<f64, ParseFailure> {
    finite(lhs * rhs, '*')
}

/// # Errors
/// Returns [`FailureKind::DivisionByZero`] for a zero divisor.
pub(crate) fn div(lhs: f64, rhs: f64) -> Result<f64, ParseFailure> {
    if rhs == 0.0 {
        return Err(ParseFailure::at(FailureKind::DivisionByZero, '/'));
    }
    finite(lhs / rhs, '/')
}

/// Raises `base` to `exp`.
///
/// # Errors
/// Returns [`FailureKind::InvalidPower`] when the result is not a finite
/// real number. The detail names the underlying reason.
pub(crate) fn pow(base: f64, exp: f64) -> Result<f64, ParseFailure> {
    let value = base.powf(exp);
    if value.is_finite() {
        return Ok(value);
    }
    let detail = if value.is_nan() {
        "invalid power: negative base with a fractional exponent"
    } else if base == 0.0 {
        "invalid power: zero cannot be raised to a negative power"
    } else {
        "invalid power: result is too large"
    };
    Err(ParseFailure::new(FailureKind::InvalidPower, Some('^'), detail))
}

/// Computes `value!`.
///
/// # Errors
/// Returns [`FailureKind::InvalidFactorial`] when `value` is negative, not
/// whole, or too large for the result to be finite.
pub(crate) fn factorial(value: f64) -> Result<f64, ParseFailure> {
    if value < 0.0 || value.fract() != 0.0 {
        return Err(ParseFailure::at(FailureKind::InvalidFactorial, '!'));
    }
    let n = value
        .to_u32()
        .filter(|n| *n <= MAX_FACTORIAL)
        .ok_or_else(|| {
            ParseFailure::new(
                FailureKind::InvalidFactorial,
                Some('!'),
                format!("factorial of {value} is too large"),
            )
        })?;
    Ok((2..=n).fold(1.0, |acc, k| acc * f64::from(k)))
}
