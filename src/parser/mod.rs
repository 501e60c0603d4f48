//! Evaluator for counting expressions.
//!
//! An expression uses each of the digits 1 to 6 at most once, the operators
//! `+ - * / ^ !`, and parentheses. [`evaluate`] validates and computes it in
//! one pass, returning a [`Number`] or the first [`ParseFailure`]
//! encountered. Each call owns its own cursor and digit ledger, so
//! evaluations never share state.

use log::{debug, trace};

mod arith;
mod cursor;
mod error;
mod grammar;
mod ledger;
mod limits;
mod number;

#[cfg(test)]
mod tests;

pub use error::{FailureKind, ParseFailure};
pub use ledger::{MAX_DIGIT, MIN_DIGIT};
pub use limits::Limits;
pub use number::Number;

use grammar::Session;

/// Evaluate `text` with the default [`Limits`].
///
/// # Examples
///
/// ```
/// use mathcount::{FailureKind, Number, evaluate};
///
/// assert_eq!(evaluate("5*(4+3)+6!"), Ok(Number::Integer(755)));
/// let err = evaluate("1+1").unwrap_err();
/// assert_eq!(err.kind(), FailureKind::DuplicateDigit);
/// ```
///
/// # Errors
/// Returns a [`ParseFailure`] describing the first rule violation.
#[must_use = "discarding the Result will ignore evaluation failures"]
pub fn evaluate(text: &str) -> Result<Number, ParseFailure> {
    evaluate_with(text, &Limits::default())
}

/// Evaluate `text`, bounding nesting depth and input length by `limits`.
///
/// # Errors
/// Returns a [`ParseFailure`] describing the first rule violation.
#[must_use = "discarding the Result will ignore evaluation failures"]
pub fn evaluate_with(text: &str, limits: &Limits) -> Result<Number, ParseFailure> {
    let outcome = Session::new(text, *limits).and_then(|mut session| {
        let value = session.run()?;
        trace!(
            "evaluated {text:?} to {value} using {} digits",
            session.digits_used()
        );
        Ok(value)
    });
    if let Err(failure) = &outcome {
        debug!(
            "rejected {text:?}: {:?} at {:?}",
            failure.kind(),
            failure.offending()
        );
    }
    outcome
}
