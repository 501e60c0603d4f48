//! Resource limits applied to a single evaluation.

/// Bounds on nesting depth and input length.
///
/// # Examples
///
/// ```
/// use mathcount::{Limits, evaluate_with};
///
/// let strict = Limits::default().with_max_depth(1);
/// assert!(evaluate_with("(1+2)*3", &strict).is_ok());
/// assert!(evaluate_with("((1+2))*3", &strict).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_depth: usize,
    max_input_len: usize,
}

impl Limits {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
    pub const DEFAULT_MAX_INPUT_LEN: usize = 1024;

    /// Maximum number of nested parenthesised groups and right-hand
    /// exponents.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Maximum input length, counted in characters.
    #[must_use]
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
        }
    }
}
