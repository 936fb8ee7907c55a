//! Error types for evaluation and for the recurrence notation.

use thiserror::Error;

/// Arithmetic faults raised by the checked loop.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero at step {step} (x = {value})")]
    DivisionByZero { step: u64, value: f64 },
}

impl EvalError {
    /// Shifts the step index when the failing loop started mid-run.
    pub fn offset(self, by: u64) -> Self {
        match self {
            EvalError::DivisionByZero { step, value } => {
                EvalError::DivisionByZero { step: step + by, value }
            }
        }
    }
}

/// Notation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("mismatched parenthesis")]
    MismatchedParen,

    #[error("operator '{0}' is missing an operand")]
    MissingOperand(char),

    #[error("expression has {0} dangling operands")]
    TrailingOperand(usize),

    #[error("expression mixes variables '{0}' and '{1}'")]
    MultipleVariables(String, String),
}

/// Notation result type.
pub type ParseResult<T> = Result<T, ParseError>;

/// Starting-value sampling errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    #[error("invalid range [{lo}, {hi})")]
    InvalidRange { lo: f64, hi: f64 },

    #[error("no value in [{lo}, {hi}) is at least {margin} away from every pole")]
    NoAdmissibleValue { lo: f64, hi: f64, margin: f64 },

    #[error("gave up after {draws} draws with {found} of {wanted} values accepted")]
    Exhausted { draws: u64, found: usize, wanted: usize },
}
