use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Newton iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("degenerate derivative {derivative} at x = {x}")]
    DegenerateDerivative { x: f64, derivative: f64 },

    #[error("problem evaluation failed")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}
