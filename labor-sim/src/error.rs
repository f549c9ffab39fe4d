use thiserror::Error;

/// Errors that can occur when solving for hours or simulating agents.
#[derive(Debug, Error)]
pub enum Error {
    #[error("population must contain at least one agent")]
    EmptyPopulation,

    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("expected {expected} covariate values, got {actual}")]
    CovariateLength { expected: usize, actual: usize },

    #[error("hours solve failed for agent {id}")]
    Solve {
        id: usize,
        #[source]
        source: labor_solve::newton::Error,
    },

    #[error(transparent)]
    Newton(#[from] labor_solve::newton::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
