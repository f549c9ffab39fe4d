//! Optimal hours for a single agent.
//!
//! An interior hours choice solves the first-order condition
//!
//! ```text
//! f(h) = w * (w*h + R)^eta - beta * h^gamma = 0
//! ```
//!
//! where `w` already includes the net-of-tax multiplier and `R` is non-wage
//! resources net of the fixed cost and lump-sum tax. Each Newton step is
//! followed by two clamps, applied in order:
//!
//! 1. if `w*h + R <= 0`, set `h = -R/w + EPSILON`;
//! 2. if `h < 0`, set `h = EPSILON`.
//!
//! After both clamps the consumption argument `w*h + R` is strictly positive
//! and `h` is non-negative, so the fractional powers above stay defined.

use labor_solve::{
    Evaluation, NewtonProblem,
    newton::{self, Config, Solution},
};
use thiserror::Error;

use crate::{Error, params::check_curvature};

/// Offset used by both boundary clamps.
pub const EPSILON: f64 = 1e-4;

/// Newton steps taken per agent unless configured otherwise.
pub const DEFAULT_ITERATIONS: usize = 30;

/// A point outside the region where the first-order condition is defined.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("hours must be non-negative, got {hours}")]
    NegativeHours { hours: f64 },

    #[error("consumption {consumption} at hours {hours} is not positive")]
    NonPositiveConsumption { hours: f64, consumption: f64 },
}

/// The first-order condition for one agent's hours choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursFoc {
    wage: f64,
    resources: f64,
    eta: f64,
    gamma: f64,
    beta: f64,
}

impl HoursFoc {
    /// Creates a validated first-order condition.
    ///
    /// `wage` is the net-of-tax wage `rho * w`, and `resources` is
    /// `mu - r - beta0`, which may have either sign.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `wage` or `beta` is not
    /// positive, `eta` is non-negative or exactly `-1`, `gamma` is not
    /// positive, or any value is non-finite.
    pub fn new(wage: f64, resources: f64, eta: f64, gamma: f64, beta: f64) -> Result<Self, Error> {
        if !wage.is_finite() || wage <= 0.0 {
            return Err(Error::invalid("wage", wage, "must be finite and positive"));
        }
        if !resources.is_finite() {
            return Err(Error::invalid("resources", resources, "must be finite"));
        }
        check_curvature(eta, gamma)?;
        if !beta.is_finite() || beta <= 0.0 {
            return Err(Error::invalid("beta", beta, "must be finite and positive"));
        }

        Ok(Self {
            wage,
            resources,
            eta,
            gamma,
            beta,
        })
    }

    /// Returns the consumption argument `w*h + R`.
    #[must_use]
    pub fn consumption(&self, hours: f64) -> f64 {
        self.wage * hours + self.resources
    }
}

impl NewtonProblem for HoursFoc {
    type Error = DomainError;

    fn evaluate(&self, hours: f64) -> Result<Evaluation, Self::Error> {
        if hours.is_nan() || hours < 0.0 {
            return Err(DomainError::NegativeHours { hours });
        }

        let consumption = self.consumption(hours);
        if consumption.is_nan() || consumption <= 0.0 {
            return Err(DomainError::NonPositiveConsumption { hours, consumption });
        }

        let Self {
            wage: w,
            eta,
            gamma,
            beta,
            ..
        } = *self;

        Ok(Evaluation {
            x: hours,
            residual: w * consumption.powf(eta) - beta * hours.powf(gamma),
            derivative: eta * w * w * consumption.powf(eta - 1.0)
                - gamma * beta * hours.powf(gamma - 1.0),
        })
    }

    fn safeguard(&self, proposed: f64) -> f64 {
        let mut hours = proposed;
        if self.consumption(hours) <= 0.0 {
            hours = -self.resources / self.wage + EPSILON;
        }
        if hours < 0.0 {
            hours = EPSILON;
        }

        debug_assert!(
            hours >= 0.0 && self.consumption(hours) > 0.0,
            "clamped hours {hours} left the domain of the first-order condition"
        );
        hours
    }
}

/// Returns the starting hours `max(-R, 0) / w + 1`.
///
/// `wage` here is the gross wage `w`, before the tax multiplier.
#[must_use]
pub fn initial_guess(wage: f64, resources: f64) -> f64 {
    (-resources).max(0.0) / wage + 1.0
}

/// Takes exactly one safeguarded Newton step from `hours`.
///
/// # Errors
///
/// Returns an error if the parameters are invalid (see [`HoursFoc::new`]) or
/// `hours` lies outside the domain of the first-order condition.
pub fn solve_hours_step(
    hours: f64,
    wage: f64,
    resources: f64,
    eta: f64,
    gamma: f64,
    beta: f64,
) -> Result<f64, Error> {
    let foc = HoursFoc::new(wage, resources, eta, gamma, beta)?;
    let step = newton::step(&foc, hours)?;
    Ok(step.next)
}

/// Iterates the safeguarded Newton step `config.iters` times from `start`.
///
/// The starting point is passed through the same clamps as every later
/// iterate, so a guess that leaves consumption non-positive is moved back
/// inside the domain rather than rejected.
///
/// # Errors
///
/// Returns an error if `start` is not finite or the solver config is invalid.
pub fn solve_hours(foc: &HoursFoc, start: f64, config: &Config) -> Result<Solution, newton::Error> {
    if !start.is_finite() {
        return Err(newton::Error::NonFiniteGuess { value: start });
    }
    newton::solve_unobserved(foc, foc.safeguard(start), config)
}
