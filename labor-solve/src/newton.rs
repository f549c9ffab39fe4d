//! Damped Newton iteration with a problem-defined safeguard.
//!
//! Each step evaluates `f` and `f'`, proposes `x - f/f'`, and hands the
//! proposal to [`NewtonProblem::safeguard`]. [`solve`] repeats this a fixed
//! number of times and only then checks the residual, so the iterates match
//! a plain fixed-count loop exactly.

mod config;
mod error;
mod observe;
mod solution;

pub use config::Config;
pub use error::Error;
pub use observe::Observer;
pub use solution::{Solution, Status};

use crate::{Evaluation, NewtonProblem};

/// Control actions supported by the Newton solver.
pub enum Action {
    /// Stop iterating and report the most recent iterate.
    StopEarly,
}

/// A single safeguarded Newton step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Residual and derivative at the starting point.
    pub eval: Evaluation,
    /// Undamped proposal `x - f/f'`.
    pub proposed: f64,
    /// Iterate after the safeguard was applied.
    pub next: f64,
}

/// Iteration event emitted by the Newton solver.
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The step just taken.
    pub step: &'a Step,
}

/// Takes one safeguarded Newton step from `x`.
///
/// # Errors
///
/// Returns an error if the problem rejects `x`, the residual is not finite,
/// or the derivative is zero or NaN.
pub fn step<P: NewtonProblem>(problem: &P, x: f64) -> Result<Step, Error> {
    let eval = evaluate(problem, x)?;
    let proposed = eval.newton_proposal();
    let next = problem.safeguard(proposed);

    Ok(Step {
        eval,
        proposed,
        next,
    })
}

/// Runs `config.iters` Newton steps from `x0`.
/// Observers see every step and may stop the iteration early.
///
/// # Errors
///
/// Returns an error if the config or initial guess is invalid, or if any
/// step fails (see [`step`]).
pub fn solve<P, Obs>(
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: NewtonProblem,
    Obs: Observer,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { value: x0 });
    }

    let mut x = x0;
    for iter in 1..=config.iters {
        let step = step(problem, x)?;
        x = step.next;

        let event = Event { iter, step: &step };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            let eval = evaluate(problem, x)?;
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual: eval.residual,
                iters: iter,
            });
        }
    }

    let eval = evaluate(problem, x)?;
    let status = if eval.residual.abs() <= config.residual_tol {
        Status::Converged
    } else {
        Status::MaxIters
    };

    Ok(Solution {
        status,
        x,
        residual: eval.residual,
        iters: config.iters,
    })
}

/// Runs Newton iteration without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<P: NewtonProblem>(
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(problem, x0, config, ())
}

fn evaluate<P: NewtonProblem>(problem: &P, x: f64) -> Result<Evaluation, Error> {
    let eval = problem
        .evaluate(x)
        .map_err(|err| Error::Problem(Box::new(err)))?;

    if !eval.residual.is_finite() {
        return Err(Error::NonFiniteResidual {
            x,
            residual: eval.residual,
        });
    }

    #[allow(clippy::float_cmp)]
    if eval.derivative.is_nan() || eval.derivative == 0.0 {
        return Err(Error::DegenerateDerivative {
            x,
            derivative: eval.derivative,
        });
    }

    Ok(eval)
}
