//! Scalar root finding for the labor-supply workspace.
//!
//! - [`NewtonProblem`] — a residual with a known derivative and an optional
//!   projection back into the problem's domain
//! - [`newton`] — fixed-count damped Newton iteration

mod problem;

pub mod newton;

pub use problem::{Evaluation, NewtonProblem};
