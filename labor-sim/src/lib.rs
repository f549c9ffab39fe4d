//! A static labor-supply model.
//!
//! Each simulated agent chooses hours by solving the first-order condition
//! `rho*w*(rho*w*h + R)^eta = beta * h^gamma` with a safeguarded Newton
//! iteration, then compares the utility of that interior choice with the
//! utility of not working.
//!
//! - [`hours`] — the per-agent root solver
//! - [`simulate_cross_section`] — one cross-section of agents
//! - [`panel`] — several periods sharing a covariate, joined on agent id

mod agent;
mod draws;
mod error;
mod params;
mod simulate;

pub mod hours;
pub mod panel;

pub use agent::Agent;
pub use error::Error;
pub use params::{Preferences, SimParams, TaxRegime};
pub use simulate::{CrossSection, simulate_cross_section, simulate_with_rng};
