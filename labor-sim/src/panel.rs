//! Several periods of the same agents under different tax regimes.
//!
//! Periods share one covariate draw, while wage, income, and taste shocks are
//! redrawn each period. Differences between periods are computed by joining
//! on agent id.

use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{Agent, CrossSection, Error, SimParams, TaxRegime, draws, simulate_with_rng};

/// Cross-sections of the same agents, one per tax regime, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub periods: Vec<CrossSection>,
}

impl Panel {
    /// Returns the first differences between each pair of adjacent periods.
    #[must_use]
    pub fn consecutive_differences(&self) -> Vec<Vec<PanelDiff>> {
        self.periods
            .windows(2)
            .map(|pair| difference(&pair[0], &pair[1]))
            .collect()
    }
}

/// Change in one agent's outcomes between two periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelDiff {
    pub id: usize,
    /// Participation in the earlier and later period.
    pub participates: [bool; 2],
    pub d_lw: f64,
    pub d_log_consumption: f64,
    pub d_log_hours: f64,
}

impl PanelDiff {
    fn between(earlier: &Agent, later: &Agent) -> Self {
        Self {
            id: earlier.id,
            participates: [earlier.participates, later.participates],
            d_lw: later.lw - earlier.lw,
            d_log_consumption: later.consumption.ln() - earlier.consumption.ln(),
            d_log_hours: later.hours.ln() - earlier.hours.ln(),
        }
    }

    /// Whether the agent works in both periods.
    #[must_use]
    pub fn stayer(&self) -> bool {
        self.participates[0] && self.participates[1]
    }
}

/// Simulates one period per regime, sharing a single covariate draw.
///
/// The covariate comes from `params.covariates` when supplied; otherwise it
/// is drawn first from a generator seeded with `params.seed`, which then
/// supplies every period's shocks.
///
/// # Errors
///
/// Returns an error if `params` fail validation or any period fails to
/// simulate.
pub fn simulate_panel(params: &SimParams, regimes: &[TaxRegime]) -> Result<Panel, Error> {
    params.validate()?;

    let mut rng = StdRng::seed_from_u64(params.seed);
    let covariates = match &params.covariates {
        Some(covariates) => covariates.clone(),
        None => draws::standard_normals(&mut rng, params.population),
    };

    let periods = regimes
        .iter()
        .map(|&tax| {
            let period = SimParams {
                tax,
                covariates: Some(covariates.clone()),
                ..params.clone()
            };
            simulate_with_rng(&period, &mut rng)
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(periods = periods.len(), "simulated panel");

    Ok(Panel { periods })
}

/// Joins two periods on agent id and returns one row per agent in both.
///
/// Rows follow the order of `earlier`.
#[must_use]
pub fn difference(earlier: &CrossSection, later: &CrossSection) -> Vec<PanelDiff> {
    let later: HashMap<usize, &Agent> = later.agents.iter().map(|agent| (agent.id, agent)).collect();

    earlier
        .agents
        .iter()
        .filter_map(|agent| {
            later
                .get(&agent.id)
                .map(|next| PanelDiff::between(agent, next))
        })
        .collect()
}
