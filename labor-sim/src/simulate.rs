use labor_solve::newton::Config;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    Agent, Error, Preferences, SimParams, TaxRegime,
    draws::{DrawRow, Draws},
    hours::{self, HoursFoc},
};

const WAGE_NOISE_SCALE: f64 = 0.2;
const INCOME_RETURN: f64 = 0.3;
const INCOME_INSTRUMENT_RETURN: f64 = 0.4;
const INCOME_NOISE_SCALE: f64 = 0.2;
const TASTE_RETURN: f64 = 0.5;
const TASTE_NOISE_SCALE: f64 = 0.1;

/// One simulated cross-section: the regime it was drawn under and its agents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossSection {
    pub tax: TaxRegime,
    pub preferences: Preferences,
    /// Agents in id order.
    pub agents: Vec<Agent>,
}

impl CrossSection {
    /// Agents whose utility of working exceeds that of not working.
    pub fn participants(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|agent| agent.participates)
    }

    /// Agents whose hours residual missed the tolerance.
    pub fn unconverged(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|agent| !agent.converged)
    }

    /// Share of agents who participate.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn participation_rate(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.participants().count() as f64 / self.agents.len() as f64
    }
}

/// Simulates one cross-section using a generator seeded from `params.seed`.
///
/// # Errors
///
/// Returns an error if `params` fail validation or an agent's hours cannot
/// be solved.
pub fn simulate_cross_section(params: &SimParams) -> Result<CrossSection, Error> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    simulate_with_rng(params, &mut rng)
}

/// Simulates one cross-section, drawing shocks from `rng`.
///
/// `params.seed` is ignored here.
///
/// # Errors
///
/// Returns an error if `params` fail validation or an agent's hours cannot
/// be solved.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    params: &SimParams,
    rng: &mut R,
) -> Result<CrossSection, Error> {
    params.validate()?;

    let draws = Draws::sample(params, rng);
    let config = params.solver_config();
    let agents = draws
        .rows()
        .map(|row| derive_agent(params, &config, row))
        .collect::<Result<Vec<_>, _>>()?;

    let section = CrossSection {
        tax: params.tax,
        preferences: params.preferences,
        agents,
    };

    let unconverged = section.unconverged().count();
    if unconverged > 0 {
        tracing::warn!(
            unconverged,
            population = params.population,
            iterations = params.iterations,
            "hours residual above tolerance after the iteration budget"
        );
    }
    tracing::debug!(
        population = params.population,
        participation_rate = section.participation_rate(),
        rho = params.tax.rho,
        r = params.tax.r,
        "simulated cross-section"
    );

    Ok(section)
}

/// Turns one agent's draws into a complete record.
fn derive_agent(params: &SimParams, config: &Config, row: DrawRow) -> Result<Agent, Error> {
    let prefs = &params.preferences;
    let TaxRegime { rho, r } = params.tax;

    let lw = params.wage_return * row.x + WAGE_NOISE_SCALE * row.wage_noise;
    let wage = lw.exp();

    let instrument_term = row.z.map_or(0.0, |z| INCOME_INSTRUMENT_RETURN * z);
    let mu = (INCOME_RETURN * row.x + instrument_term + INCOME_NOISE_SCALE * row.income_noise).exp();

    let betai = row.taste_noise.map_or(prefs.beta, |noise| {
        (TASTE_RETURN * row.x + TASTE_NOISE_SCALE * noise).exp()
    });

    let resources = mu - r - prefs.beta0;
    let foc = HoursFoc::new(rho * wage, resources, prefs.eta, prefs.gamma, betai)?;
    let solution = hours::solve_hours(&foc, hours::initial_guess(wage, resources), config)
        .map_err(|source| Error::Solve { id: row.id, source })?;

    let h = solution.x;
    let consumption = foc.consumption(h);
    let u1 = prefs.consumption_utility(consumption) - prefs.hours_disutility(betai, h);
    let u0 = prefs.consumption_utility(mu);

    Ok(Agent {
        id: row.id,
        x: row.x,
        z: row.z,
        lw,
        mu,
        betai,
        hours: h,
        consumption,
        idle_consumption: mu - r,
        u1,
        u0,
        participates: u1 > u0,
        converged: solution.status.is_converged(),
        residual: solution.residual,
    })
}
