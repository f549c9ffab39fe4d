use labor_solve::newton;
use serde::{Deserialize, Serialize};

use crate::{Error, hours::DEFAULT_ITERATIONS};

/// Preference parameters shared by every agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Curvature of consumption utility (`eta < 0`, `eta != -1`).
    pub eta: f64,
    /// Curvature of the disutility of hours (`gamma > 0`).
    pub gamma: f64,
    /// Disutility scale used when agents are homogeneous (`beta > 0`).
    pub beta: f64,
    /// Fixed cost of working, paid only when hours are positive (`beta0 >= 0`).
    pub beta0: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            eta: -1.5,
            gamma: 0.8,
            beta: 1.0,
            beta0: 0.1,
        }
    }
}

impl Preferences {
    /// Validates the preference parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), Error> {
        check_curvature(self.eta, self.gamma)?;
        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(Error::invalid("beta", self.beta, "must be finite and positive"));
        }
        if !self.beta0.is_finite() || self.beta0 < 0.0 {
            return Err(Error::invalid(
                "beta0",
                self.beta0,
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// CRRA-style utility `c^(1+eta) / (1+eta)`.
    #[must_use]
    pub fn consumption_utility(&self, consumption: f64) -> f64 {
        consumption.powf(1.0 + self.eta) / (1.0 + self.eta)
    }

    /// Disutility `weight * h^(1+gamma) / (1+gamma)`.
    #[must_use]
    pub fn hours_disutility(&self, weight: f64, hours: f64) -> f64 {
        weight * hours.powf(1.0 + self.gamma) / (1.0 + self.gamma)
    }
}

/// Tax regime: a net-of-tax wage multiplier and a lump-sum tax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRegime {
    /// Marginal net-of-tax wage multiplier.
    pub rho: f64,
    /// Lump-sum tax (negative for a transfer).
    pub r: f64,
}

impl Default for TaxRegime {
    fn default() -> Self {
        Self { rho: 1.0, r: 0.0 }
    }
}

impl TaxRegime {
    /// Validates the tax regime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `rho` is not positive or either
    /// field is non-finite.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.rho.is_finite() || self.rho <= 0.0 {
            return Err(Error::invalid("rho", self.rho, "must be finite and positive"));
        }
        if !self.r.is_finite() {
            return Err(Error::invalid("r", self.r, "must be finite"));
        }
        Ok(())
    }
}

/// Everything needed to simulate one cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Number of agents `N`.
    pub population: usize,
    /// Return to the covariate in log wages (`lb`).
    pub wage_return: f64,
    pub tax: TaxRegime,
    pub preferences: Preferences,
    /// Draw a per-agent disutility scale instead of using `beta`.
    pub heterogeneity: bool,
    /// Draw an excluded instrument that shifts non-labor income only.
    pub instrument: bool,
    /// Newton steps per agent.
    pub iterations: usize,
    /// Residual below which an agent's hours count as converged.
    pub residual_tol: f64,
    pub seed: u64,
    /// Covariate values to use instead of fresh draws, one per agent.
    pub covariates: Option<Vec<f64>>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            population: 1000,
            wage_return: 1.0,
            tax: TaxRegime::default(),
            preferences: Preferences::default(),
            heterogeneity: false,
            instrument: false,
            iterations: DEFAULT_ITERATIONS,
            residual_tol: newton::Config::default().residual_tol,
            seed: 0,
            covariates: None,
        }
    }
}

impl SimParams {
    /// Validates the population, nested parameters, and supplied covariates.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population == 0 {
            return Err(Error::EmptyPopulation);
        }
        if !self.wage_return.is_finite() {
            return Err(Error::invalid(
                "wage_return",
                self.wage_return,
                "must be finite",
            ));
        }
        self.tax.validate()?;
        self.preferences.validate()?;
        self.solver_config()
            .validate()
            .map_err(|reason| Error::invalid("residual_tol", self.residual_tol, reason))?;

        if let Some(covariates) = &self.covariates {
            if covariates.len() != self.population {
                return Err(Error::CovariateLength {
                    expected: self.population,
                    actual: covariates.len(),
                });
            }
            if let Some(&bad) = covariates.iter().find(|x| !x.is_finite()) {
                return Err(Error::invalid("covariates", bad, "must be finite"));
            }
        }
        Ok(())
    }

    /// Returns the Newton configuration used for every agent.
    #[must_use]
    pub fn solver_config(&self) -> newton::Config {
        newton::Config {
            iters: self.iterations,
            residual_tol: self.residual_tol,
        }
    }
}

/// Rejects curvature values where the model is undefined.
pub(crate) fn check_curvature(eta: f64, gamma: f64) -> Result<(), Error> {
    if !eta.is_finite() || eta >= 0.0 {
        return Err(Error::invalid("eta", eta, "must be finite and negative"));
    }
    #[allow(clippy::float_cmp)]
    if eta == -1.0 {
        return Err(Error::invalid("eta", eta, "utility is singular at -1"));
    }
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(Error::invalid("gamma", gamma, "must be finite and positive"));
    }
    Ok(())
}
