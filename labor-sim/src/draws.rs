use rand::Rng;
use rand_distr::StandardNormal;

use crate::SimParams;

/// Standard normal inputs for one cross-section, drawn column by column.
///
/// Columns are drawn in a fixed order (covariate, wage noise, income noise,
/// instrument, taste noise) so a seed maps to one table. Optional columns
/// are skipped entirely when their feature is off.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Draws {
    x: Vec<f64>,
    wage_noise: Vec<f64>,
    income_noise: Vec<f64>,
    z: Option<Vec<f64>>,
    taste_noise: Option<Vec<f64>>,
}

/// The draws belonging to one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DrawRow {
    pub(crate) id: usize,
    pub(crate) x: f64,
    pub(crate) wage_noise: f64,
    pub(crate) income_noise: f64,
    pub(crate) z: Option<f64>,
    pub(crate) taste_noise: Option<f64>,
}

impl Draws {
    /// Draws every column required by `params`.
    ///
    /// Supplied covariates are used as-is and consume no randomness.
    pub(crate) fn sample<R: Rng + ?Sized>(params: &SimParams, rng: &mut R) -> Self {
        let n = params.population;
        let x = match &params.covariates {
            Some(covariates) => covariates.clone(),
            None => standard_normals(rng, n),
        };
        let wage_noise = standard_normals(rng, n);
        let income_noise = standard_normals(rng, n);
        let z = params.instrument.then(|| standard_normals(rng, n));
        let taste_noise = params.heterogeneity.then(|| standard_normals(rng, n));

        Self {
            x,
            wage_noise,
            income_noise,
            z,
            taste_noise,
        }
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = DrawRow> + '_ {
        let column = |col: &Option<Vec<f64>>, id: usize| col.as_ref().map(|values| values[id]);

        (0..self.x.len()).map(move |id| DrawRow {
            id,
            x: self.x[id],
            wage_noise: self.wage_noise[id],
            income_noise: self.income_noise[id],
            z: column(&self.z, id),
            taste_noise: column(&self.taste_noise, id),
        })
    }
}

pub(crate) fn standard_normals<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.sample::<f64, _>(StandardNormal)).collect()
}
