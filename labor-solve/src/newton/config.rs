/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of Newton steps taken. The solver never exits early on its own.
    pub iters: usize,
    /// Largest absolute residual still reported as converged.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iters: 30,
            residual_tol: 1e-9,
        }
    }
}

impl Config {
    /// Validates that the residual tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        Ok(())
    }
}
