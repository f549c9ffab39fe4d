/// Indicates whether the final iterate satisfies the residual tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Residual at the final iterate is within tolerance.
    Converged,
    /// Used every configured step without reaching the tolerance.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns `true` only for [`Status::Converged`].
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Status::Converged)
    }
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Final iterate.
    pub x: f64,
    /// Residual at the final iterate.
    pub residual: f64,
    /// Number of steps taken.
    pub iters: usize,
}
