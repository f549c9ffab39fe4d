/// A scalar equation `f(x) = 0` that Newton's method can drive to a root.
///
/// Implementors supply the residual together with its derivative, and may
/// override [`NewtonProblem::safeguard`] to pull a proposed iterate back into
/// the region where the residual is defined.
pub trait NewtonProblem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the residual and its derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` lies outside the problem's domain.
    fn evaluate(&self, x: f64) -> Result<Evaluation, Self::Error>;

    /// Maps a proposed Newton iterate to the iterate actually used.
    ///
    /// The default accepts the proposal unchanged.
    fn safeguard(&self, proposed: f64) -> f64 {
        proposed
    }
}

/// Residual and derivative captured at a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub residual: f64,
    pub derivative: f64,
}

impl Evaluation {
    /// Returns the undamped Newton proposal `x - f(x) / f'(x)`.
    #[must_use]
    pub fn newton_proposal(&self) -> f64 {
        self.x - self.residual / self.derivative
    }
}
