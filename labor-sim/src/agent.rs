use serde::Serialize;

/// One simulated agent.
///
/// Records are built once by the simulator and only read afterwards.
/// `hours` and `consumption` describe the interior solution; use
/// [`Agent::realized_hours`] and [`Agent::realized_consumption`] for the
/// outcome after the participation decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Agent {
    pub id: usize,
    /// Covariate `X`.
    pub x: f64,
    /// Excluded instrument `Z`, present only when an instrument is modeled.
    pub z: Option<f64>,
    /// Log wage `lw`.
    pub lw: f64,
    /// Non-labor income `mu`.
    pub mu: f64,
    /// Disutility scale applied to this agent (`betai`, or `beta` when
    /// agents are homogeneous).
    pub betai: f64,
    /// Interior hours `h`.
    pub hours: f64,
    /// Consumption at the interior hours, `rho*w*h - r + mu - beta0`.
    pub consumption: f64,
    /// Consumption when not working, `mu - r`.
    pub idle_consumption: f64,
    /// Utility of working the interior hours.
    pub u1: f64,
    /// Utility of not working.
    pub u0: f64,
    /// Participation flag `u1 > u0`.
    pub participates: bool,
    /// Whether the hours residual met the configured tolerance.
    pub converged: bool,
    /// First-order-condition residual at `hours`.
    pub residual: f64,
}

impl Agent {
    /// Gross wage `exp(lw)`.
    #[must_use]
    pub fn wage(&self) -> f64 {
        self.lw.exp()
    }

    #[must_use]
    pub fn realized_hours(&self) -> f64 {
        if self.participates { self.hours } else { 0.0 }
    }

    #[must_use]
    pub fn realized_consumption(&self) -> f64 {
        if self.participates {
            self.consumption
        } else {
            self.idle_consumption
        }
    }
}
