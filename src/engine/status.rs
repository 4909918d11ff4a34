//! Solver status scalars reported by the engine's status query.
//!
//! The bridge does not interpret these values; it passes them through to the
//! driver and to the monitor callback.

/// Snapshot of the engine's solve progress at one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionStatus {
    /// Iterations completed so far.
    pub iterations: u64,
    /// Current objective value.
    pub objective: f64,
    /// Norm of the current gradient (or residual for separable solves).
    pub gradient_norm: f64,
    /// Norm of the current constraint violation.
    pub constraint_norm: f64,
    /// Norm of the latest step / parameter change.
    pub step_norm: f64,
}

impl SolutionStatus {
    pub fn new(
        iterations: u64, objective: f64, gradient_norm: f64, constraint_norm: f64, step_norm: f64,
    ) -> Self {
        Self { iterations, objective, gradient_norm, constraint_norm, step_norm }
    }
}
