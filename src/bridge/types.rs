//! bridge::types — shared numeric aliases and callable signatures.
//!
//! Centralize the container types and host-callable signatures used across
//! the bridge so the rest of the code stays agnostic to `ndarray` specifics.
use ndarray::{Array1, Array2};

/// Parameter vector `x` handed to every host callable; length `k`.
pub type Params = Array1<f64>;

/// Vector result produced by a host callable (objective residuals,
/// gradient, or constraint values).
pub type Outputs = Array1<f64>;

/// Dense `k × k` matrix result produced by a Hessian callable.
pub type HessianMatrix = Array2<f64>;

/// Host callable producing a vector result from a parameter vector.
pub type VectorFn = dyn Fn(&Params) -> Outputs;

/// Host callable producing a matrix result from a parameter vector.
pub type MatrixFn = dyn Fn(&Params) -> HessianMatrix;
