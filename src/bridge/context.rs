//! bridge::context — the per-solve problem description.
//!
//! Purpose
//! -------
//! Aggregate the two problem dimensions and non-owning references to the
//! host-supplied callables for one solve. The context never owns the
//! callables: the driver keeps them alive for the context's lifetime, and
//! the borrow checker enforces that the bridge cannot call one after the
//! driver releases it.
//!
//! Invariants & assumptions
//! ------------------------
//! - `parameter_count` and `output_count` are at least 1 (checked at
//!   construction).
//! - `output_count == 1` for scalar-objective methods; larger values are
//!   only admissible for separable methods and are rejected at method
//!   validation, not here.
//! - Exactly one context exists per active solve; it is created for the
//!   solve and discarded once results are copied out.
use std::fmt;

use crate::bridge::errors::{BridgeError, BridgeResult};
use crate::bridge::types::{MatrixFn, VectorFn};

/// Which host callable an adapter needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    Objective,
    Gradient,
    Hessian,
    InequalityConstraints,
    EqualityConstraints,
}

impl fmt::Display for CallableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallableKind::Objective => "objective",
            CallableKind::Gradient => "gradient",
            CallableKind::Hessian => "hessian",
            CallableKind::InequalityConstraints => "inequality-constraints",
            CallableKind::EqualityConstraints => "equality-constraints",
        };
        write!(f, "{name}")
    }
}

/// Problem description for one solve: dimensions plus borrowed callables.
///
/// Built with [`ProblemContext::new`] and the `with_*` builders:
///
/// ```
/// use optbridge::bridge::context::ProblemContext;
/// use optbridge::bridge::types::{Outputs, Params};
///
/// let objective = |x: &Params| -> Outputs { x.clone() };
/// let ctx = ProblemContext::new(2, 2, &objective)?;
/// assert_eq!(ctx.parameter_count(), 2);
/// # Ok::<(), optbridge::bridge::errors::BridgeError>(())
/// ```
pub struct ProblemContext<'a> {
    parameter_count: usize,
    output_count: usize,
    objective: &'a VectorFn,
    gradient: Option<&'a VectorFn>,
    hessian: Option<&'a MatrixFn>,
    inequality_constraints: Option<&'a VectorFn>,
    equality_constraints: Option<&'a VectorFn>,
}

impl<'a> ProblemContext<'a> {
    /// Create a context from the two dimensions and the required objective.
    ///
    /// # Errors
    /// Returns [`BridgeError::InvalidDimension`] if either dimension is
    /// zero.
    pub fn new(
        parameter_count: usize, output_count: usize, objective: &'a VectorFn,
    ) -> BridgeResult<Self> {
        if parameter_count == 0 {
            return Err(BridgeError::InvalidDimension {
                name: "parameter count",
                value: parameter_count,
                reason: "At least one optimization variable is required.",
            });
        }
        if output_count == 0 {
            return Err(BridgeError::InvalidDimension {
                name: "output count",
                value: output_count,
                reason: "At least one residual/objective output is required.",
            });
        }
        Ok(Self {
            parameter_count,
            output_count,
            objective,
            gradient: None,
            hessian: None,
            inequality_constraints: None,
            equality_constraints: None,
        })
    }

    /// Register an analytic gradient callable (`R^k -> R^k`).
    pub fn with_gradient(mut self, gradient: &'a VectorFn) -> Self {
        self.gradient = Some(gradient);
        self
    }

    /// Register a Hessian callable (`R^k -> R^(k×k)`).
    pub fn with_hessian(mut self, hessian: &'a MatrixFn) -> Self {
        self.hessian = Some(hessian);
        self
    }

    /// Register an inequality-constraints callable (`R^k -> R^m`).
    pub fn with_inequality_constraints(mut self, constraints: &'a VectorFn) -> Self {
        self.inequality_constraints = Some(constraints);
        self
    }

    /// Register an equality-constraints callable (`R^k -> R^m`).
    pub fn with_equality_constraints(mut self, constraints: &'a VectorFn) -> Self {
        self.equality_constraints = Some(constraints);
        self
    }

    /// Number of optimization variables `k`.
    pub fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    /// Number of residual/objective outputs `n`.
    pub fn output_count(&self) -> usize {
        self.output_count
    }

    pub fn has_gradient(&self) -> bool {
        self.gradient.is_some()
    }

    pub fn has_hessian(&self) -> bool {
        self.hessian.is_some()
    }

    pub fn has_inequality_constraints(&self) -> bool {
        self.inequality_constraints.is_some()
    }

    pub fn has_equality_constraints(&self) -> bool {
        self.equality_constraints.is_some()
    }

    /// The registered objective callable.
    pub fn objective(&self) -> &'a VectorFn {
        self.objective
    }

    /// The registered gradient callable.
    ///
    /// # Errors
    /// [`BridgeError::CallableNotRegistered`] if none was registered.
    pub fn gradient(&self) -> BridgeResult<&'a VectorFn> {
        self.gradient
            .ok_or(BridgeError::CallableNotRegistered { kind: CallableKind::Gradient })
    }

    /// The registered Hessian callable.
    ///
    /// # Errors
    /// [`BridgeError::CallableNotRegistered`] if none was registered.
    pub fn hessian(&self) -> BridgeResult<&'a MatrixFn> {
        self.hessian.ok_or(BridgeError::CallableNotRegistered { kind: CallableKind::Hessian })
    }

    /// The registered inequality-constraints callable.
    ///
    /// # Errors
    /// [`BridgeError::CallableNotRegistered`] if none was registered.
    pub fn inequality_constraints(&self) -> BridgeResult<&'a VectorFn> {
        self.inequality_constraints.ok_or(BridgeError::CallableNotRegistered {
            kind: CallableKind::InequalityConstraints,
        })
    }

    /// The registered equality-constraints callable.
    ///
    /// # Errors
    /// [`BridgeError::CallableNotRegistered`] if none was registered.
    pub fn equality_constraints(&self) -> BridgeResult<&'a VectorFn> {
        self.equality_constraints.ok_or(BridgeError::CallableNotRegistered {
            kind: CallableKind::EqualityConstraints,
        })
    }
}

impl fmt::Debug for ProblemContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemContext")
            .field("parameter_count", &self.parameter_count)
            .field("output_count", &self.output_count)
            .field("gradient", &self.gradient.is_some())
            .field("hessian", &self.hessian.is_some())
            .field("inequality_constraints", &self.inequality_constraints.is_some())
            .field("equality_constraints", &self.equality_constraints.is_some())
            .finish()
    }
}
