//! bridge::callbacks — the callback table handed to the engine.
//!
//! Purpose
//! -------
//! Assemble the engine's callback-table entries for one solve. Entries are
//! explicitly named per contract (scalar vs separable objective, gradient,
//! Hessian, constraint vectors, monitor) and are selected by the driver at
//! registration time from the method's needs; the engine never resolves
//! overloads by buffer shape.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`CallbackTable::for_method`] validates the method against the context
//!   first, so a table is only ever built for an admissible configuration.
//! - Table entries borrow the problem context; the driver keeps both alive
//!   for the duration of the engine's solve loop.
use crate::bridge::context::ProblemContext;
use crate::bridge::errors::BridgeResult;
use crate::bridge::evaluate::{
    evaluate_equalities, evaluate_gradient, evaluate_hessian, evaluate_inequalities,
    evaluate_objective, evaluate_separable_objective,
};
use crate::bridge::method::Method;
use crate::bridge::monitor::monitor;
use crate::engine::buffer::EngineVec;
use crate::engine::matrix::EngineMat;
use crate::engine::status::SolutionStatus;

/// Scalar-objective entry: reads `x`, returns `f(x)` for the engine to
/// store.
pub type ObjectiveCallback<'a> = Box<dyn Fn(&EngineVec) -> BridgeResult<f64> + 'a>;

/// Vector entry: reads `x`, writes a vector result into the second buffer.
pub type VectorCallback<'a> = Box<dyn Fn(&EngineVec, &EngineVec) -> BridgeResult<()> + 'a>;

/// Matrix entry: reads `x`, writes a matrix result through the assembly
/// path.
pub type MatrixCallback<'a> = Box<dyn Fn(&EngineVec, &EngineMat) -> BridgeResult<()> + 'a>;

/// Monitor entry: receives the engine's per-iteration status snapshot.
pub type MonitorCallback<'a> = Box<dyn Fn(&SolutionStatus) -> BridgeResult<()> + 'a>;

/// The callback-table entries the engine invokes during a solve.
///
/// Unregistered entries stay `None`; the engine only fires the entries the
/// selected method uses.
#[derive(Default)]
pub struct CallbackTable<'a> {
    pub objective: Option<ObjectiveCallback<'a>>,
    pub separable_objective: Option<VectorCallback<'a>>,
    pub gradient: Option<VectorCallback<'a>>,
    pub hessian: Option<MatrixCallback<'a>>,
    pub inequality_constraints: Option<VectorCallback<'a>>,
    pub equality_constraints: Option<VectorCallback<'a>>,
    pub monitor: Option<MonitorCallback<'a>>,
}

impl<'a> CallbackTable<'a> {
    /// A table with no entries registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate `method` against `ctx` and register the entries it needs.
    ///
    /// Separable methods get the separable objective entry; scalar methods
    /// get the scalar entry. The gradient entry is registered whenever the
    /// context carries a gradient (gradient-based methods require one);
    /// Hessian and constraint entries are registered when present. The
    /// monitor entry is always registered.
    ///
    /// # Errors
    /// Propagates [`Method::validate`] failures; no entry is built in that
    /// case.
    pub fn for_method(ctx: &'a ProblemContext<'a>, method: Method) -> BridgeResult<Self> {
        method.validate(ctx)?;

        let mut table = Self::empty();
        if method.is_separable() {
            table.separable_objective =
                Some(Box::new(move |x, f| evaluate_separable_objective(ctx, x, f)));
        } else {
            table.objective = Some(Box::new(move |x| evaluate_objective(ctx, x)));
        }
        if ctx.has_gradient() {
            table.gradient = Some(Box::new(move |x, g| evaluate_gradient(ctx, x, g)));
        }
        if ctx.has_hessian() {
            table.hessian = Some(Box::new(move |x, h| evaluate_hessian(ctx, x, h)));
        }
        if ctx.has_inequality_constraints() {
            table.inequality_constraints =
                Some(Box::new(move |x, c| evaluate_inequalities(ctx, x, c)));
        }
        if ctx.has_equality_constraints() {
            table.equality_constraints =
                Some(Box::new(move |x, c| evaluate_equalities(ctx, x, c)));
        }
        table.monitor = Some(Box::new(monitor));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::errors::BridgeError;
    use crate::bridge::types::{Outputs, Params};

    fn identity(x: &Params) -> Outputs {
        x.clone()
    }

    #[test]
    // Purpose
    // -------
    // A separable method registers the separable objective entry and not
    // the scalar one; a scalar method does the reverse.
    fn objective_entry_follows_the_method_kind() {
        let objective = identity;
        let separable_ctx = ProblemContext::new(2, 2, &objective).expect("valid dimensions");
        let scalar_ctx = ProblemContext::new(2, 1, &objective).expect("valid dimensions");

        let pounders = CallbackTable::for_method(&separable_ctx, Method::Pounders)
            .expect("pounders table should build");
        let nm = CallbackTable::for_method(&scalar_ctx, Method::NelderMead)
            .expect("nm table should build");

        assert!(pounders.separable_objective.is_some());
        assert!(pounders.objective.is_none());
        assert!(nm.objective.is_some());
        assert!(nm.separable_objective.is_none());
        assert!(nm.monitor.is_some());
    }

    #[test]
    // Purpose
    // -------
    // Optional entries mirror the context's registered callables.
    fn optional_entries_mirror_the_context() {
        let objective = identity;
        let gradient = identity;
        let ctx = ProblemContext::new(2, 1, &objective)
            .expect("valid dimensions")
            .with_gradient(&gradient);

        let table =
            CallbackTable::for_method(&ctx, Method::Lmvm).expect("lmvm table should build");

        assert!(table.gradient.is_some());
        assert!(table.hessian.is_none());
        assert!(table.inequality_constraints.is_none());
    }

    #[test]
    // Purpose
    // -------
    // Configuration errors surface before any entry is built: a scalar
    // method with n > 1 never yields a table.
    fn invalid_configuration_builds_no_table() {
        let objective = identity;
        let ctx = ProblemContext::new(2, 2, &objective).expect("valid dimensions");

        let err = CallbackTable::for_method(&ctx, Method::Lmvm);

        assert!(matches!(err, Err(BridgeError::SeparableOutputsUnsupported { .. })));
    }

    #[test]
    // Registered entries are live adapters: driving one evaluates the host
    // callable through the marshaling layer.
    fn registered_entry_drives_the_adapter() {
        let objective = identity;
        let ctx = ProblemContext::new(2, 2, &objective).expect("valid dimensions");
        let table = CallbackTable::for_method(&ctx, Method::Pounders)
            .expect("pounders table should build");

        let x = EngineVec::from_slice(&[1.5, -2.0]);
        let f = EngineVec::new(2);
        let entry = table.separable_objective.as_ref().expect("entry should be registered");
        entry(&x, &f).expect("adapter should succeed");

        let written = f.array().expect("output buffer should be released");
        assert_eq!(&written[..], &[1.5, -2.0]);
    }
}
