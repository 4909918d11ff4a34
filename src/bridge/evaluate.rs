//! bridge::evaluate — the six evaluation adapters the engine invokes.
//!
//! Purpose
//! -------
//! One adapter per callback signature the engine can fire: scalar objective,
//! separable objective, gradient, Hessian, and the two constraint vectors.
//! Each adapter reads the parameter buffer through the marshaling layer,
//! invokes the registered host callable, validates the result against the
//! contractual dimension, and writes it back into the engine-owned output
//! buffer.
//!
//! Key behaviors
//! -------------
//! - Input length is always the context's parameter count; output length is
//!   the dimension contractually tied to that output (output count for
//!   separable residuals, parameter count for gradients, k × k for the
//!   Hessian, the engine-owned buffer length for constraints). Lengths are
//!   never inferred from whichever buffer happens to match.
//! - A missing callable fails fast with the callable's kind; a result whose
//!   length disagrees with the contract fails loudly instead of truncating
//!   or padding, and nothing is written.
//! - Adapters are stateless beyond the context they receive; the engine may
//!   call them repeatedly and in any order.
//!
//! Conventions
//! -----------
//! - The scalar objective's value is returned to the caller, which copies it
//!   into the engine's destination; it is never left behind in a temporary.
use crate::bridge::context::{CallableKind, ProblemContext};
use crate::bridge::errors::{BridgeError, BridgeResult};
use crate::bridge::marshal::{read_vec, write_mat, write_vec};
use crate::engine::buffer::EngineVec;
use crate::engine::matrix::EngineMat;

/// Evaluate the scalar objective at `x`.
///
/// Reads `x` (length `k`), invokes the objective, and returns the single
/// result element for the caller to store in the engine's destination.
///
/// # Errors
/// - [`BridgeError::ResultLengthMismatch`] if the callable did not return
///   exactly one value.
/// - Any marshaling failure from the parameter read.
pub fn evaluate_objective(ctx: &ProblemContext<'_>, x: &EngineVec) -> BridgeResult<f64> {
    let params = read_vec(x, ctx.parameter_count())?;
    let result = (ctx.objective())(&params);
    if result.len() != 1 {
        return Err(BridgeError::ResultLengthMismatch {
            kind: CallableKind::Objective,
            expected: 1,
            found: result.len(),
        });
    }
    Ok(result[0])
}

/// Evaluate the separable (sum-of-squares) objective at `x`.
///
/// Reads `x` (length `k`), invokes the objective, checks the result has
/// exactly `n` elements, and writes them into `f` in order with no
/// transformation.
///
/// # Errors
/// - [`BridgeError::ResultLengthMismatch`] on a result of the wrong length;
///   nothing is written in that case.
/// - Any marshaling failure from either buffer.
pub fn evaluate_separable_objective(
    ctx: &ProblemContext<'_>, x: &EngineVec, f: &EngineVec,
) -> BridgeResult<()> {
    let params = read_vec(x, ctx.parameter_count())?;
    let result = (ctx.objective())(&params);
    if result.len() != ctx.output_count() {
        return Err(BridgeError::ResultLengthMismatch {
            kind: CallableKind::Objective,
            expected: ctx.output_count(),
            found: result.len(),
        });
    }
    write_vec(f, &result.to_vec())
}

/// Evaluate the gradient at `x` into `g` (both length `k`).
///
/// # Errors
/// - [`BridgeError::CallableNotRegistered`] if no gradient was registered.
/// - [`BridgeError::ResultLengthMismatch`] on a result of the wrong length.
/// - Any marshaling failure from either buffer.
pub fn evaluate_gradient(
    ctx: &ProblemContext<'_>, x: &EngineVec, g: &EngineVec,
) -> BridgeResult<()> {
    let gradient = ctx.gradient()?;
    let params = read_vec(x, ctx.parameter_count())?;
    let result = gradient(&params);
    if result.len() != ctx.parameter_count() {
        return Err(BridgeError::ResultLengthMismatch {
            kind: CallableKind::Gradient,
            expected: ctx.parameter_count(),
            found: result.len(),
        });
    }
    write_vec(g, &result.to_vec())
}

/// Evaluate the Hessian at `x` into the engine matrix `h` (`k × k`).
///
/// The result is written through the matrix marshaling path: cell-by-cell
/// writes followed by exactly one assembly pair.
///
/// # Errors
/// - [`BridgeError::CallableNotRegistered`] if no Hessian was registered.
/// - [`BridgeError::HessianShapeMismatch`] if the result is not `k × k`;
///   nothing is written in that case.
/// - Any marshaling failure from the parameter read or the matrix write.
pub fn evaluate_hessian(
    ctx: &ProblemContext<'_>, x: &EngineVec, h: &EngineMat,
) -> BridgeResult<()> {
    let hessian = ctx.hessian()?;
    let k = ctx.parameter_count();
    let params = read_vec(x, k)?;
    let result = hessian(&params);
    if result.dim() != (k, k) {
        return Err(BridgeError::HessianShapeMismatch { expected: k, found: result.dim() });
    }
    write_mat(h, &result, k, k)
}

/// Evaluate the inequality constraints at `x` into `c`.
///
/// The constraint cardinality is owned by the engine: the driver sized `c`
/// at registration time, so the result must match `c`'s length.
///
/// # Errors
/// - [`BridgeError::CallableNotRegistered`] if no inequality-constraints
///   callable was registered.
/// - [`BridgeError::ResultLengthMismatch`] on a result of the wrong length.
pub fn evaluate_inequalities(
    ctx: &ProblemContext<'_>, x: &EngineVec, c: &EngineVec,
) -> BridgeResult<()> {
    let constraints = ctx.inequality_constraints()?;
    let params = read_vec(x, ctx.parameter_count())?;
    let result = constraints(&params);
    if result.len() != c.len() {
        return Err(BridgeError::ResultLengthMismatch {
            kind: CallableKind::InequalityConstraints,
            expected: c.len(),
            found: result.len(),
        });
    }
    write_vec(c, &result.to_vec())
}

/// Evaluate the equality constraints at `x` into `c`.
///
/// # Errors
/// Mirrors [`evaluate_inequalities`] for the equality-constraints callable.
pub fn evaluate_equalities(
    ctx: &ProblemContext<'_>, x: &EngineVec, c: &EngineVec,
) -> BridgeResult<()> {
    let constraints = ctx.equality_constraints()?;
    let params = read_vec(x, ctx.parameter_count())?;
    let result = constraints(&params);
    if result.len() != c.len() {
        return Err(BridgeError::ResultLengthMismatch {
            kind: CallableKind::EqualityConstraints,
            expected: c.len(),
            found: result.len(),
        });
    }
    write_vec(c, &result.to_vec())
}
