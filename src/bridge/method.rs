//! bridge::method — solver method selection and pre-solve validation.
//!
//! The engine supplies the algorithms; this module only knows which adapter
//! set each method needs and rejects configurations the method cannot honor
//! before any engine resource is allocated.
use std::str::FromStr;

use crate::bridge::context::ProblemContext;
use crate::bridge::errors::{BridgeError, BridgeResult};

/// Solver methods the engine exposes.
///
/// Parsing is case-insensitive via `FromStr`; unknown names are
/// configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Derivative-free separable (sum-of-squares) least squares.
    Pounders,
    /// Derivative-free simplex search.
    NelderMead,
    /// Limited-memory variable metric (gradient-based).
    Lmvm,
    /// Bound-constrained limited-memory variable metric (gradient-based).
    Blmvm,
}

impl Method {
    /// Canonical engine name for this method.
    pub fn name(self) -> &'static str {
        match self {
            Method::Pounders => "pounders",
            Method::NelderMead => "nm",
            Method::Lmvm => "lmvm",
            Method::Blmvm => "blmvm",
        }
    }

    /// Whether the method consumes a separable (vector) objective.
    pub fn is_separable(self) -> bool {
        matches!(self, Method::Pounders)
    }

    /// Whether the method requires an analytic gradient.
    pub fn needs_gradient(self) -> bool {
        matches!(self, Method::Lmvm | Method::Blmvm)
    }

    /// Check that a problem context can drive this method.
    ///
    /// Runs before any engine buffer is created, so rejected configurations
    /// leak nothing.
    ///
    /// # Errors
    /// - [`BridgeError::SeparableOutputsUnsupported`] if the context has
    ///   more than one output and the method is not separable.
    /// - [`BridgeError::GradientRequired`] if the method is gradient-based
    ///   and the context carries no gradient callable.
    pub fn validate(self, ctx: &ProblemContext<'_>) -> BridgeResult<()> {
        if ctx.output_count() > 1 && !self.is_separable() {
            return Err(BridgeError::SeparableOutputsUnsupported {
                method: self.name(),
                outputs: ctx.output_count(),
            });
        }
        if self.needs_gradient() && !ctx.has_gradient() {
            return Err(BridgeError::GradientRequired { method: self.name() });
        }
        Ok(())
    }
}

impl FromStr for Method {
    type Err = BridgeError;

    /// Parse a method name (case-insensitive).
    ///
    /// Accepts `"pounders"`, `"nm"` / `"neldermead"` / `"nelder-mead"`,
    /// `"lmvm"`, and `"blmvm"`.
    ///
    /// # Errors
    /// Returns [`BridgeError::UnknownMethod`] for any other name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pounders" => Ok(Method::Pounders),
            "nm" | "neldermead" | "nelder-mead" => Ok(Method::NelderMead),
            "lmvm" => Ok(Method::Lmvm),
            "blmvm" => Ok(Method::Blmvm),
            _ => Err(BridgeError::UnknownMethod {
                name: s.to_string(),
                reason: "Valid methods are 'pounders', 'nm', 'lmvm', or 'blmvm'.",
            }),
        }
    }
}
