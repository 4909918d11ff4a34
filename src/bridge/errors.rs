use crate::bridge::context::CallableKind;
use crate::engine::errors::EngineError;

/// Crate-wide result alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// The bridge's error surface.
///
/// Three families: engine-call failures (a non-success code reported by the
/// engine surface, converted via `From<EngineError>`), contract violations
/// (an adapter invoked against a context that cannot honor it), and
/// configuration errors (rejected before any engine resource exists). The
/// bridge never recovers silently; every variant aborts the surrounding
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    // ---- Engine call failures ----
    /// A buffer was acquired while another access was live.
    BufferLocked {
        object: &'static str,
    },

    /// A buffer or matrix access landed out of bounds.
    BufferIndexOutOfRange {
        object: &'static str,
        index: usize,
        len: usize,
    },

    /// An engine buffer's length does not match the contractual dimension.
    BufferSizeMismatch {
        expected: usize,
        found: usize,
    },

    /// An engine matrix's dimensions do not match the contractual shape.
    MatrixSizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Matrix assembly failed or ran out of order.
    MatrixAssemblyFailed {
        reason: &'static str,
    },

    /// The engine rejected an option token.
    OptionParse {
        token: String,
    },

    /// Initialization/teardown was requested in the wrong lifecycle phase.
    EngineLifecycle {
        reason: &'static str,
    },

    /// The engine's formatted-output primitive failed.
    OutputFailed {
        text: String,
    },

    // ---- Contract violations ----
    /// An adapter was invoked for a callable that was never registered.
    CallableNotRegistered {
        kind: CallableKind,
    },

    /// A callable's result length does not match the expected dimension.
    ResultLengthMismatch {
        kind: CallableKind,
        expected: usize,
        found: usize,
    },

    /// A Hessian callable's result is not the expected square shape.
    HessianShapeMismatch {
        expected: usize,
        found: (usize, usize),
    },

    // ---- Configuration ----
    /// A problem dimension is outside its valid range.
    InvalidDimension {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// An unsupported solver method name was requested.
    UnknownMethod {
        name: String,
        reason: &'static str,
    },

    /// More than one output was requested for a non-separable method.
    SeparableOutputsUnsupported {
        method: &'static str,
        outputs: usize,
    },

    /// A gradient-based method was requested without a gradient callable.
    GradientRequired {
        method: &'static str,
    },
}

impl std::error::Error for BridgeError {}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Engine call failures ----
            BridgeError::BufferLocked { object } => {
                write!(f, "Engine call failed: {object} is already acquired")
            }
            BridgeError::BufferIndexOutOfRange { object, index, len } => {
                write!(
                    f,
                    "Engine call failed: index {index} out of range for {object} of length {len}"
                )
            }
            BridgeError::BufferSizeMismatch { expected, found } => {
                write!(f, "Engine buffer length {found} does not match expected length {expected}")
            }
            BridgeError::MatrixSizeMismatch { expected, found } => {
                write!(
                    f,
                    "Engine matrix dimensions {found:?} do not match expected {expected:?}"
                )
            }
            BridgeError::MatrixAssemblyFailed { reason } => {
                write!(f, "Matrix assembly failed: {reason}")
            }
            BridgeError::OptionParse { token } => {
                write!(f, "Engine rejected option token '{token}'")
            }
            BridgeError::EngineLifecycle { reason } => {
                write!(f, "Engine lifecycle violation: {reason}")
            }
            BridgeError::OutputFailed { text } => {
                write!(f, "Engine output failed: {text}")
            }

            // ---- Contract violations ----
            BridgeError::CallableNotRegistered { kind } => {
                write!(f, "No {kind} callable is registered on the problem context")
            }
            BridgeError::ResultLengthMismatch { kind, expected, found } => {
                write!(
                    f,
                    "{kind} callable returned {found} values, expected {expected}"
                )
            }
            BridgeError::HessianShapeMismatch { expected, found } => {
                write!(
                    f,
                    "Hessian callable returned a {:?} matrix, expected ({expected}, {expected})",
                    found
                )
            }

            // ---- Configuration ----
            BridgeError::InvalidDimension { name, value, reason } => {
                write!(f, "Invalid {name} {value}: {reason}")
            }
            BridgeError::UnknownMethod { name, reason } => {
                write!(f, "Unknown solver method '{name}': {reason}")
            }
            BridgeError::SeparableOutputsUnsupported { method, outputs } => {
                write!(
                    f,
                    "Method '{method}' is not separable and supports a single output, got {outputs}"
                )
            }
            BridgeError::GradientRequired { method } => {
                write!(f, "Method '{method}' is gradient-based but no gradient is registered")
            }
        }
    }
}

impl From<EngineError> for BridgeError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::BufferLocked { object } => BridgeError::BufferLocked { object },
            EngineError::IndexOutOfRange { object, index, len } => {
                BridgeError::BufferIndexOutOfRange { object, index, len }
            }
            EngineError::AssemblyOutOfOrder { reason } => {
                BridgeError::MatrixAssemblyFailed { reason }
            }
            EngineError::NotAssembled => BridgeError::MatrixAssemblyFailed {
                reason: "matrix values read before assembly completed",
            },
            EngineError::OptionParse { token } => BridgeError::OptionParse { token },
            EngineError::AlreadyInitialized => BridgeError::EngineLifecycle {
                reason: "engine is already initialized",
            },
            EngineError::NotInitialized => BridgeError::EngineLifecycle {
                reason: "engine is not initialized",
            },
            EngineError::OutputFailed { text } => BridgeError::OutputFailed { text },
        }
    }
}
