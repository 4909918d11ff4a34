/// Result alias for calls into the engine surface.
pub type EngineResult<T> = Result<T, EngineError>;

/// Non-success codes reported by the engine surface.
///
/// Every fallible engine call (buffer access, matrix assembly, option
/// handling, formatted output) reports one of these instead of panicking.
/// The bridge layer converts them into its own error taxonomy via
/// `From<EngineError>`; engine codes never cross the bridge boundary raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    // ---- Buffers ----
    /// A buffer was acquired while another access was still live.
    BufferLocked {
        object: &'static str,
    },

    /// A cell access landed outside the buffer or matrix bounds.
    IndexOutOfRange {
        object: &'static str,
        index: usize,
        len: usize,
    },

    // ---- Matrix assembly ----
    /// `assembly_begin` / `assembly_end` were called out of order.
    AssemblyOutOfOrder {
        reason: &'static str,
    },

    /// Matrix values were read before assembly completed.
    NotAssembled,

    // ---- Options / lifecycle ----
    /// An option token could not be parsed as a `-flag` name.
    OptionParse {
        token: String,
    },

    /// Full initialization was requested on an already-initialized engine.
    AlreadyInitialized,

    /// An option reset was requested before the engine was initialized.
    NotInitialized,

    // ---- Output ----
    /// The engine's formatted-output primitive failed to write.
    OutputFailed {
        text: String,
    },
}

impl std::error::Error for EngineError {}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::BufferLocked { object } => {
                write!(f, "{object} is already acquired by another access")
            }
            EngineError::IndexOutOfRange { object, index, len } => {
                write!(f, "Index {index} is out of range for {object} of length {len}")
            }
            EngineError::AssemblyOutOfOrder { reason } => {
                write!(f, "Matrix assembly out of order: {reason}")
            }
            EngineError::NotAssembled => {
                write!(f, "Matrix values read before assembly completed")
            }
            EngineError::OptionParse { token } => {
                write!(f, "Option token '{token}' is not a valid '-flag' name")
            }
            EngineError::AlreadyInitialized => {
                write!(f, "Engine is already initialized")
            }
            EngineError::NotInitialized => {
                write!(f, "Engine is not initialized")
            }
            EngineError::OutputFailed { text } => {
                write!(f, "Formatted output failed: {text}")
            }
        }
    }
}
