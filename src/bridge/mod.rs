//! bridge — host callables into engine callbacks.
//!
//! Purpose
//! -------
//! Everything between a host driver and the optimization engine: the
//! per-solve problem context, buffer/matrix marshaling, the six evaluation
//! adapters, method selection, callback-table registration, idempotent
//! engine initialization, and the iteration monitor.
//!
//! A solve composes these layers in order: build a [`context::ProblemContext`]
//! from the host callables, pick a [`method::Method`], register a
//! [`callbacks::CallbackTable`] for it, initialize the engine through
//! [`init::initialize_engine`], let the engine drive the table, then pull
//! results back with [`marshal::read_result_vector`].
pub mod callbacks;
pub mod context;
pub mod errors;
pub mod evaluate;
pub mod init;
pub mod marshal;
pub mod method;
pub mod monitor;
pub mod types;

pub use callbacks::CallbackTable;
pub use context::{CallableKind, ProblemContext};
pub use errors::{BridgeError, BridgeResult};
pub use init::{finalize_engine, initialize_engine, ConfigMapping};
pub use marshal::read_result_vector;
pub use method::Method;
