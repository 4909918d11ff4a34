//! optbridge — host-callable bridge for a buffer-based optimization engine.
//!
//! Purpose
//! -------
//! Serve as the crate root for the bridge between a host environment's
//! numeric closures and an optimization engine that speaks opaque buffers,
//! explicit callbacks, and a process-wide option table. The host side hands
//! over plain closures; the engine side sees callback-table entries that
//! marshal buffers in, evaluate, and marshal results back out.
//!
//! Key behaviors
//! -------------
//! - Re-export the bridge layer (context, adapters, callback table,
//!   initialization, monitor) and the engine surface (buffers, matrices,
//!   lifecycle state, formatted output) as the public crate surface.
//! - Route engine-formatted output through an installable host console so a
//!   driver can redirect standard output and error into its own channels.
//!
//! Invariants & assumptions
//! ------------------------
//! - The engine's solver algorithms live outside this crate; only its
//!   calling surface is modeled here, and the bridge is agnostic to which
//!   algorithm drives the callbacks.
//! - One solve is in flight at a time; the process-wide engine state and
//!   output hook are not designed for concurrent solves.
//!
//! Conventions
//! -----------
//! - Host-side vectors and matrices are `ndarray` types (`Params`,
//!   `Outputs`, `HessianMatrix`); engine-side data stays in `EngineVec` /
//!   `EngineMat` buffers and is copied across, never aliased.
//! - Errors from engine calls are converted into [`bridge::BridgeError`] at
//!   the adapter boundary and propagated with `?`.

pub mod bridge;
pub mod engine;
pub mod host;

pub use bridge::{
    finalize_engine, initialize_engine, BridgeError, BridgeResult, CallbackTable, ConfigMapping,
    Method, ProblemContext,
};
pub use engine::{install_output_hook, EngineError, EngineMat, EngineResult, EngineVec};
pub use host::{HostConsole, StandardConsole};
