//! engine — the optimization engine's surface as seen by the bridge.
//!
//! Purpose
//! -------
//! Collect everything the bridge compiles against on the engine side: raw
//! vector and matrix buffers with their exclusive access and assembly
//! protocols, the process-wide lifecycle and option table, the
//! formatted-output primitive with its host override, and the solver status
//! scalars handed back to the driver.
//!
//! Key behaviors
//! -------------
//! - Buffers (`buffer`, `matrix`) enforce the acquire → read/write → release
//!   window around every callback through RAII guards.
//! - Process state (`state`) implements first-time-initialize-or-reset
//!   semantics for the option table.
//! - Output (`output`) routes standard-stream diagnostics into the host
//!   environment and passes other viewers through unchanged.
//!
//! Conventions
//! -----------
//! - Every fallible call reports an [`errors::EngineError`] code instead of
//!   panicking; the bridge converts those codes into its own taxonomy.
//! - The solver algorithms themselves (Pounders, Nelder-Mead, LMVM, BLMVM)
//!   live behind this surface and are not part of this crate; tests drive
//!   the callback table the way the engine's solve loop would.

pub mod buffer;
pub mod errors;
pub mod matrix;
pub mod output;
pub mod state;
pub mod status;

pub use self::buffer::{EngineVec, VecArray, VecArrayMut};
pub use self::errors::{EngineError, EngineResult};
pub use self::matrix::{EngineMat, MatView};
pub use self::output::{install_output_hook, printf, StreamTarget, MAX_FORMATTED_LEN};
pub use self::status::SolutionStatus;
