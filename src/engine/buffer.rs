//! engine::buffer — engine-owned numeric vectors and their access protocol.
//!
//! Purpose
//! -------
//! Model the engine's contiguous f64 vector buffers and the exclusive
//! acquire/read-or-write/release window the engine enforces around every
//! callback. Access is granted through RAII guards so that release is paired
//! with acquisition on every code path, including early returns on error.
//!
//! Key behaviors
//! -------------
//! - `EngineVec::array` / `EngineVec::array_mut` acquire exclusive access and
//!   return a guard; dropping the guard is the release.
//! - Acquiring a buffer that is already held reports
//!   [`EngineError::BufferLocked`] rather than blocking or panicking.
//! - The length is fixed at creation and queryable without acquiring,
//!   mirroring an engine size query on an unlocked handle.
//!
//! Invariants & assumptions
//! ------------------------
//! - At most one access guard per buffer is live at any time; both read and
//!   write access are exclusive.
//! - Guards never outlive a single synchronous call; callers must not stash
//!   them across callback invocations.
use std::cell::{RefCell, RefMut};
use std::ops::{Deref, DerefMut};

use crate::engine::errors::{EngineError, EngineResult};

/// A fixed-length f64 vector owned by the engine.
///
/// The backing storage is only reachable through [`EngineVec::array`] and
/// [`EngineVec::array_mut`], which enforce the exclusive access window.
#[derive(Debug)]
pub struct EngineVec {
    len: usize,
    cells: RefCell<Vec<f64>>,
}

impl EngineVec {
    /// Create a zero-filled vector of the given length.
    pub fn new(len: usize) -> Self {
        Self { len, cells: RefCell::new(vec![0.0; len]) }
    }

    /// Create a vector initialized from a slice.
    pub fn from_slice(values: &[f64]) -> Self {
        Self { len: values.len(), cells: RefCell::new(values.to_vec()) }
    }

    /// Length of the buffer. Does not require acquisition.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the buffer has length zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Acquire exclusive read access.
    ///
    /// # Errors
    /// Returns [`EngineError::BufferLocked`] if the buffer is already
    /// acquired.
    pub fn array(&self) -> EngineResult<VecArray<'_>> {
        let guard = self
            .cells
            .try_borrow_mut()
            .map_err(|_| EngineError::BufferLocked { object: "engine vector" })?;
        Ok(VecArray { guard })
    }

    /// Acquire exclusive write access.
    ///
    /// # Errors
    /// Returns [`EngineError::BufferLocked`] if the buffer is already
    /// acquired.
    pub fn array_mut(&self) -> EngineResult<VecArrayMut<'_>> {
        let guard = self
            .cells
            .try_borrow_mut()
            .map_err(|_| EngineError::BufferLocked { object: "engine vector" })?;
        Ok(VecArrayMut { guard })
    }
}

/// Read guard over an acquired [`EngineVec`]. Dropping it releases the
/// buffer.
pub struct VecArray<'a> {
    guard: RefMut<'a, Vec<f64>>,
}

impl Deref for VecArray<'_> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.guard
    }
}

/// Write guard over an acquired [`EngineVec`]. Dropping it releases the
/// buffer.
pub struct VecArrayMut<'a> {
    guard: RefMut<'a, Vec<f64>>,
}

impl Deref for VecArrayMut<'_> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.guard
    }
}

impl DerefMut for VecArrayMut<'_> {
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.guard
    }
}
