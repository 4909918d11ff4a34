//! engine::matrix — engine-owned dense matrices and the assembly protocol.
//!
//! Purpose
//! -------
//! Model the engine's dense matrix handles: values are written cell by cell
//! with [`EngineMat::set_value`], then the matrix must be finalized with one
//! `assembly_begin` / `assembly_end` pair before its values become readable.
//! Out-of-order assembly calls and reads of an unassembled matrix are
//! reported as non-success codes, matching the engine's own protocol.
//!
//! Invariants & assumptions
//! ------------------------
//! - A matrix cycles through `Editing → Flushing → Assembled`; `set_value`
//!   moves an assembled matrix back to `Editing`.
//! - Exactly one begin/end pair finalizes a round of cell writes; a second
//!   `assembly_begin` before `assembly_end` is out of order.
use std::cell::{Cell, Ref, RefCell};
use std::ops::Deref;

use ndarray::Array2;

use crate::engine::errors::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssemblyPhase {
    Editing,
    Flushing,
    Assembled,
}

/// A dense rows × cols f64 matrix owned by the engine.
#[derive(Debug)]
pub struct EngineMat {
    rows: usize,
    cols: usize,
    phase: Cell<AssemblyPhase>,
    cells: RefCell<Array2<f64>>,
}

impl EngineMat {
    /// Create a zero-filled, unassembled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            phase: Cell::new(AssemblyPhase::Editing),
            cells: RefCell::new(Array2::zeros((rows, cols))),
        }
    }

    /// Matrix dimensions as `(rows, cols)`. Does not require acquisition.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Write a single cell.
    ///
    /// Moves the matrix back into the editing phase; a new begin/end pair is
    /// required before values can be read again.
    ///
    /// # Errors
    /// - [`EngineError::IndexOutOfRange`] if `(row, col)` is out of bounds.
    /// - [`EngineError::AssemblyOutOfOrder`] if called mid-assembly.
    pub fn set_value(&self, row: usize, col: usize, value: f64) -> EngineResult<()> {
        if self.phase.get() == AssemblyPhase::Flushing {
            return Err(EngineError::AssemblyOutOfOrder {
                reason: "set_value called between assembly_begin and assembly_end",
            });
        }
        if row >= self.rows {
            return Err(EngineError::IndexOutOfRange {
                object: "engine matrix rows",
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(EngineError::IndexOutOfRange {
                object: "engine matrix cols",
                index: col,
                len: self.cols,
            });
        }
        self.cells.borrow_mut()[(row, col)] = value;
        self.phase.set(AssemblyPhase::Editing);
        Ok(())
    }

    /// Start finalizing the current round of cell writes.
    ///
    /// # Errors
    /// Returns [`EngineError::AssemblyOutOfOrder`] if an assembly is already
    /// in flight.
    pub fn assembly_begin(&self) -> EngineResult<()> {
        if self.phase.get() == AssemblyPhase::Flushing {
            return Err(EngineError::AssemblyOutOfOrder {
                reason: "assembly_begin called twice without assembly_end",
            });
        }
        self.phase.set(AssemblyPhase::Flushing);
        Ok(())
    }

    /// Complete finalization; the matrix becomes readable.
    ///
    /// # Errors
    /// Returns [`EngineError::AssemblyOutOfOrder`] if no `assembly_begin` is
    /// pending.
    pub fn assembly_end(&self) -> EngineResult<()> {
        if self.phase.get() != AssemblyPhase::Flushing {
            return Err(EngineError::AssemblyOutOfOrder {
                reason: "assembly_end called without a pending assembly_begin",
            });
        }
        self.phase.set(AssemblyPhase::Assembled);
        Ok(())
    }

    /// Read access to the assembled values.
    ///
    /// # Errors
    /// Returns [`EngineError::NotAssembled`] if the matrix has pending,
    /// unfinalized writes.
    pub fn values(&self) -> EngineResult<MatView<'_>> {
        if self.phase.get() != AssemblyPhase::Assembled {
            return Err(EngineError::NotAssembled);
        }
        Ok(MatView { guard: self.cells.borrow() })
    }
}

/// Read guard over an assembled [`EngineMat`].
pub struct MatView<'a> {
    guard: Ref<'a, Array2<f64>>,
}

impl Deref for MatView<'_> {
    type Target = Array2<f64>;

    fn deref(&self) -> &Array2<f64> {
        &self.guard
    }
}
