//! bridge::marshal — copy values between engine buffers and host vectors.
//!
//! Purpose
//! -------
//! Provide the bidirectional conversion layer every adapter composes with:
//! reading an engine vector into a freshly allocated host vector, writing a
//! host vector back into an engine buffer, and writing a host matrix into an
//! engine matrix cell by cell followed by exactly one assembly pair.
//!
//! Key behaviors
//! -------------
//! - Acquisition and release are paired on every path: access guards are
//!   dropped on both success and error returns.
//! - Lengths are always threaded explicitly by the caller from the dimension
//!   contractually associated with the buffer; they are never inferred from
//!   buffer contents. A buffer whose length disagrees with the contractual
//!   one aborts the operation.
//! - Copies are element-wise `f64` moves with no conversion, so round trips
//!   are bit-for-bit.
use crate::bridge::errors::{BridgeError, BridgeResult};
use crate::bridge::types::{HessianMatrix, Params};
use crate::engine::buffer::EngineVec;
use crate::engine::matrix::EngineMat;

/// Read `len` elements out of an engine vector into a fresh host vector.
///
/// The buffer is acquired for the duration of the copy and released before
/// returning, on every path.
///
/// # Errors
/// - [`BridgeError::BufferLocked`] if the buffer is already acquired.
/// - [`BridgeError::BufferSizeMismatch`] if the buffer's length is not
///   exactly `len`.
pub fn read_vec(buffer: &EngineVec, len: usize) -> BridgeResult<Params> {
    let array = buffer.array()?;
    if array.len() != len {
        return Err(BridgeError::BufferSizeMismatch { expected: len, found: array.len() });
    }
    Ok(Params::from_iter(array.iter().copied()))
}

/// Write a host vector into an engine buffer.
///
/// The caller has already validated `values.len()` against the contractual
/// dimension for this buffer; here the engine buffer itself must match.
///
/// # Errors
/// - [`BridgeError::BufferLocked`] if the buffer is already acquired.
/// - [`BridgeError::BufferSizeMismatch`] if the buffer's length differs from
///   `values.len()`.
pub fn write_vec(buffer: &EngineVec, values: &[f64]) -> BridgeResult<()> {
    let mut array = buffer.array_mut()?;
    if array.len() != values.len() {
        return Err(BridgeError::BufferSizeMismatch {
            expected: values.len(),
            found: array.len(),
        });
    }
    array.copy_from_slice(values);
    Ok(())
}

/// Write a host matrix into an engine matrix.
///
/// Every cell is set individually by `(row, col)`, then the matrix is
/// finalized with exactly one `assembly_begin` / `assembly_end` pair after
/// all cell writes. Any engine-reported failure aborts immediately and the
/// assembly pair is not attempted on a partial write.
///
/// # Errors
/// - [`BridgeError::MatrixSizeMismatch`] if the engine matrix is not
///   `rows × cols`.
/// - Any converted engine code from `set_value` or the assembly calls.
pub fn write_mat(
    matrix: &EngineMat, values: &HessianMatrix, rows: usize, cols: usize,
) -> BridgeResult<()> {
    if matrix.dims() != (rows, cols) {
        return Err(BridgeError::MatrixSizeMismatch {
            expected: (rows, cols),
            found: matrix.dims(),
        });
    }
    for row in 0..rows {
        for col in 0..cols {
            matrix.set_value(row, col, values[(row, col)])?;
        }
    }
    matrix.assembly_begin()?;
    matrix.assembly_end()?;
    Ok(())
}

/// Driver-facing read of a result vector after the solve returns.
///
/// Identical contract to [`read_vec`]; exposed under the name the driver
/// uses to extract the final parameter and residual vectors.
///
/// # Errors
/// See [`read_vec`].
pub fn read_result_vector(buffer: &EngineVec, len: usize) -> BridgeResult<Params> {
    read_vec(buffer, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // A write followed by a read reproduces the original values bit for
    // bit, including subnormals and negative zero.
    //
    // Given
    // -----
    // - Values chosen to expose any precision loss or normalization.
    //
    // Expect
    // ------
    // - Identical bit patterns after the round trip.
    fn vec_round_trip_is_bit_for_bit() {
        // Arrange
        let values = [1.0, -0.0, 5e-324, 1.000000000000000222, -3.5e300];
        let buffer = EngineVec::new(values.len());

        // Act
        write_vec(&buffer, &values).expect("write should succeed");
        let back = read_vec(&buffer, values.len()).expect("read should succeed");

        // Assert
        for (original, copied) in values.iter().zip(back.iter()) {
            assert_eq!(original.to_bits(), copied.to_bits());
        }
    }

    #[test]
    // Purpose
    // -------
    // The contractual length wins over the buffer: a disagreement aborts
    // instead of truncating or padding.
    fn length_disagreement_aborts() {
        let buffer = EngineVec::new(3);

        assert_eq!(
            read_vec(&buffer, 2).err(),
            Some(BridgeError::BufferSizeMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            write_vec(&buffer, &[1.0, 2.0]).err(),
            Some(BridgeError::BufferSizeMismatch { expected: 2, found: 3 })
        );
    }

    #[test]
    // Purpose
    // -------
    // A failed read releases the buffer: the acquisition does not leak on
    // the error path.
    fn failed_read_releases_the_buffer() {
        let buffer = EngineVec::new(3);

        let _ = read_vec(&buffer, 5);

        assert!(buffer.array().is_ok(), "buffer should be released after a failed read");
    }

    #[test]
    // Purpose
    // -------
    // A locked buffer surfaces as an engine-call failure rather than a
    // panic or a block.
    fn locked_buffer_reports_engine_failure() {
        let buffer = EngineVec::new(2);
        let _held = buffer.array().expect("acquire should succeed");

        assert_eq!(
            read_vec(&buffer, 2).err(),
            Some(BridgeError::BufferLocked { object: "engine vector" })
        );
    }

    #[test]
    // Purpose
    // -------
    // write_mat sets every cell and finalizes with one assembly pair, after
    // which the engine matrix is readable and matches the host matrix.
    fn write_mat_sets_cells_and_assembles_once() {
        // Arrange
        let matrix = EngineMat::new(2, 2);
        let values = array![[1.0, 2.0], [3.0, 4.0]];

        // Act
        write_mat(&matrix, &values, 2, 2).expect("write should succeed");

        // Assert
        let assembled = matrix.values().expect("matrix should be assembled after write_mat");
        assert_eq!(*assembled, values);
    }

    #[test]
    fn write_mat_rejects_shape_disagreement() {
        let matrix = EngineMat::new(2, 3);
        let values = array![[1.0, 2.0], [3.0, 4.0]];

        let err = write_mat(&matrix, &values, 2, 2).err();

        assert_eq!(
            err,
            Some(BridgeError::MatrixSizeMismatch { expected: (2, 2), found: (2, 3) })
        );
    }
}
