//! Matrix descriptor: logical shape plus structural flags.
//!
//! The descriptor never owns storage. Transposing it is O(1): the shape is
//! swapped and the transposed bit toggled, the buffer is left untouched.

use crate::blas::{blas_transpose_tag, BlasOperand};
use crate::flags::MatrixFlags;
use crate::layout::{ComplexOffsets, Order};
use crate::{LayoutError, Result};

/// Kind of scalar a buffer stores per logical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// One slot per element.
    Real,
    /// Two slots per element, `[re, im]`.
    Complex,
}

impl ElementKind {
    /// Buffer slots occupied by one element.
    #[inline]
    pub const fn slots(self) -> usize {
        match self {
            ElementKind::Real => 1,
            ElementKind::Complex => 2,
        }
    }
}

/// Shape and flags of a dense matrix.
///
/// `rows` and `cols` are the logical extents as presented to callers,
/// i.e. already swapped when [`MatrixFlags::TRANSPOSED`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixDescriptor {
    pub rows: usize,
    pub cols: usize,
    pub flags: MatrixFlags,
}

impl MatrixDescriptor {
    /// General row-major `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_flags(rows, cols, MatrixFlags::empty())
    }

    pub fn with_flags(rows: usize, cols: usize, flags: MatrixFlags) -> Self {
        Self { rows, cols, flags }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Storage order of the buffer relative to the logical shape.
    #[inline]
    pub fn order(&self) -> Order {
        Order::from_flags(self.flags)
    }

    /// Extents of the stored (row-major) matrix.
    #[inline]
    pub fn physical_shape(&self) -> (usize, usize) {
        if self.flags.is_transposed() {
            (self.cols, self.rows)
        } else {
            (self.rows, self.cols)
        }
    }

    /// Swap rows and cols and toggle the transposed bit.
    ///
    /// Applying it twice restores the descriptor exactly.
    pub fn transpose_in_place(&mut self) {
        std::mem::swap(&mut self.rows, &mut self.cols);
        self.flags.toggle(MatrixFlags::TRANSPOSED);
        tracing::trace!(
            rows = self.rows,
            cols = self.cols,
            flags = %self.flags,
            "transposed matrix descriptor"
        );
    }

    /// By-value transpose.
    #[must_use]
    pub fn transposed(mut self) -> Self {
        self.transpose_in_place();
        self
    }

    /// Split a two-component key into `(row, col)` for this descriptor's
    /// storage order.
    #[inline]
    pub fn key_indices(&self, key: [usize; 2]) -> (usize, usize) {
        self.order().key_indices(key)
    }

    // ------------------------------------------------------------------
    // Offsets
    // ------------------------------------------------------------------

    /// Offset of real element `(row, col)`. Unchecked in release builds.
    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> usize {
        self.order().offset(self.rows, self.cols, row, col)
    }

    /// Offsets of complex element `(row, col)`. Unchecked in release builds.
    #[inline(always)]
    pub fn complex_index(&self, row: usize, col: usize) -> ComplexOffsets {
        self.order().complex_offsets(self.rows, self.cols, row, col)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < self.rows && col < self.cols {
            return Ok(());
        }
        tracing::debug!(row, col, rows = self.rows, cols = self.cols, "index out of bounds");
        Err(LayoutError::IndexOutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        self.check_bounds(row, col)?;
        Ok(self.index(row, col))
    }

    pub fn checked_complex_index(&self, row: usize, col: usize) -> Result<ComplexOffsets> {
        self.check_bounds(row, col)?;
        Ok(self.complex_index(row, col))
    }

    // ------------------------------------------------------------------
    // Storage sizing
    // ------------------------------------------------------------------

    /// Number of logical elements, `rows * cols`.
    pub fn element_count(&self) -> Result<usize> {
        self.rows
            .checked_mul(self.cols)
            .ok_or(LayoutError::ShapeOverflow {
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Minimum buffer length in scalar slots.
    pub fn required_len(&self, kind: ElementKind) -> Result<usize> {
        self.element_count()?
            .checked_mul(kind.slots())
            .ok_or(LayoutError::ShapeOverflow {
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Check that a buffer of `len` slots can back this matrix.
    pub fn validate_storage(&self, len: usize, kind: ElementKind) -> Result<()> {
        let required = self.required_len(kind)?;
        if len < required {
            tracing::debug!(required, actual = len, ?kind, "storage too small");
            return Err(LayoutError::StorageTooSmall {
                required,
                actual: len,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // BLAS
    // ------------------------------------------------------------------

    /// Operand description for a CBLAS call on a row-major buffer.
    pub fn blas_operand(&self) -> BlasOperand {
        let (rows, cols) = self.physical_shape();
        BlasOperand {
            trans: blas_transpose_tag(self.flags),
            rows,
            cols,
            ld: Order::RowMajor.leading_dimension(rows, cols),
        }
    }
}
