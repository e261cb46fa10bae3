//! Physical offset computation for dense matrices.
//!
//! Storage is row-major by default:
//!
//! ```text
//! storage = [row 0][row 1][row 2] ...
//! m[2, 3] = storage[2 * ncols + 3]
//! ```
//!
//! Transposing a matrix swaps its logical rows and columns but leaves the
//! buffer alone; the same bytes are then read column-major relative to the
//! swapped shape. Because the new row count is the old column count,
//!
//! ```text
//! m^T[3, 2] = storage[2 * nrows + 3]     (nrows of m^T == ncols of m)
//! ```
//!
//! lands on the same slot as `m[2, 3]`.
//!
//! Complex matrices interleave each element as `[re, im]`. The offsets used
//! here are the historical ones of this layout scheme:
//!
//! ```text
//! row-major  re = row * ncols * 2 + col       im = re + 1
//! col-major  re = col * nrows * 2 + row       im = col * (nrows * 2) + row + 1
//! ```
//!
//! None of the functions here check bounds outside of debug builds.

use crate::flags::MatrixFlags;

/// Physical storage order of a matrix buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Rows are contiguous (C-style). The default layout.
    #[default]
    RowMajor,
    /// Columns are contiguous (Fortran-style). What a row-major buffer
    /// looks like after a transpose.
    ColMajor,
}

impl Order {
    /// Storage order implied by the transposed bit.
    #[inline(always)]
    pub const fn from_flags(flags: MatrixFlags) -> Self {
        if flags.is_transposed() {
            Order::ColMajor
        } else {
            Order::RowMajor
        }
    }

    /// Leading dimension (stride between consecutive rows or columns).
    #[inline(always)]
    pub const fn leading_dimension(self, num_rows: usize, num_cols: usize) -> usize {
        match self {
            Order::RowMajor => num_cols,
            Order::ColMajor => num_rows,
        }
    }

    /// Offset of a real element.
    #[inline(always)]
    pub fn offset(self, num_rows: usize, num_cols: usize, row: usize, col: usize) -> usize {
        match self {
            Order::RowMajor => row_major_offset(num_rows, num_cols, row, col),
            Order::ColMajor => col_major_offset(num_rows, num_cols, row, col),
        }
    }

    /// Real and imaginary offsets of a complex element.
    #[inline(always)]
    pub fn complex_offsets(
        self,
        num_rows: usize,
        num_cols: usize,
        row: usize,
        col: usize,
    ) -> ComplexOffsets {
        match self {
            Order::RowMajor => ComplexOffsets {
                re: row_major_re_offset(num_rows, num_cols, row, col),
                im: row_major_im_offset(num_rows, num_cols, row, col),
            },
            Order::ColMajor => ComplexOffsets {
                re: col_major_re_offset(num_rows, num_cols, row, col),
                im: col_major_im_offset(num_rows, num_cols, row, col),
            },
        }
    }

    /// Split a two-component key into `(row, col)`.
    ///
    /// Row-major keys are written `[row, col]`, column-major keys
    /// `[col, row]`.
    #[inline]
    pub const fn key_indices(self, key: [usize; 2]) -> (usize, usize) {
        match self {
            Order::RowMajor => (key[0], key[1]),
            Order::ColMajor => (key[1], key[0]),
        }
    }
}

/// Pair of buffer offsets for one complex element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplexOffsets {
    /// Slot holding the real part.
    pub re: usize,
    /// Slot holding the imaginary part.
    pub im: usize,
}

// ============================================================================
// Real offsets
// ============================================================================

#[inline(always)]
fn debug_check(num_rows: usize, num_cols: usize, row: usize, col: usize) {
    debug_assert!(
        row < num_rows && col < num_cols,
        "index ({row}, {col}) out of range for {num_rows}x{num_cols} matrix"
    );
}

/// `row * num_cols + col`
#[inline(always)]
pub fn row_major_offset(num_rows: usize, num_cols: usize, row: usize, col: usize) -> usize {
    debug_check(num_rows, num_cols, row, col);
    row * num_cols + col
}

/// `col * num_rows + row`
#[inline(always)]
pub fn col_major_offset(num_rows: usize, num_cols: usize, row: usize, col: usize) -> usize {
    debug_check(num_rows, num_cols, row, col);
    col * num_rows + row
}

/// Offset of a real element, column-major when `flags` is transposed.
#[inline(always)]
pub fn index(flags: MatrixFlags, num_rows: usize, num_cols: usize, row: usize, col: usize) -> usize {
    Order::from_flags(flags).offset(num_rows, num_cols, row, col)
}

// ============================================================================
// Complex offsets
// ============================================================================

#[inline(always)]
pub fn row_major_re_offset(num_rows: usize, num_cols: usize, row: usize, col: usize) -> usize {
    debug_check(num_rows, num_cols, row, col);
    row * num_cols * 2 + col
}

#[inline(always)]
pub fn row_major_im_offset(num_rows: usize, num_cols: usize, row: usize, col: usize) -> usize {
    debug_check(num_rows, num_cols, row, col);
    row * num_cols * 2 + col + 1
}

#[inline(always)]
pub fn col_major_re_offset(num_rows: usize, num_cols: usize, row: usize, col: usize) -> usize {
    debug_check(num_rows, num_cols, row, col);
    col * num_rows * 2 + row
}

#[inline(always)]
pub fn col_major_im_offset(num_rows: usize, num_cols: usize, row: usize, col: usize) -> usize {
    debug_check(num_rows, num_cols, row, col);
    col * (num_rows * 2) + row + 1
}

/// Real and imaginary offsets of a complex element, column-major when
/// `flags` is transposed.
#[inline(always)]
pub fn complex_index(
    flags: MatrixFlags,
    num_rows: usize,
    num_cols: usize,
    row: usize,
    col: usize,
) -> ComplexOffsets {
    Order::from_flags(flags).complex_offsets(num_rows, num_cols, row, col)
}
