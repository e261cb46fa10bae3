//! Storage layout and structural flags for dense real and complex matrices.
//!
//! This crate is the addressing core of a dense-matrix type: it turns a
//! logical `(row, col)` coordinate, a shape and a set of structural flags
//! into an offset into a flat buffer, and translates the transposed flag
//! into the calling convention of a CBLAS-style kernel library.
//!
//! # Core Types
//!
//! - [`MatrixFlags`]: Bitset of structural flags (transposed, symmetric, hermitian,
//!   upper/lower triangular, tridiagonal, tiny) with named predicates
//! - [`MatrixDescriptor`]: Logical shape plus flags, with an O(1) in-place transpose
//! - [`Order`]: Row-major / column-major storage order
//! - [`MatrixView`] / [`MatrixViewMut`]: Borrowed element access over an existing buffer
//!
//! # Offsets
//!
//! - [`index`]: Real offset, dispatched on the transposed flag
//! - [`complex_index`]: Real/imaginary offset pair for interleaved complex storage
//! - [`row_major_offset`], [`col_major_offset`]: The two underlying formulas
//!
//! # BLAS
//!
//! - [`blas_transpose_tag`]: Transposed flag → [`BlasTranspose`]
//! - [`MatrixDescriptor::blas_operand`]: Stored extents, leading dimension and tag
//!
//! # Example
//!
//! ```rust
//! use dense_layout::{MatrixDescriptor, MatrixView, BlasTranspose};
//!
//! let data: Vec<f64> = (0..12).map(|x| x as f64).collect();
//! let view = MatrixView::real(&data, 3, 4).unwrap();
//! assert_eq!(view.get(2, 3), 11.0);
//!
//! // Transpose (zero-copy)
//! let t = view.t();
//! assert_eq!((t.nrows(), t.ncols()), (4, 3));
//! assert_eq!(t.get(3, 2), 11.0);
//! assert_eq!(t.descriptor().blas_operand().trans, BlasTranspose::Trans);
//!
//! let mut desc = MatrixDescriptor::new(3, 4);
//! desc.transpose_in_place();
//! assert_eq!(desc.index(3, 2), 11);
//! ```
//!
//! # Features
//!
//! - `blas`: Conversions into the `cblas` crate's enums.

mod access;
mod blas;
mod descriptor;
mod flags;
pub mod layout;

// ============================================================================
// Flags and descriptors
// ============================================================================
pub use descriptor::{ElementKind, MatrixDescriptor};
pub use flags::MatrixFlags;

// ============================================================================
// Offset computation
// ============================================================================
pub use layout::{
    col_major_offset, complex_index, index, row_major_offset, ComplexOffsets, Order,
};

// ============================================================================
// Element access
// ============================================================================
pub use access::{MatrixView, MatrixViewMut};

// ============================================================================
// BLAS
// ============================================================================
pub use blas::{blas_transpose_tag, BlasOperand, BlasTranspose};

#[cfg(feature = "blas")]
pub use blas::cblas_layout;

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the checked layout operations.
///
/// The unchecked offset functions never fail; out-of-range input there is a
/// caller bug.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Coordinate lies outside the logical shape.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Buffer holds fewer slots than the shape requires.
    #[error("storage too small: need {required} slots, have {actual}")]
    StorageTooSmall { required: usize, actual: usize },

    /// `rows * cols` (times slots per element) does not fit in `usize`.
    #[error("shape {rows}x{cols} overflows usize")]
    ShapeOverflow { rows: usize, cols: usize },

    /// Real accessor used on a complex view, or the reverse.
    #[error("element kind mismatch: view holds {actual:?}, accessor expects {expected:?}")]
    KindMismatch {
        expected: ElementKind,
        actual: ElementKind,
    },
}

/// Result type for checked layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
