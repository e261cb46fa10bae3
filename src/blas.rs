//! Bridge between [`MatrixFlags`] and a CBLAS-style kernel library.
//!
//! The kernel library only ever sees a row-major buffer plus a transpose
//! tag. [`blas_transpose_tag`] is the single place where the transposed bit
//! is translated into that convention; with the `blas` feature enabled the
//! tag converts into [`cblas::Transpose`].

use crate::flags::MatrixFlags;

/// BLAS transpose operation flag.
///
/// Discriminants are the CBLAS_TRANSPOSE values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum BlasTranspose {
    /// No transpose operation
    #[default]
    NoTrans = 111,
    /// Transpose operation
    Trans = 112,
}

impl BlasTranspose {
    /// Convert to the Fortran BLAS character representation.
    pub fn to_char(self) -> char {
        match self {
            BlasTranspose::NoTrans => 'N',
            BlasTranspose::Trans => 'T',
        }
    }

    /// CBLAS_TRANSPOSE integer value.
    pub fn as_cblas(self) -> u32 {
        self as u32
    }
}

/// Map the transposed bit onto the kernel library's transpose tag.
///
/// Every other flag is ignored.
#[inline]
pub fn blas_transpose_tag(flags: MatrixFlags) -> BlasTranspose {
    if flags.is_transposed() {
        BlasTranspose::Trans
    } else {
        BlasTranspose::NoTrans
    }
}

/// Everything a CBLAS call needs to describe one operand.
///
/// `rows`/`cols` are the extents of the *stored* (row-major) matrix and
/// `ld` its leading dimension; `trans` tells the kernel whether to read it
/// transposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlasOperand {
    pub trans: BlasTranspose,
    pub rows: usize,
    pub cols: usize,
    pub ld: usize,
}

impl BlasOperand {
    /// Rows of the matrix the kernel sees after applying `trans`.
    pub fn op_rows(&self) -> usize {
        match self.trans {
            BlasTranspose::NoTrans => self.rows,
            BlasTranspose::Trans => self.cols,
        }
    }

    /// Columns of the matrix the kernel sees after applying `trans`.
    pub fn op_cols(&self) -> usize {
        match self.trans {
            BlasTranspose::NoTrans => self.cols,
            BlasTranspose::Trans => self.rows,
        }
    }
}

#[cfg(feature = "blas")]
mod cblas_impl {
    use super::BlasTranspose;

    impl From<BlasTranspose> for cblas::Transpose {
        fn from(trans: BlasTranspose) -> Self {
            match trans {
                BlasTranspose::NoTrans => cblas::Transpose::None,
                BlasTranspose::Trans => cblas::Transpose::Ordinary,
            }
        }
    }

    /// Storage order handed to CBLAS. Buffers are always laid out
    /// row-major; transposition travels in the transpose tag.
    pub fn cblas_layout() -> cblas::Layout {
        cblas::Layout::RowMajor
    }
}

#[cfg(feature = "blas")]
pub use cblas_impl::cblas_layout;
