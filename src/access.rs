//! Borrowed views pairing a flat buffer with a [`MatrixDescriptor`].
//!
//! Views do not own their data. Construction validates the buffer length
//! once; element access afterwards goes straight through the layout
//! arithmetic. The plain accessors panic (slice indexing) on out-of-range
//! coordinates, the `try_*` forms return [`LayoutError`] instead.
//!
//! # Complex slots overlap
//!
//! Complex views address element `(r, c)` with the offsets of
//! [`complex_index`](crate::complex_index): the real part sits at
//! `r * ncols * 2 + c` and the imaginary part one slot later. Neighbouring
//! columns are therefore one slot apart, not two, and the imaginary slot
//! of `(r, c)` is the real slot of `(r, c + 1)` (column-major likewise
//! along rows). Writing one element changes its neighbour's imaginary
//! part. This is not the `[re, im, re, im, ...]` layout of a
//! `[Complex<T>]` buffer, so such buffers cannot be viewed through
//! [`MatrixView::complex`] by reinterpreting them as scalars.

use num_complex::Complex;

use crate::descriptor::{ElementKind, MatrixDescriptor};
use crate::flags::MatrixFlags;
use crate::{LayoutError, Result};

/// Immutable matrix view over real or interleaved-complex storage.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    desc: MatrixDescriptor,
    kind: ElementKind,
}

/// Mutable matrix view over real or interleaved-complex storage.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    desc: MatrixDescriptor,
    kind: ElementKind,
}

impl<'a, T: Copy> MatrixView<'a, T> {
    /// Create a view, checking that `data` is long enough for `desc`.
    pub fn new(data: &'a [T], desc: MatrixDescriptor, kind: ElementKind) -> Result<Self> {
        desc.validate_storage(data.len(), kind)?;
        Ok(Self { data, desc, kind })
    }

    /// Real `rows x cols` row-major view.
    pub fn real(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, MatrixDescriptor::new(rows, cols), ElementKind::Real)
    }

    /// Complex `rows x cols` row-major view.
    ///
    /// Uses the overlapping slot layout described in the module docs, not
    /// the layout of a `[Complex<T>]` buffer.
    pub fn complex(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, MatrixDescriptor::new(rows, cols), ElementKind::Complex)
    }

    #[inline]
    pub fn descriptor(&self) -> &MatrixDescriptor {
        &self.desc
    }

    #[inline]
    pub fn flags(&self) -> MatrixFlags {
        self.desc.flags
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.desc.rows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.desc.cols
    }

    /// Matrix transpose (zero-copy).
    #[inline]
    pub fn t(self) -> Self {
        Self {
            data: self.data,
            desc: self.desc.transposed(),
            kind: self.kind,
        }
    }

    /// Real element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert_eq!(self.kind, ElementKind::Real);
        self.data[self.desc.index(row, col)]
    }

    /// Complex element at `(row, col)`.
    #[inline]
    pub fn get_complex(&self, row: usize, col: usize) -> Complex<T> {
        debug_assert_eq!(self.kind, ElementKind::Complex);
        let off = self.desc.complex_index(row, col);
        Complex::new(self.data[off.re], self.data[off.im])
    }

    fn expect_kind(&self, expected: ElementKind) -> Result<()> {
        check_kind(self.kind, expected)
    }

    /// Checked [`get`](Self::get): rejects complex views and out-of-range
    /// coordinates.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        self.expect_kind(ElementKind::Real)?;
        let off = self.desc.checked_index(row, col)?;
        slot(self.data, off)
    }

    /// Checked [`get_complex`](Self::get_complex): rejects real views and
    /// out-of-range coordinates.
    pub fn try_get_complex(&self, row: usize, col: usize) -> Result<Complex<T>> {
        self.expect_kind(ElementKind::Complex)?;
        let off = self.desc.checked_complex_index(row, col)?;
        Ok(Complex::new(slot(self.data, off.re)?, slot(self.data, off.im)?))
    }
}

impl<'a, T: Copy> MatrixViewMut<'a, T> {
    /// Create a mutable view, checking that `data` is long enough for `desc`.
    pub fn new(data: &'a mut [T], desc: MatrixDescriptor, kind: ElementKind) -> Result<Self> {
        desc.validate_storage(data.len(), kind)?;
        Ok(Self { data, desc, kind })
    }

    /// Real `rows x cols` row-major view.
    pub fn real(data: &'a mut [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, MatrixDescriptor::new(rows, cols), ElementKind::Real)
    }

    /// Complex `rows x cols` row-major view with overlapping slots; see the
    /// module docs.
    pub fn complex(data: &'a mut [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, MatrixDescriptor::new(rows, cols), ElementKind::Complex)
    }

    /// Reborrow as an immutable view.
    #[inline]
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &*self.data,
            desc: self.desc,
            kind: self.kind,
        }
    }

    #[inline]
    pub fn descriptor(&self) -> &MatrixDescriptor {
        &self.desc
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.desc.rows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.desc.cols
    }

    /// Transpose the view in place. The buffer is not touched.
    #[inline]
    pub fn transpose_in_place(&mut self) {
        self.desc.transpose_in_place();
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.as_view().get(row, col)
    }

    #[inline]
    pub fn get_complex(&self, row: usize, col: usize) -> Complex<T> {
        self.as_view().get_complex(row, col)
    }

    /// Write real element `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert_eq!(self.kind, ElementKind::Real);
        let off = self.desc.index(row, col);
        self.data[off] = value;
    }

    /// Write complex element `(row, col)`.
    ///
    /// The imaginary part lands in the slot that also holds the real part
    /// of the next element along the contiguous dimension, so this
    /// overwrites that neighbour's real part.
    #[inline]
    pub fn set_complex(&mut self, row: usize, col: usize, value: Complex<T>) {
        debug_assert_eq!(self.kind, ElementKind::Complex);
        let off = self.desc.complex_index(row, col);
        self.data[off.re] = value.re;
        self.data[off.im] = value.im;
    }

    /// Checked [`set`](Self::set): rejects complex views and out-of-range
    /// coordinates.
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_kind(self.kind, ElementKind::Real)?;
        let off = self.desc.checked_index(row, col)?;
        *slot_mut(self.data, off)? = value;
        Ok(())
    }

    /// Checked [`set_complex`](Self::set_complex). Shares its slots with
    /// the neighbouring element exactly like the unchecked form.
    pub fn try_set_complex(&mut self, row: usize, col: usize, value: Complex<T>) -> Result<()> {
        check_kind(self.kind, ElementKind::Complex)?;
        let off = self.desc.checked_complex_index(row, col)?;
        *slot_mut(self.data, off.re)? = value.re;
        *slot_mut(self.data, off.im)? = value.im;
        Ok(())
    }
}

fn check_kind(actual: ElementKind, expected: ElementKind) -> Result<()> {
    if actual == expected {
        return Ok(());
    }
    tracing::debug!(?actual, ?expected, "element kind mismatch");
    Err(LayoutError::KindMismatch { expected, actual })
}

fn slot<T: Copy>(data: &[T], off: usize) -> Result<T> {
    data.get(off).copied().ok_or(LayoutError::StorageTooSmall {
        required: off + 1,
        actual: data.len(),
    })
}

fn slot_mut<T>(data: &mut [T], off: usize) -> Result<&mut T> {
    let len = data.len();
    data.get_mut(off).ok_or(LayoutError::StorageTooSmall {
        required: off + 1,
        actual: len,
    })
}
