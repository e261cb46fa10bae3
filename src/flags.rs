//! Structural flags attached to a dense matrix.
//!
//! A [`MatrixFlags`] value is a plain bitset: any combination of bits is
//! valid, including combinations that make no mathematical sense
//! (e.g. symmetric + upper + lower triangular). Interpreting the set is
//! left to the caller; the predicates here only report what is stored.
//!
//! ```text
//!   bit  | constant          | meaning
//! -------|-------------------|-------------------------------------------
//!   0x01 | TRANSPOSED        | logical rows/cols swapped vs. storage
//!   0x02 | SYMMETRIC         | A == A^T
//!   0x04 | HERMITIAN         | A == A^H
//!   0x08 | UPPER_TRIANGULAR  | zero below the diagonal
//!   0x10 | LOWER_TRIANGULAR  | zero above the diagonal
//!   0x20 | TRIDIAGONAL       | non-zero only on three central diagonals
//!   0x40 | TINY              | small enough for unblocked kernels
//! ```

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign};

/// Bitset of structural matrix flags.
///
/// ```rust
/// use dense_layout::MatrixFlags;
///
/// let mut flags = MatrixFlags::SYMMETRIC | MatrixFlags::TINY;
/// assert!(flags.is_symmetric() && flags.is_tiny());
/// assert!(!flags.is_general());
///
/// flags.toggle(MatrixFlags::TRANSPOSED);
/// assert!(flags.is_transposed());
///
/// // Four of the five diagonal bits are not enough.
/// let almost = MatrixFlags::DIAGONAL - MatrixFlags::TRIDIAGONAL;
/// assert!(!almost.is_diagonal());
/// assert!(MatrixFlags::DIAGONAL.is_diagonal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatrixFlags {
    bits: u32,
}

impl MatrixFlags {
    /// Logical rows/cols are swapped relative to the physical storage order.
    pub const TRANSPOSED: Self = Self { bits: 0x01 };
    /// `A == A^T`.
    pub const SYMMETRIC: Self = Self { bits: 0x02 };
    /// `A == A^H`.
    pub const HERMITIAN: Self = Self { bits: 0x04 };
    /// All entries below the diagonal are zero.
    pub const UPPER_TRIANGULAR: Self = Self { bits: 0x08 };
    /// All entries above the diagonal are zero.
    pub const LOWER_TRIANGULAR: Self = Self { bits: 0x10 };
    /// Non-zero only on the main diagonal and its two neighbours.
    pub const TRIDIAGONAL: Self = Self { bits: 0x20 };
    /// Small enough for unblocked kernels.
    pub const TINY: Self = Self { bits: 0x40 };

    /// Either triangle. Used with [`intersects`](Self::intersects), not
    /// [`contains`](Self::contains).
    pub const TRIANGULAR: Self = Self {
        bits: Self::UPPER_TRIANGULAR.bits | Self::LOWER_TRIANGULAR.bits,
    };

    /// Composite mask for the diagonal check.
    ///
    /// A matrix is only considered diagonal when *every* one of these bits
    /// is present; see [`is_diagonal`](Self::is_diagonal).
    pub const DIAGONAL: Self = Self {
        bits: Self::SYMMETRIC.bits
            | Self::HERMITIAN.bits
            | Self::LOWER_TRIANGULAR.bits
            | Self::UPPER_TRIANGULAR.bits
            | Self::TRIDIAGONAL.bits,
    };

    const NAMED: [(Self, &'static str); 7] = [
        (Self::TRANSPOSED, "TRANSPOSED"),
        (Self::SYMMETRIC, "SYMMETRIC"),
        (Self::HERMITIAN, "HERMITIAN"),
        (Self::UPPER_TRIANGULAR, "UPPER_TRIANGULAR"),
        (Self::LOWER_TRIANGULAR, "LOWER_TRIANGULAR"),
        (Self::TRIDIAGONAL, "TRIDIAGONAL"),
        (Self::TINY, "TINY"),
    ];

    /// The empty set (a general matrix).
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Every named flag.
    #[inline]
    pub const fn all() -> Self {
        Self {
            bits: Self::DIAGONAL.bits | Self::TRANSPOSED.bits | Self::TINY.bits,
        }
    }

    /// Build from a raw flag word, keeping unknown bits.
    #[inline]
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self { bits }
    }

    /// Build from a raw flag word, dropping bits with no named flag.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self {
            bits: bits & Self::all().bits,
        }
    }

    /// The raw flag word.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// True when no bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// True when every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// True when at least one bit of `other` is set in `self`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Set every bit of `other`.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.bits |= other.bits;
    }

    /// Clear every bit of `other`.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.bits &= !other.bits;
    }

    /// Flip every bit of `other`.
    #[inline]
    pub fn toggle(&mut self, other: Self) {
        self.bits ^= other.bits;
    }

    /// Insert or remove `other` depending on `value`.
    #[inline]
    pub fn set(&mut self, other: Self, value: bool) {
        if value {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }

    // ------------------------------------------------------------------
    // Structural predicates
    // ------------------------------------------------------------------

    /// No flag at all, including bits without a name.
    #[inline]
    pub const fn is_general(self) -> bool {
        self.bits == 0
    }

    /// [`TINY`](Self::TINY) is set.
    #[inline]
    pub const fn is_tiny(self) -> bool {
        self.intersects(Self::TINY)
    }

    /// [`SYMMETRIC`](Self::SYMMETRIC) is set.
    #[inline]
    pub const fn is_symmetric(self) -> bool {
        self.intersects(Self::SYMMETRIC)
    }

    /// [`HERMITIAN`](Self::HERMITIAN) is set.
    #[inline]
    pub const fn is_hermitian(self) -> bool {
        self.intersects(Self::HERMITIAN)
    }

    /// [`UPPER_TRIANGULAR`](Self::UPPER_TRIANGULAR) is set, regardless of the lower bit.
    #[inline]
    pub const fn is_upper_triangular(self) -> bool {
        self.intersects(Self::UPPER_TRIANGULAR)
    }

    /// [`LOWER_TRIANGULAR`](Self::LOWER_TRIANGULAR) is set, regardless of the upper bit.
    #[inline]
    pub const fn is_lower_triangular(self) -> bool {
        self.intersects(Self::LOWER_TRIANGULAR)
    }

    /// Upper *or* lower triangular.
    #[inline]
    pub const fn is_triangular(self) -> bool {
        self.intersects(Self::TRIANGULAR)
    }

    /// [`TRIDIAGONAL`](Self::TRIDIAGONAL) is set.
    #[inline]
    pub const fn is_tridiagonal(self) -> bool {
        self.intersects(Self::TRIDIAGONAL)
    }

    /// Composite check: symmetric, hermitian, both triangles and
    /// tridiagonal must all be set at once. One missing bit is enough to
    /// make this false.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.contains(Self::DIAGONAL)
    }

    /// [`TRANSPOSED`](Self::TRANSPOSED) is set. Selects column-major addressing.
    #[inline]
    pub const fn is_transposed(self) -> bool {
        self.intersects(Self::TRANSPOSED)
    }
}

impl From<u32> for MatrixFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl From<MatrixFlags> for u32 {
    fn from(flags: MatrixFlags) -> Self {
        flags.bits
    }
}

impl BitOr for MatrixFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for MatrixFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for MatrixFlags {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for MatrixFlags {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitXor for MatrixFlags {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits ^ rhs.bits,
        }
    }
}

impl BitXorAssign for MatrixFlags {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}

impl Sub for MatrixFlags {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & !rhs.bits,
        }
    }
}

impl SubAssign for MatrixFlags {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.bits &= !rhs.bits;
    }
}

impl Not for MatrixFlags {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self { bits: !self.bits }
    }
}

impl fmt::Display for MatrixFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_general() {
            return f.write_str("GENERAL");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        let unknown = self.bits & !Self::all().bits;
        if unknown != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{unknown:#x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: [MatrixFlags; 5] = [
        MatrixFlags::SYMMETRIC,
        MatrixFlags::HERMITIAN,
        MatrixFlags::LOWER_TRIANGULAR,
        MatrixFlags::UPPER_TRIANGULAR,
        MatrixFlags::TRIDIAGONAL,
    ];

    #[test]
    fn test_raw_bit_values() {
        assert_eq!(MatrixFlags::TRANSPOSED.bits(), 0x01);
        assert_eq!(MatrixFlags::SYMMETRIC.bits(), 0x02);
        assert_eq!(MatrixFlags::HERMITIAN.bits(), 0x04);
        assert_eq!(MatrixFlags::UPPER_TRIANGULAR.bits(), 0x08);
        assert_eq!(MatrixFlags::LOWER_TRIANGULAR.bits(), 0x10);
        assert_eq!(MatrixFlags::TRIDIAGONAL.bits(), 0x20);
        assert_eq!(MatrixFlags::TINY.bits(), 0x40);
        assert_eq!(MatrixFlags::TRIANGULAR.bits(), 0x18);
        assert_eq!(MatrixFlags::DIAGONAL.bits(), 0x3e);
        assert_eq!(MatrixFlags::all().bits(), 0x7f);
    }

    #[test]
    fn test_is_general() {
        assert!(MatrixFlags::empty().is_general());
        assert!(MatrixFlags::from_bits_retain(0).is_general());
        assert!(!MatrixFlags::SYMMETRIC.is_general());
        // Unnamed bits still make the matrix non-general.
        assert!(!MatrixFlags::from_bits_retain(0x100).is_general());
    }

    #[test]
    fn test_independent_predicates() {
        let f = MatrixFlags::SYMMETRIC | MatrixFlags::TINY;
        assert!(f.is_symmetric());
        assert!(f.is_tiny());
        assert!(!f.is_hermitian());
        assert!(!f.is_transposed());
        assert!(!f.is_triangular());
        assert!(!f.is_tridiagonal());
    }

    #[test]
    fn test_is_triangular_either_side() {
        assert!(MatrixFlags::UPPER_TRIANGULAR.is_triangular());
        assert!(MatrixFlags::LOWER_TRIANGULAR.is_triangular());
        assert!(MatrixFlags::TRIANGULAR.is_triangular());
        assert!(!MatrixFlags::TRIDIAGONAL.is_triangular());
        assert!(MatrixFlags::UPPER_TRIANGULAR.is_upper_triangular());
        assert!(!MatrixFlags::UPPER_TRIANGULAR.is_lower_triangular());
    }

    #[test]
    fn test_is_diagonal_requires_all_five() {
        assert!(MatrixFlags::DIAGONAL.is_diagonal());
        assert!((MatrixFlags::DIAGONAL | MatrixFlags::TINY).is_diagonal());

        for missing in FIVE {
            let f = MatrixFlags::DIAGONAL - missing;
            assert!(!f.is_diagonal(), "{f} must not be diagonal");
        }

        // Any single one of the five is never enough.
        for only in FIVE {
            assert!(!only.is_diagonal());
        }

        let no_tridiagonal = MatrixFlags::SYMMETRIC
            | MatrixFlags::HERMITIAN
            | MatrixFlags::LOWER_TRIANGULAR
            | MatrixFlags::UPPER_TRIANGULAR;
        assert!(!no_tridiagonal.is_diagonal());
    }

    #[test]
    fn test_nonsense_combinations_accepted() {
        let f = MatrixFlags::SYMMETRIC
            | MatrixFlags::UPPER_TRIANGULAR
            | MatrixFlags::LOWER_TRIANGULAR;
        assert!(f.is_symmetric());
        assert!(f.is_upper_triangular());
        assert!(f.is_lower_triangular());
        assert!(!f.is_diagonal());
    }

    #[test]
    fn test_set_operations() {
        let mut f = MatrixFlags::empty();
        f.insert(MatrixFlags::HERMITIAN);
        f.toggle(MatrixFlags::TRANSPOSED);
        assert!(f.is_hermitian() && f.is_transposed());
        f.toggle(MatrixFlags::TRANSPOSED);
        assert!(!f.is_transposed());
        f.set(MatrixFlags::TINY, true);
        assert!(f.is_tiny());
        f.set(MatrixFlags::TINY, false);
        f.remove(MatrixFlags::HERMITIAN);
        assert!(f.is_empty());

        let g = MatrixFlags::all() & !MatrixFlags::TRANSPOSED;
        assert!(!g.is_transposed());
        assert!(g.is_diagonal());
        assert_eq!(g ^ MatrixFlags::TRANSPOSED, MatrixFlags::all());
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(MatrixFlags::from_bits_truncate(0xff).bits(), 0x7f);
        assert_eq!(MatrixFlags::from_bits_retain(0xff).bits(), 0xff);
        assert_eq!(u32::from(MatrixFlags::from(0x22u32)), 0x22);
    }

    #[test]
    fn test_display() {
        assert_eq!(MatrixFlags::empty().to_string(), "GENERAL");
        assert_eq!(
            (MatrixFlags::TRANSPOSED | MatrixFlags::TINY).to_string(),
            "TRANSPOSED|TINY"
        );
        assert_eq!(MatrixFlags::from_bits_retain(0x102).to_string(), "SYMMETRIC|0x100");
    }
}
