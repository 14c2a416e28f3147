//! Column index type constraints

use core::fmt::Debug;

use crate::types::IndexType;

/// Trait for integer types used as stored column indices
pub trait SellIndex: Copy + PartialEq + Debug + Send + Sync + bytemuck::Pod + 'static {
    /// Tag for this index type
    fn index_type() -> IndexType;

    /// Convert to `usize`, `None` for negative or oversized values
    fn to_usize(self) -> Option<usize>;

    /// Convert from `usize`, `None` when the value does not fit
    fn from_usize(value: usize) -> Option<Self>;

    /// Plain cast to `usize`
    ///
    /// Lossless for every index accepted by layout validation.
    fn as_usize(self) -> usize;
}

impl SellIndex for i32 {
    fn index_type() -> IndexType {
        IndexType::I32
    }

    #[inline]
    fn to_usize(self) -> Option<usize> {
        usize::try_from(self).ok()
    }

    #[inline]
    fn from_usize(value: usize) -> Option<Self> {
        i32::try_from(value).ok()
    }

    #[inline(always)]
    fn as_usize(self) -> usize {
        self as usize
    }
}

impl SellIndex for i64 {
    fn index_type() -> IndexType {
        IndexType::I64
    }

    #[inline]
    fn to_usize(self) -> Option<usize> {
        usize::try_from(self).ok()
    }

    #[inline]
    fn from_usize(value: usize) -> Option<Self> {
        i64::try_from(value).ok()
    }

    #[inline(always)]
    fn as_usize(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversions() {
        assert_eq!(7i32.to_usize(), Some(7));
        assert_eq!((-1i32).to_usize(), None);
        assert_eq!((-1i64).to_usize(), None);
        assert_eq!(i32::from_usize(usize::MAX), None);
        assert_eq!(i64::from_usize(42), Some(42));
        assert_eq!(5i64.as_usize(), 5);
        assert_eq!(i32::index_type(), IndexType::I32);
        assert_eq!(i64::index_type(), IndexType::I64);
    }
}
