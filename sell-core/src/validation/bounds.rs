//! Storage size and index bounds checks
//!
//! Pure arithmetic on layout metadata with overflow protection.

use crate::layout::total_slice_length;
use crate::traits::SellIndex;
use crate::SellError;

/// Number of backing entries a layout addresses
///
/// `slice_size * sum(slice_lengths)`, with overflow reported as
/// [`SellError::ArraySizeOverflow`].
pub fn required_storage(slice_lengths: &[usize], slice_size: usize) -> Result<usize, SellError> {
    let total = total_slice_length(slice_lengths).ok_or(SellError::ArraySizeOverflow)?;
    let count = total
        .checked_mul(slice_size)
        .ok_or(SellError::ArraySizeOverflow)?;

    // Keep downstream offset arithmetic far away from usize::MAX
    if count > isize::MAX as usize {
        return Err(SellError::ArraySizeOverflow);
    }

    Ok(count)
}

/// Validate the backing arrays against the addressed capacity
pub const fn validate_storage(
    values_len: usize,
    col_idxs_len: usize,
    required: usize,
) -> Result<(), SellError> {
    if values_len != col_idxs_len {
        return Err(SellError::StorageLengthMismatch);
    }

    if values_len < required {
        return Err(SellError::InsufficientStorage);
    }

    Ok(())
}

/// Convert a stored column index and check it against the column count
#[inline]
pub fn validate_column<I: SellIndex>(col: I, num_cols: usize) -> Result<usize, SellError> {
    match col.to_usize() {
        Some(col) if col < num_cols => Ok(col),
        _ => Err(SellError::ColumnOutOfBounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_storage() {
        assert_eq!(required_storage(&[2, 1], 2), Ok(6));
        assert_eq!(required_storage(&[], 32), Ok(0));
        assert_eq!(
            required_storage(&[usize::MAX / 2, usize::MAX / 2], 4),
            Err(SellError::ArraySizeOverflow)
        );
        assert_eq!(
            required_storage(&[usize::MAX, 1], 1),
            Err(SellError::ArraySizeOverflow)
        );
    }

    #[test]
    fn test_validate_storage() {
        assert_eq!(validate_storage(6, 6, 6), Ok(()));
        // Extra trailing capacity is allowed
        assert_eq!(validate_storage(8, 8, 6), Ok(()));

        assert_eq!(
            validate_storage(6, 5, 6),
            Err(SellError::StorageLengthMismatch)
        );
        assert_eq!(
            validate_storage(4, 4, 6),
            Err(SellError::InsufficientStorage)
        );
    }

    #[test]
    fn test_validate_column() {
        assert_eq!(validate_column(2i32, 3), Ok(2));
        assert_eq!(validate_column(3i32, 3), Err(SellError::ColumnOutOfBounds));
        assert_eq!(validate_column(-1i64, 3), Err(SellError::ColumnOutOfBounds));
    }
}
