//! Whole-layout consistency check
//!
//! A layout that passes [`validate_layout`] can be walked by every kernel
//! through [`entry_offset`](crate::layout::entry_offset) without reading
//! outside the backing arrays or outside the dense operand's rows.

use crate::layout::{entry_offset, slice_count, SliceRows};
use crate::traits::SellIndex;
use crate::validation::bounds::{required_storage, validate_column, validate_storage};
use crate::SellError;

/// Borrowed view of the metadata and column indices of a layout
#[derive(Debug, Clone, Copy)]
pub struct LayoutParts<'a, I> {
    pub num_rows: usize,
    pub num_cols: usize,
    pub slice_size: usize,
    pub slice_lengths: &'a [usize],
    pub slice_sets: &'a [usize],
    pub values_len: usize,
    pub col_idxs: &'a [I],
}

/// Validate a Sliced ELL layout
///
/// Checks, in order: slice size, that the largest column index fits `I`,
/// slice metadata counts, the prefix-sum relation between slice sets and
/// lengths, backing array sizes, and every column index a kernel will
/// read. Padding rows past `num_rows`
/// are never read and are not checked.
pub fn validate_layout<I: SellIndex>(parts: &LayoutParts<'_, I>) -> Result<(), SellError> {
    if parts.slice_size == 0 {
        return Err(SellError::InvalidSliceSize);
    }

    if parts.num_cols > 0 && I::from_usize(parts.num_cols - 1).is_none() {
        return Err(SellError::IndexOverflow);
    }

    let slices = slice_count(parts.num_rows, parts.slice_size);
    if parts.slice_lengths.len() != slices || parts.slice_sets.len() != slices {
        return Err(SellError::SliceCountMismatch);
    }

    let mut expected_set = 0usize;
    for (&set, &len) in parts.slice_sets.iter().zip(parts.slice_lengths) {
        if set != expected_set {
            return Err(SellError::SliceSetMismatch);
        }
        expected_set = expected_set
            .checked_add(len)
            .ok_or(SellError::ArraySizeOverflow)?;
    }

    let required = required_storage(parts.slice_lengths, parts.slice_size)?;
    validate_storage(parts.values_len, parts.col_idxs.len(), required)?;

    for slice in 0..slices {
        let set = parts.slice_sets[slice];
        for (row, _) in SliceRows::new(slice, parts.slice_size, parts.num_rows) {
            for i in 0..parts.slice_lengths[slice] {
                let offset = entry_offset(row, set, i, parts.slice_size);
                validate_column(parts.col_idxs[offset], parts.num_cols)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x3, slice size 2:
    // [2 3 0]
    // [0 4 0]
    // [0 0 5]
    const LENGTHS: [usize; 2] = [2, 1];
    const SETS: [usize; 2] = [0, 2];
    const COLS: [i32; 6] = [0, 1, 1, 0, 2, 0];

    fn parts<'a>(cols: &'a [i32], lengths: &'a [usize], sets: &'a [usize]) -> LayoutParts<'a, i32> {
        LayoutParts {
            num_rows: 3,
            num_cols: 3,
            slice_size: 2,
            slice_lengths: lengths,
            slice_sets: sets,
            values_len: cols.len(),
            col_idxs: cols,
        }
    }

    #[test]
    fn test_valid_layout() {
        assert_eq!(validate_layout(&parts(&COLS, &LENGTHS, &SETS)), Ok(()));
    }

    #[test]
    fn test_padding_row_is_not_checked() {
        // offset 5 belongs to padding row 3 of slice 1
        let cols = [0, 1, 1, 0, 2, -7];
        assert_eq!(validate_layout(&parts(&cols, &LENGTHS, &SETS)), Ok(()));
    }

    #[test]
    fn test_rejects_zero_slice_size() {
        let mut p = parts(&COLS, &LENGTHS, &SETS);
        p.slice_size = 0;
        assert_eq!(validate_layout(&p), Err(SellError::InvalidSliceSize));
    }

    #[test]
    fn test_rejects_slice_count_mismatch() {
        assert_eq!(
            validate_layout(&parts(&COLS, &[2], &[0])),
            Err(SellError::SliceCountMismatch)
        );
        assert_eq!(
            validate_layout(&parts(&COLS, &LENGTHS, &[0])),
            Err(SellError::SliceCountMismatch)
        );
    }

    #[test]
    fn test_rejects_bad_prefix_sum() {
        assert_eq!(
            validate_layout(&parts(&COLS, &LENGTHS, &[0, 1])),
            Err(SellError::SliceSetMismatch)
        );
        assert_eq!(
            validate_layout(&parts(&COLS, &LENGTHS, &[1, 3])),
            Err(SellError::SliceSetMismatch)
        );
    }

    #[test]
    fn test_rejects_short_storage() {
        let cols = [0, 1, 1, 0];
        assert_eq!(
            validate_layout(&parts(&cols, &LENGTHS, &SETS)),
            Err(SellError::InsufficientStorage)
        );

        let mut p = parts(&COLS, &LENGTHS, &SETS);
        p.values_len = 5;
        assert_eq!(validate_layout(&p), Err(SellError::StorageLengthMismatch));
    }

    #[test]
    fn test_rejects_out_of_range_columns() {
        let cols = [0, 1, 1, 3, 2, 0];
        assert_eq!(
            validate_layout(&parts(&cols, &LENGTHS, &SETS)),
            Err(SellError::ColumnOutOfBounds)
        );

        let cols = [0, 1, -1, 0, 2, 0];
        assert_eq!(
            validate_layout(&parts(&cols, &LENGTHS, &SETS)),
            Err(SellError::ColumnOutOfBounds)
        );
    }

    #[test]
    fn test_rejects_columns_beyond_index_type() {
        let wide = LayoutParts::<'_, i32> {
            num_rows: 0,
            num_cols: i32::MAX as usize + 2,
            slice_size: 2,
            slice_lengths: &[],
            slice_sets: &[],
            values_len: 0,
            col_idxs: &[],
        };
        assert_eq!(validate_layout(&wide), Err(SellError::IndexOverflow));

        let widest = LayoutParts {
            num_cols: i32::MAX as usize + 1,
            ..wide
        };
        assert_eq!(validate_layout(&widest), Ok(()));
    }

    #[test]
    fn test_empty_matrix() {
        let p: LayoutParts<'_, i64> = LayoutParts {
            num_rows: 0,
            num_cols: 4,
            slice_size: 32,
            slice_lengths: &[],
            slice_sets: &[],
            values_len: 0,
            col_idxs: &[],
        };
        assert_eq!(validate_layout(&p), Ok(()));
    }
}
