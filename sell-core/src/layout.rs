//! Sliced ELL layout contract
//!
//! Rows are grouped into slices of a fixed size. Inside a slice every row
//! is padded to the slice length and entries are stored column-of-slice
//! major: all first entries of the slice's rows, then all second entries,
//! and so on. Every kernel addresses the backing arrays through
//! [`entry_offset`].

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Default number of rows per slice
pub const DEFAULT_SLICE_SIZE: usize = 32;

/// Flat backing offset of entry `entry` of row `row_in_slice` in a slice
/// starting at `slice_set`
///
/// `row_in_slice + (slice_set + entry) * slice_size`
#[inline(always)]
pub const fn entry_offset(
    row_in_slice: usize,
    slice_set: usize,
    entry: usize,
    slice_size: usize,
) -> usize {
    row_in_slice + (slice_set + entry) * slice_size
}

/// Number of slices needed to cover `num_rows` rows
#[inline]
pub const fn slice_count(num_rows: usize, slice_size: usize) -> usize {
    if slice_size == 0 {
        return 0;
    }
    num_rows.div_ceil(slice_size)
}

/// Compute slice sets (exclusive prefix sum) from slice lengths
///
/// The returned vector has the same length as `slice_lengths`.
#[cfg(feature = "alloc")]
pub fn slice_sets_from_lengths(slice_lengths: &[usize]) -> Vec<usize> {
    let mut sets = Vec::with_capacity(slice_lengths.len());
    let mut acc = 0usize;
    for &len in slice_lengths {
        sets.push(acc);
        acc += len;
    }
    sets
}

/// Total slice capacity in entries per row position (sum of slice lengths)
#[inline]
pub fn total_slice_length(slice_lengths: &[usize]) -> Option<usize> {
    slice_lengths
        .iter()
        .try_fold(0usize, |acc, &len| acc.checked_add(len))
}

/// Iterator over the rows of one slice that exist in the matrix
///
/// Yields `(row_in_slice, global_row)` and stops at the first padding row.
#[derive(Debug, Clone)]
pub struct SliceRows {
    base: usize,
    next: usize,
    end: usize,
}

impl SliceRows {
    /// Rows of slice `slice` for a matrix with `num_rows` rows
    pub const fn new(slice: usize, slice_size: usize, num_rows: usize) -> Self {
        let base = slice * slice_size;
        let remaining = num_rows.saturating_sub(base);
        let end = if remaining < slice_size {
            remaining
        } else {
            slice_size
        };
        Self {
            base,
            next: 0,
            end,
        }
    }
}

impl Iterator for SliceRows {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = self.next;
        self.next += 1;
        Some((row, self.base + row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.next;
        (len, Some(len))
    }
}

impl ExactSizeIterator for SliceRows {}
