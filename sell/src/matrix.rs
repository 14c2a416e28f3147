//! Owned Sliced ELL matrix
//!
//! Storage is validated once at construction; kernels afterwards trust the
//! layout and index through [`sell_core::entry_offset`] only.

use sell_core::{
    entry_offset, slice_count, validate_layout, LayoutParts, SellIndex, SellValue, SparseMatrix,
    DEFAULT_SLICE_SIZE,
};

use crate::error::Result;
use crate::executor::Executor;

/// Raw arrays of a Sliced ELL matrix
///
/// Produced by an external builder and consumed by
/// [`SlicedEllMatrix::from_parts`].
#[derive(Debug, Clone, PartialEq)]
pub struct SlicedEllParts<V, I> {
    pub num_rows: usize,
    pub num_cols: usize,
    pub values: Vec<V>,
    pub col_idxs: Vec<I>,
    pub slice_lengths: Vec<usize>,
    pub slice_sets: Vec<usize>,
}

/// Sliced ELLPACK sparse matrix
///
/// `SLICE_SIZE` rows form a slice. Within slice `s`, entry `i` of row `r`
/// is stored at `r + (slice_sets[s] + i) * SLICE_SIZE`. Every row of a slice
/// holds `slice_lengths[s]` entries; rows with fewer nonzeros are padded
/// with zero values carrying any in-range column.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicedEllMatrix<V, I, const SLICE_SIZE: usize = DEFAULT_SLICE_SIZE> {
    num_rows: usize,
    num_cols: usize,
    values: Vec<V>,
    col_idxs: Vec<I>,
    slice_lengths: Vec<usize>,
    slice_sets: Vec<usize>,
    executor: Executor,
}

impl<V: SellValue, I: SellIndex, const SLICE_SIZE: usize> SlicedEllMatrix<V, I, SLICE_SIZE> {
    /// Build a matrix from raw arrays, validating the layout
    pub fn from_parts(executor: Executor, parts: SlicedEllParts<V, I>) -> Result<Self> {
        validate_layout(&LayoutParts {
            num_rows: parts.num_rows,
            num_cols: parts.num_cols,
            slice_size: SLICE_SIZE,
            slice_lengths: &parts.slice_lengths,
            slice_sets: &parts.slice_sets,
            values_len: parts.values.len(),
            col_idxs: &parts.col_idxs,
        })?;

        Ok(Self {
            num_rows: parts.num_rows,
            num_cols: parts.num_cols,
            values: parts.values,
            col_idxs: parts.col_idxs,
            slice_lengths: parts.slice_lengths,
            slice_sets: parts.slice_sets,
            executor,
        })
    }

    /// Empty `num_rows x num_cols` matrix: every slice has length zero
    pub fn empty(executor: Executor, num_rows: usize, num_cols: usize) -> Result<Self> {
        let slices = slice_count(num_rows, SLICE_SIZE);
        Self::from_parts(
            executor,
            SlicedEllParts {
                num_rows,
                num_cols,
                values: Vec::new(),
                col_idxs: Vec::new(),
                slice_lengths: vec![0; slices],
                slice_sets: vec![0; slices],
            },
        )
    }

    /// Give up the storage
    pub fn into_parts(self) -> SlicedEllParts<V, I> {
        SlicedEllParts {
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            values: self.values,
            col_idxs: self.col_idxs,
            slice_lengths: self.slice_lengths,
            slice_sets: self.slice_sets,
        }
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Rows per slice
    pub const fn slice_size(&self) -> usize {
        SLICE_SIZE
    }

    /// Number of slices
    pub fn slice_count(&self) -> usize {
        self.slice_lengths.len()
    }

    /// Flat values array, padding included
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Flat column index array, parallel to [`values`](Self::values)
    pub fn col_idxs(&self) -> &[I] {
        &self.col_idxs
    }

    /// Padded entry count per row, one per slice
    pub fn slice_lengths(&self) -> &[usize] {
        &self.slice_lengths
    }

    /// Starting entry offset of each slice
    pub fn slice_sets(&self) -> &[usize] {
        &self.slice_sets
    }

    /// Byte image of the values array
    pub fn values_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }

    /// Byte image of the column index array
    pub fn col_idxs_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.col_idxs)
    }

    /// Executor owning this matrix's memory
    pub fn executor(&self) -> Executor {
        self.executor
    }

    /// Re-tag the matrix after an external transfer
    pub fn with_executor(mut self, executor: Executor) -> Self {
        self.executor = executor;
        self
    }

    /// Stored `(column, value)` pairs of a row, padding included
    ///
    /// Empty for rows outside the matrix.
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, V)> + '_ {
        let (slice, row_in_slice) = (row / SLICE_SIZE, row % SLICE_SIZE);
        let len = if row < self.num_rows {
            self.slice_lengths[slice]
        } else {
            0
        };
        let set = if len > 0 { self.slice_sets[slice] } else { 0 };
        (0..len).map(move |i| {
            let offset = entry_offset(row_in_slice, set, i, SLICE_SIZE);
            (self.col_idxs[offset].as_usize(), self.values[offset])
        })
    }
}

impl<V: SellValue, I: SellIndex, const SLICE_SIZE: usize> SparseMatrix
    for SlicedEllMatrix<V, I, SLICE_SIZE>
{
    type Element = V;

    fn get_element(&self, row: usize, col: usize) -> Option<V> {
        if col >= self.num_cols {
            return None;
        }
        self.row_entries(row)
            .filter(|&(c, _)| c == col)
            .map(|(_, v)| v)
            .reduce(|mut acc, v| {
                acc += v;
                acc
            })
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    fn stored_entries(&self) -> usize {
        self.slice_lengths.iter().sum::<usize>() * SLICE_SIZE
    }
}
