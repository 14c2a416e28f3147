//! Row-major dense matrix with a leading dimension
//!
//! Minimal owned dense storage used as operand and output of the Sliced
//! ELL kernels.

use sell_core::{DenseMatrix, DenseMatrixMut, SellValue};

use crate::error::{Error, Result};
use crate::executor::Executor;

/// Row-major dense matrix
///
/// Element `(row, col)` lives at `row * stride + col`. Columns past
/// `num_cols` inside a row are padding and never touched by kernels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<V> {
    num_rows: usize,
    num_cols: usize,
    stride: usize,
    values: Vec<V>,
    executor: Executor,
}

impl<V: SellValue> Dense<V> {
    /// Zero-filled `num_rows x num_cols` matrix with `stride == num_cols`
    pub fn zeros(executor: Executor, num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            stride: num_cols,
            values: vec![V::zero(); num_rows * num_cols],
            executor,
        }
    }

    /// Zero-filled matrix with an explicit leading dimension
    pub fn with_stride(
        executor: Executor,
        num_rows: usize,
        num_cols: usize,
        stride: usize,
    ) -> Result<Self> {
        if stride < num_cols {
            return Err(Error::InvalidDense {
                reason: "stride smaller than column count",
            });
        }
        let len = num_rows.checked_mul(stride).ok_or(Error::InvalidDense {
            reason: "storage size overflow",
        })?;
        Ok(Self {
            num_rows,
            num_cols,
            stride,
            values: vec![V::zero(); len],
            executor,
        })
    }

    /// Wrap row-major values with `stride == num_cols`
    pub fn from_row_major(
        executor: Executor,
        num_rows: usize,
        num_cols: usize,
        values: Vec<V>,
    ) -> Result<Self> {
        if Some(values.len()) != num_rows.checked_mul(num_cols) {
            return Err(Error::InvalidDense {
                reason: "value count does not match dimensions",
            });
        }
        Ok(Self {
            num_rows,
            num_cols,
            stride: num_cols,
            values,
            executor,
        })
    }

    /// `n x n` identity
    pub fn identity(executor: Executor, n: usize) -> Self {
        let mut dense = Self::zeros(executor, n, n);
        for i in 0..n {
            dense.values[i * n + i] = V::one();
        }
        dense
    }

    /// 1x1 matrix holding a scalar
    pub fn scalar(executor: Executor, value: V) -> Self {
        Self {
            num_rows: 1,
            num_cols: 1,
            stride: 1,
            values: vec![value],
            executor,
        }
    }

    /// Fill every element (padding columns excluded) with `value`
    pub fn fill(&mut self, value: V) {
        let cols = self.num_cols;
        for row in self.rows_mut() {
            row[..cols].fill(value);
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

    /// Leading dimension
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
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

    /// Element at `(row, col)`
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> V {
        debug_assert!(col < self.num_cols);
        self.values[row * self.stride + col]
    }

    /// Settable reference to the element at `(row, col)`
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut V {
        debug_assert!(col < self.num_cols);
        &mut self.values[row * self.stride + col]
    }

    /// The `num_cols` elements of a row
    #[inline]
    pub fn row(&self, row: usize) -> &[V] {
        let start = row * self.stride;
        &self.values[start..start + self.num_cols]
    }

    /// Mutable view of the `num_cols` elements of a row
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [V] {
        let start = row * self.stride;
        &mut self.values[start..start + self.num_cols]
    }

    /// Full backing storage, stride padding included
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    /// Rows as stride-sized chunks, stride padding included
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, V> {
        self.values.chunks_mut(self.stride.max(1))
    }

    /// Mutable backing storage, stride padding included
    pub(crate) fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.values
    }

    /// Copy out the elements in row-major order without stride padding
    pub fn to_row_major_vec(&self) -> Vec<V> {
        (0..self.num_rows)
            .flat_map(|row| self.row(row).iter().copied())
            .collect()
    }

    /// Read the single element of a 1x1 matrix
    pub(crate) fn scalar_value(&self, operation: &'static str) -> Result<V> {
        if self.dimensions() != (1, 1) {
            return Err(Error::dimension_mismatch(
                operation,
                (1, 1),
                self.dimensions(),
            ));
        }
        Ok(self.values[0])
    }
}

impl<V: SellValue> DenseMatrix for Dense<V> {
    type Element = V;

    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn at(&self, row: usize, col: usize) -> V {
        Dense::at(self, row, col)
    }
}

impl<V: SellValue> DenseMatrixMut for Dense<V> {
    fn at_mut(&mut self, row: usize, col: usize) -> &mut V {
        Dense::at_mut(self, row, col)
    }
}
