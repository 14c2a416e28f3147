//! Sequential reference backend
//!
//! Walks slices in storage order and the rows of each slice in order,
//! stopping at the first padding row of the last slice.

use sell_core::{SellIndex, SellValue, SliceRows};

use super::checks::{check_conversion, check_spmv};
use super::row::{advanced_spmv_row, dense_row, spmv_row};
use super::SlicedEllKernels;
use crate::dense::Dense;
use crate::error::Result;
use crate::matrix::SlicedEllMatrix;

/// Single-threaded kernels
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceKernels;

impl ReferenceKernels {
    fn for_each_row<V, I, const S: usize>(
        a: &SlicedEllMatrix<V, I, S>,
        c: &mut Dense<V>,
        mut f: impl FnMut(usize, usize, &mut [V]),
    ) where
        V: SellValue,
        I: SellIndex,
    {
        for slice in 0..a.slice_count() {
            for (row, global_row) in SliceRows::new(slice, S, a.num_rows()) {
                f(slice, row, c.row_mut(global_row));
            }
        }
    }
}

impl SlicedEllKernels for ReferenceKernels {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn spmv<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        a: &SlicedEllMatrix<V, I, S>,
        b: &Dense<V>,
        c: &mut Dense<V>,
    ) -> Result<()> {
        check_spmv("spmv", a, b, c)?;
        Self::for_each_row(a, c, |slice, row, out| spmv_row(a, slice, row, b, out));
        Ok(())
    }

    fn advanced_spmv<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        alpha: V,
        a: &SlicedEllMatrix<V, I, S>,
        b: &Dense<V>,
        beta: V,
        c: &mut Dense<V>,
    ) -> Result<()> {
        check_spmv("advanced_spmv", a, b, c)?;
        Self::for_each_row(a, c, |slice, row, out| {
            advanced_spmv_row(alpha, a, slice, row, b, beta, out)
        });
        Ok(())
    }

    fn convert_to_dense<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        source: &SlicedEllMatrix<V, I, S>,
        result: &mut Dense<V>,
    ) -> Result<()> {
        check_conversion("convert_to_dense", source, result)?;
        Self::for_each_row(source, result, |slice, row, out| {
            dense_row(source, slice, row, out)
        });
        Ok(())
    }
}
