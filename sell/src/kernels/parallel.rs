//! Multi-threaded host backend built on rayon
//!
//! Output rows are disjoint chunks of the dense result, so rows (or whole
//! slices) run as independent rayon tasks without synchronization. The
//! per-row arithmetic is shared with the reference backend, which keeps
//! results bit-identical.

use rayon::prelude::*;
use sell_core::{SellIndex, SellValue};

use super::checks::{check_conversion, check_spmv};
use super::row::{advanced_spmv_row, dense_row, spmv_row};
use super::SlicedEllKernels;
use crate::config::{ParallelConfig, ParallelStrategy};
use crate::dense::Dense;
use crate::error::Result;
use crate::matrix::SlicedEllMatrix;

/// Rayon-parallel kernels
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelKernels {
    config: ParallelConfig,
}

impl ParallelKernels {
    /// Create kernels with the given configuration
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Run `f(slice, row_in_slice, out_row)` for every real row of `a`
    fn for_each_row<V, I, const S: usize, F>(
        &self,
        a: &SlicedEllMatrix<V, I, S>,
        c: &mut Dense<V>,
        f: F,
    ) where
        V: SellValue,
        I: SellIndex,
        F: Fn(usize, usize, &mut [V]) + Sync + Send,
    {
        let cols = c.num_cols();
        let stride = c.stride();
        if a.num_rows() == 0 || cols == 0 {
            return;
        }

        let min_len = self.config.min_items_per_task(S);
        tracing::trace!(
            strategy = ?self.config.strategy,
            min_len,
            rows = a.num_rows(),
            "parallel sliced ell dispatch"
        );

        // c holds exactly num_rows rows of `stride` elements
        let storage = &mut c.as_mut_slice()[..a.num_rows() * stride];
        match self.config.strategy {
            ParallelStrategy::PerRow => {
                storage
                    .par_chunks_mut(stride)
                    .with_min_len(min_len)
                    .enumerate()
                    .for_each(|(global_row, out)| {
                        f(global_row / S, global_row % S, &mut out[..cols])
                    });
            }
            ParallelStrategy::PerSlice => {
                storage
                    .par_chunks_mut(stride * S)
                    .with_min_len(min_len)
                    .enumerate()
                    .for_each(|(slice, rows)| {
                        // a short final chunk skips the padding rows
                        for (row, out) in rows.chunks_mut(stride).enumerate() {
                            f(slice, row, &mut out[..cols]);
                        }
                    });
            }
        }
    }
}

impl SlicedEllKernels for ParallelKernels {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn spmv<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        a: &SlicedEllMatrix<V, I, S>,
        b: &Dense<V>,
        c: &mut Dense<V>,
    ) -> Result<()> {
        check_spmv("spmv", a, b, c)?;
        self.for_each_row(a, c, |slice, row, out| spmv_row(a, slice, row, b, out));
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
        self.for_each_row(a, c, |slice, row, out| {
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
        self.for_each_row(source, result, |slice, row, out| {
            dense_row(source, slice, row, out)
        });
        Ok(())
    }
}
