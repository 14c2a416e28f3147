//! Sliced ELL kernel backends
//!
//! Every backend implements [`SlicedEllKernels`] over the same layout and
//! the same addressing formula. They differ only in how the outer
//! slice/row loop is scheduled.
//!
//! - [`ReferenceKernels`] - sequential
//! - [`ParallelKernels`] - rayon, per row or per slice

mod checks;
pub mod parallel;
pub mod reference;
mod row;


pub use parallel::ParallelKernels;
pub use reference::ReferenceKernels;

use sell_core::{SellIndex, SellValue};

use crate::dense::Dense;
use crate::error::Result;
use crate::matrix::SlicedEllMatrix;

/// Operations every Sliced ELL backend provides
///
/// All operations check their preconditions before writing any output and
/// never mutate the sparse operand.
pub trait SlicedEllKernels {
    /// Backend name, used in logs
    fn name(&self) -> &'static str;

    /// `c := a * b`
    fn spmv<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        a: &SlicedEllMatrix<V, I, S>,
        b: &Dense<V>,
        c: &mut Dense<V>,
    ) -> Result<()>;

    /// `c := alpha * a * b + beta * c`
    ///
    /// A zero `beta` discards the previous contents of `c`, non-finite
    /// values included.
    fn advanced_spmv<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        alpha: V,
        a: &SlicedEllMatrix<V, I, S>,
        b: &Dense<V>,
        beta: V,
        c: &mut Dense<V>,
    ) -> Result<()>;

    /// Overwrite `result` with the dense form of `source`
    ///
    /// Stored entries sharing a position are summed. Fails with
    /// [`Error::NotSupported`](crate::Error::NotSupported) unless `result`
    /// lives on a master executor.
    fn convert_to_dense<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        source: &SlicedEllMatrix<V, I, S>,
        result: &mut Dense<V>,
    ) -> Result<()>;

    /// Same as [`convert_to_dense`](Self::convert_to_dense), consuming the source
    fn move_to_dense<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        source: SlicedEllMatrix<V, I, S>,
        result: &mut Dense<V>,
    ) -> Result<()> {
        self.convert_to_dense(&source, result)
    }
}
