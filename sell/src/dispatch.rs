//! Executor-driven dispatch of the Sliced ELL operations
//!
//! The sparse operand's executor picks the backend. Dense operands must
//! live in the same memory space; scalars follow the library-wide
//! convention of being passed as 1x1 dense matrices.

use sell_core::{SellIndex, SellValue};

use crate::dense::Dense;
use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::kernels::{ParallelKernels, ReferenceKernels, SlicedEllKernels};
use crate::matrix::SlicedEllMatrix;

/// Backend selected for an executor
#[derive(Debug, Clone, Copy)]
pub enum Backend {
    Reference(ReferenceKernels),
    Parallel(ParallelKernels),
}

impl Backend {
    /// Backend implementing `operation` for data owned by `executor`
    ///
    /// Accelerators have no kernels in this crate and are refused.
    pub fn for_executor(executor: Executor, operation: &'static str) -> Result<Self> {
        match executor {
            Executor::Reference => Ok(Backend::Reference(ReferenceKernels)),
            Executor::Parallel(config) => Ok(Backend::Parallel(ParallelKernels::new(config))),
            Executor::Accelerator { .. } => {
                tracing::warn!(%executor, operation, "no kernels available for executor");
                Err(Error::NotSupported {
                    executor,
                    operation,
                })
            }
        }
    }
}

impl SlicedEllKernels for Backend {
    fn name(&self) -> &'static str {
        match self {
            Backend::Reference(k) => k.name(),
            Backend::Parallel(k) => k.name(),
        }
    }

    fn spmv<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        a: &SlicedEllMatrix<V, I, S>,
        b: &Dense<V>,
        c: &mut Dense<V>,
    ) -> Result<()> {
        match self {
            Backend::Reference(k) => k.spmv(a, b, c),
            Backend::Parallel(k) => k.spmv(a, b, c),
        }
    }

    fn advanced_spmv<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        alpha: V,
        a: &SlicedEllMatrix<V, I, S>,
        b: &Dense<V>,
        beta: V,
        c: &mut Dense<V>,
    ) -> Result<()> {
        match self {
            Backend::Reference(k) => k.advanced_spmv(alpha, a, b, beta, c),
            Backend::Parallel(k) => k.advanced_spmv(alpha, a, b, beta, c),
        }
    }

    fn convert_to_dense<V: SellValue, I: SellIndex, const S: usize>(
        &self,
        source: &SlicedEllMatrix<V, I, S>,
        result: &mut Dense<V>,
    ) -> Result<()> {
        match self {
            Backend::Reference(k) => k.convert_to_dense(source, result),
            Backend::Parallel(k) => k.convert_to_dense(source, result),
        }
    }
}

/// Every operand must share the sparse operand's memory space
fn check_residency(executor: Executor, operands: &[Executor]) -> Result<()> {
    let expected = executor.memory_space();
    match operands.iter().find(|e| e.memory_space() != expected) {
        Some(other) => Err(Error::ResidencyMismatch {
            expected,
            got: other.memory_space(),
        }),
        None => Ok(()),
    }
}

/// `c := a * b` on the executor owning `a`
pub fn spmv<V: SellValue, I: SellIndex, const S: usize>(
    a: &SlicedEllMatrix<V, I, S>,
    b: &Dense<V>,
    c: &mut Dense<V>,
) -> Result<()> {
    let executor = a.executor();
    check_residency(executor, &[b.executor(), c.executor()])?;
    let backend = Backend::for_executor(executor, "spmv")?;
    tracing::debug!(
        backend = backend.name(),
        rows = a.num_rows(),
        cols = a.num_cols(),
        rhs = b.num_cols(),
        "sliced ell spmv"
    );
    backend.spmv(a, b, c)
}

/// `c := alpha * a * b + beta * c` with 1x1 `alpha` and `beta`
pub fn advanced_spmv<V: SellValue, I: SellIndex, const S: usize>(
    alpha: &Dense<V>,
    a: &SlicedEllMatrix<V, I, S>,
    b: &Dense<V>,
    beta: &Dense<V>,
    c: &mut Dense<V>,
) -> Result<()> {
    let executor = a.executor();
    check_residency(
        executor,
        &[alpha.executor(), b.executor(), beta.executor(), c.executor()],
    )?;
    let alpha = alpha.scalar_value("advanced_spmv")?;
    let beta = beta.scalar_value("advanced_spmv")?;
    let backend = Backend::for_executor(executor, "advanced_spmv")?;
    tracing::debug!(
        backend = backend.name(),
        rows = a.num_rows(),
        cols = a.num_cols(),
        rhs = b.num_cols(),
        "sliced ell advanced spmv"
    );
    backend.advanced_spmv(alpha, a, b, beta, c)
}

/// Overwrite `result` with the dense form of `source`
pub fn convert_to_dense<V: SellValue, I: SellIndex, const S: usize>(
    source: &SlicedEllMatrix<V, I, S>,
    result: &mut Dense<V>,
) -> Result<()> {
    let executor = source.executor();
    check_residency(executor, &[result.executor()])?;
    let backend = Backend::for_executor(executor, "convert_to_dense")?;
    tracing::debug!(
        backend = backend.name(),
        rows = source.num_rows(),
        cols = source.num_cols(),
        "sliced ell convert to dense"
    );
    backend.convert_to_dense(source, result)
}

/// Consuming variant of [`convert_to_dense`]
pub fn move_to_dense<V: SellValue, I: SellIndex, const S: usize>(
    source: SlicedEllMatrix<V, I, S>,
    result: &mut Dense<V>,
) -> Result<()> {
    let executor = source.executor();
    check_residency(executor, &[result.executor()])?;
    let backend = Backend::for_executor(executor, "move_to_dense")?;
    tracing::debug!(
        backend = backend.name(),
        rows = source.num_rows(),
        cols = source.num_cols(),
        "sliced ell move to dense"
    );
    backend.move_to_dense(source, result)
}

impl<V: SellValue, I: SellIndex, const S: usize> SlicedEllMatrix<V, I, S> {
    /// `c := self * b`
    pub fn apply(&self, b: &Dense<V>, c: &mut Dense<V>) -> Result<()> {
        spmv(self, b, c)
    }

    /// `c := alpha * self * b + beta * c`
    pub fn apply_scaled(
        &self,
        alpha: &Dense<V>,
        b: &Dense<V>,
        beta: &Dense<V>,
        c: &mut Dense<V>,
    ) -> Result<()> {
        advanced_spmv(alpha, self, b, beta, c)
    }

    /// Write the dense form into `result`
    pub fn convert_to(&self, result: &mut Dense<V>) -> Result<()> {
        convert_to_dense(self, result)
    }

    /// Write the dense form into `result`, consuming `self`
    pub fn move_to(self, result: &mut Dense<V>) -> Result<()> {
        move_to_dense(self, result)
    }

    /// Dense copy allocated on this matrix's executor
    pub fn to_dense(&self) -> Result<Dense<V>> {
        let mut result = Dense::zeros(self.executor(), self.num_rows(), self.num_cols());
        self.convert_to(&mut result)?;
        Ok(result)
    }
}
