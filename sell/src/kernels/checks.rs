//! Precondition checks run before any output is written

use sell_core::{DenseMatrix, SellIndex, SellValue};

use crate::dense::Dense;
use crate::error::{Error, Result};
use crate::matrix::SlicedEllMatrix;

/// Shapes for `C = A * B`
pub(crate) fn check_spmv<V: SellValue, I: SellIndex, const S: usize>(
    operation: &'static str,
    a: &SlicedEllMatrix<V, I, S>,
    b: &impl DenseMatrix<Element = V>,
    c: &impl DenseMatrix<Element = V>,
) -> Result<()> {
    if b.num_rows() != a.num_cols() {
        return Err(Error::dimension_mismatch(
            operation,
            (a.num_cols(), b.num_cols()),
            b.dimensions(),
        ));
    }
    if c.dimensions() != (a.num_rows(), b.num_cols()) {
        return Err(Error::dimension_mismatch(
            operation,
            (a.num_rows(), b.num_cols()),
            c.dimensions(),
        ));
    }
    Ok(())
}

/// Shape and host residency for dense conversion
pub(crate) fn check_conversion<V: SellValue, I: SellIndex, const S: usize>(
    operation: &'static str,
    source: &SlicedEllMatrix<V, I, S>,
    result: &Dense<V>,
) -> Result<()> {
    let executor = result.executor();
    if !executor.is_master() {
        tracing::warn!(%executor, operation, "dense conversion requires host-resident data");
        return Err(Error::NotSupported {
            executor,
            operation,
        });
    }
    if result.dimensions() != (source.num_rows(), source.num_cols()) {
        return Err(Error::dimension_mismatch(
            operation,
            (source.num_rows(), source.num_cols()),
            result.dimensions(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::Executor;
    use crate::test_util::scenario_matrix;

    #[test]
    fn test_check_spmv_shapes() {
        let a = scenario_matrix(Executor::Reference);
        let b = Dense::<f64>::zeros(Executor::Reference, 3, 2);
        let c = Dense::<f64>::zeros(Executor::Reference, 3, 2);
        assert_eq!(check_spmv("spmv", &a, &b, &c), Ok(()));

        let bad_b = Dense::<f64>::zeros(Executor::Reference, 2, 2);
        assert_eq!(
            check_spmv("spmv", &a, &bad_b, &c),
            Err(Error::DimensionMismatch {
                operation: "spmv",
                expected: (3, 2),
                got: (2, 2),
            })
        );

        let bad_c = Dense::<f64>::zeros(Executor::Reference, 3, 1);
        assert_eq!(
            check_spmv("spmv", &a, &b, &bad_c),
            Err(Error::DimensionMismatch {
                operation: "spmv",
                expected: (3, 2),
                got: (3, 1),
            })
        );
    }

    #[test]
    fn test_check_conversion() {
        let a = scenario_matrix(Executor::Reference);
        let ok = Dense::<f64>::zeros(Executor::parallel(), 3, 3);
        assert_eq!(check_conversion("convert_to_dense", &a, &ok), Ok(()));

        let device = Dense::<f64>::zeros(Executor::Accelerator { id: 0 }, 3, 3);
        assert_eq!(
            check_conversion("convert_to_dense", &a, &device),
            Err(Error::NotSupported {
                executor: Executor::Accelerator { id: 0 },
                operation: "convert_to_dense",
            })
        );

        let wrong_shape = Dense::<f64>::zeros(Executor::Reference, 3, 2);
        assert!(matches!(
            check_conversion("convert_to_dense", &a, &wrong_shape),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
