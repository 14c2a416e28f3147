//! Runtime-typed wrappers over the supported (value, index) instantiations
//!
//! Every supported combination is listed once here; the kernels are
//! monomorphized for each of them.

use sell_core::{IndexType, SellValue, SparseMatrix, ValueType};

use crate::dense::Dense;
use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::matrix::SlicedEllMatrix;

/// Sliced ELL matrix of any supported value/index pair
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicSlicedEll {
    F32I32(SlicedEllMatrix<f32, i32>),
    F32I64(SlicedEllMatrix<f32, i64>),
    F64I32(SlicedEllMatrix<f64, i32>),
    F64I64(SlicedEllMatrix<f64, i64>),
}

/// Dense matrix of any supported value type
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicDense {
    F32(Dense<f32>),
    F64(Dense<f64>),
}

/// Apply `$body` to the matrix inside any variant
macro_rules! with_matrix {
    ($matrix:expr, $m:ident => $body:expr) => {
        match $matrix {
            DynamicSlicedEll::F32I32($m) => $body,
            DynamicSlicedEll::F32I64($m) => $body,
            DynamicSlicedEll::F64I32($m) => $body,
            DynamicSlicedEll::F64I64($m) => $body,
        }
    };
}

impl DynamicSlicedEll {
    /// Get the value type
    pub fn value_type(&self) -> ValueType {
        match self {
            DynamicSlicedEll::F32I32(_) | DynamicSlicedEll::F32I64(_) => ValueType::F32,
            DynamicSlicedEll::F64I32(_) | DynamicSlicedEll::F64I64(_) => ValueType::F64,
        }
    }

    /// Get the index type
    pub fn index_type(&self) -> IndexType {
        match self {
            DynamicSlicedEll::F32I32(_) | DynamicSlicedEll::F64I32(_) => IndexType::I32,
            DynamicSlicedEll::F32I64(_) | DynamicSlicedEll::F64I64(_) => IndexType::I64,
        }
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        with_matrix!(self, m => m.dimensions())
    }

    /// Executor owning the matrix
    pub fn executor(&self) -> Executor {
        with_matrix!(self, m => m.executor())
    }

    /// Element at `(row, col)` widened to f64
    pub fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        with_matrix!(self, m => m.get_element(row, col).map(SellValue::to_f64))
    }

    /// `c := self * b`
    pub fn apply(&self, b: &DynamicDense, c: &mut DynamicDense) -> Result<()> {
        use DynamicDense::{F32, F64};
        let expected = self.value_type();
        match (self, b, c) {
            (DynamicSlicedEll::F32I32(a), F32(b), F32(c)) => a.apply(b, c),
            (DynamicSlicedEll::F32I64(a), F32(b), F32(c)) => a.apply(b, c),
            (DynamicSlicedEll::F64I32(a), F64(b), F64(c)) => a.apply(b, c),
            (DynamicSlicedEll::F64I64(a), F64(b), F64(c)) => a.apply(b, c),
            (_, b, c) => Err(mismatch(expected, &[b, &*c])),
        }
    }

    /// `c := alpha * self * b + beta * c` with 1x1 `alpha` and `beta`
    pub fn apply_scaled(
        &self,
        alpha: &DynamicDense,
        b: &DynamicDense,
        beta: &DynamicDense,
        c: &mut DynamicDense,
    ) -> Result<()> {
        use DynamicDense::{F32, F64};
        let expected = self.value_type();
        match (self, alpha, b, beta, c) {
            (DynamicSlicedEll::F32I32(a), F32(alpha), F32(b), F32(beta), F32(c)) => {
                a.apply_scaled(alpha, b, beta, c)
            }
            (DynamicSlicedEll::F32I64(a), F32(alpha), F32(b), F32(beta), F32(c)) => {
                a.apply_scaled(alpha, b, beta, c)
            }
            (DynamicSlicedEll::F64I32(a), F64(alpha), F64(b), F64(beta), F64(c)) => {
                a.apply_scaled(alpha, b, beta, c)
            }
            (DynamicSlicedEll::F64I64(a), F64(alpha), F64(b), F64(beta), F64(c)) => {
                a.apply_scaled(alpha, b, beta, c)
            }
            (_, alpha, b, beta, c) => Err(mismatch(expected, &[alpha, b, beta, &*c])),
        }
    }

    /// Write the dense form into a `result` of the same value type
    pub fn convert_to(&self, result: &mut DynamicDense) -> Result<()> {
        use DynamicDense::{F32, F64};
        let expected = self.value_type();
        match (self, result) {
            (DynamicSlicedEll::F32I32(a), F32(r)) => a.convert_to(r),
            (DynamicSlicedEll::F32I64(a), F32(r)) => a.convert_to(r),
            (DynamicSlicedEll::F64I32(a), F64(r)) => a.convert_to(r),
            (DynamicSlicedEll::F64I64(a), F64(r)) => a.convert_to(r),
            (_, r) => Err(mismatch(expected, &[&*r])),
        }
    }

    /// Consuming variant of [`convert_to`](Self::convert_to)
    pub fn move_to(self, result: &mut DynamicDense) -> Result<()> {
        use DynamicDense::{F32, F64};
        let expected = self.value_type();
        match (self, result) {
            (DynamicSlicedEll::F32I32(a), F32(r)) => a.move_to(r),
            (DynamicSlicedEll::F32I64(a), F32(r)) => a.move_to(r),
            (DynamicSlicedEll::F64I32(a), F64(r)) => a.move_to(r),
            (DynamicSlicedEll::F64I64(a), F64(r)) => a.move_to(r),
            (_, r) => Err(mismatch(expected, &[&*r])),
        }
    }

    /// Dense copy on the matrix's executor
    pub fn to_dense(&self) -> Result<DynamicDense> {
        match self {
            DynamicSlicedEll::F32I32(m) => m.to_dense().map(DynamicDense::F32),
            DynamicSlicedEll::F32I64(m) => m.to_dense().map(DynamicDense::F32),
            DynamicSlicedEll::F64I32(m) => m.to_dense().map(DynamicDense::F64),
            DynamicSlicedEll::F64I64(m) => m.to_dense().map(DynamicDense::F64),
        }
    }
}

impl DynamicDense {
    /// Get the value type
    pub fn value_type(&self) -> ValueType {
        match self {
            DynamicDense::F32(_) => ValueType::F32,
            DynamicDense::F64(_) => ValueType::F64,
        }
    }

    /// Get dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            DynamicDense::F32(d) => d.dimensions(),
            DynamicDense::F64(d) => d.dimensions(),
        }
    }
}

fn mismatch(expected: ValueType, operands: &[&DynamicDense]) -> Error {
    let got = operands
        .iter()
        .map(|d| d.value_type())
        .find(|&t| t != expected)
        .unwrap_or(expected);
    Error::ValueTypeMismatch { expected, got }
}

macro_rules! impl_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for DynamicSlicedEll {
                fn from(matrix: $ty) -> Self {
                    DynamicSlicedEll::$variant(matrix)
                }
            }
        )*
    };
}

impl_from!(
    F32I32 => SlicedEllMatrix<f32, i32>,
    F32I64 => SlicedEllMatrix<f32, i64>,
    F64I32 => SlicedEllMatrix<f64, i32>,
    F64I64 => SlicedEllMatrix<f64, i64>,
);

impl From<Dense<f32>> for DynamicDense {
    fn from(dense: Dense<f32>) -> Self {
        DynamicDense::F32(dense)
    }
}

impl From<Dense<f64>> for DynamicDense {
    fn from(dense: Dense<f64>) -> Self {
        DynamicDense::F64(dense)
    }
}
