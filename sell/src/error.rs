//! Error type for Sliced ELL operations

use sell_core::{SellError, ValueType};
use thiserror::Error;

use crate::executor::{Executor, MemorySpace};

/// Result type alias using this crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building matrices or running kernels
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Layout metadata inconsistent with the backing arrays
    #[error("Corrupt layout: {0}")]
    Layout(#[from] SellError),

    /// Operand dimensions incompatible for the requested operation
    #[error("Dimension mismatch in {operation}: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// The operation being attempted
        operation: &'static str,
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Actual (rows, cols)
        got: (usize, usize),
    },

    /// Operation not available on the executor holding the data
    #[error("{operation} is not supported on executor {executor}")]
    NotSupported {
        /// The executor the call was made on
        executor: Executor,
        /// The operation being attempted
        operation: &'static str,
    },

    /// Operands live in different memory spaces
    #[error("Residency mismatch: expected {expected}, got {got}")]
    ResidencyMismatch {
        /// Memory space of the sparse operand
        expected: MemorySpace,
        /// Memory space of the offending operand
        got: MemorySpace,
    },

    /// Value types of a dynamically typed call do not match
    #[error("Value type mismatch: expected {expected}, got {got}")]
    ValueTypeMismatch {
        /// Value type of the sparse operand
        expected: ValueType,
        /// Value type of the dense operand
        got: ValueType,
    },

    /// Dense storage arguments are inconsistent
    #[error("Invalid dense storage: {reason}")]
    InvalidDense {
        /// Reason for invalidity
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn dimension_mismatch(
        operation: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    ) -> Self {
        Error::DimensionMismatch {
            operation,
            expected,
            got,
        }
    }
}
