//! SELL - Sliced ELLPACK sparse matrices with multi-backend kernels
//!
//! This library provides owned Sliced ELL storage and the SpMV, scaled
//! SpMV and dense conversion kernels for a sequential reference backend
//! and a rayon-parallel host backend.
//!
//! ## Architecture
//!
//! SELL follows a specification/implementation separation:
//!
//! - **sell-core**: Layout contract, traits and validation (`no_std`)
//! - **sell**: Storage, executors, kernels and dispatch
//!
//! ## Quick Start
//!
//! ```rust
//! use sell::{Dense, Executor, SlicedEllMatrix, SlicedEllParts};
//!
//! fn example() -> sell::Result<()> {
//!     // [2 3]
//!     // [0 4]
//!     let a = SlicedEllMatrix::<f64, i32, 2>::from_parts(
//!         Executor::parallel(),
//!         SlicedEllParts {
//!             num_rows: 2,
//!             num_cols: 2,
//!             values: vec![2.0, 4.0, 3.0, 0.0],
//!             col_idxs: vec![0, 1, 1, 0],
//!             slice_lengths: vec![2],
//!             slice_sets: vec![0],
//!         },
//!     )?;
//!
//!     let x = Dense::from_row_major(Executor::parallel(), 2, 1, vec![1.0, 1.0])?;
//!     let mut y = Dense::zeros(Executor::parallel(), 2, 1);
//!     a.apply(&x, &mut y)?;
//!     assert_eq!(y.to_row_major_vec(), vec![5.0, 4.0]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Shared layout**: every backend addresses storage through
//!   [`sell_core::entry_offset`]
//! - **Residency tags**: matrices carry their [`Executor`]; operands must
//!   share a memory space
//! - **Typed instantiations**: [`DynamicSlicedEll`] lists the supported
//!   value/index pairs

// Re-export core abstractions
pub use sell_core::{
    // Core traits
    DenseMatrix, DenseMatrixMut, SellIndex, SellValue, SparseMatrix,
    // Layout contract
    entry_offset, slice_count, IndexType, ValueType, DEFAULT_SLICE_SIZE,
    // Layout errors
    SellError,
};

pub mod config;
pub mod dense;
pub mod dispatch;
pub mod dynamic;
pub mod error;
pub mod executor;
pub mod kernels;
pub mod matrix;

#[cfg(test)]
mod test_util;

pub use config::{ParallelConfig, ParallelStrategy};
pub use dense::Dense;
pub use dispatch::{advanced_spmv, convert_to_dense, move_to_dense, spmv, Backend};
pub use dynamic::{DynamicDense, DynamicSlicedEll};
pub use error::{Error, Result};
pub use executor::{Executor, MemorySpace};
pub use kernels::{ParallelKernels, ReferenceKernels, SlicedEllKernels};
pub use matrix::{SlicedEllMatrix, SlicedEllParts};
