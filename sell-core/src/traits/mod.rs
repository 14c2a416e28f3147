//! Abstract interfaces for Sliced ELL storage and kernels
//!
//! Traits are pure interfaces - no concrete storage here.

pub mod dense;
pub mod element;
pub mod index;
pub mod matrix;

pub use dense::{DenseMatrix, DenseMatrixMut};
pub use element::SellValue;
pub use index::SellIndex;
pub use matrix::SparseMatrix;
