//! Sparse matrix abstraction traits
//!
//! This module defines the read-only interface shared by sparse matrix
//! implementations, regardless of which backend holds the data.

use super::element::SellValue;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: SellValue;

    /// Get an element at the specified position
    ///
    /// Returns `None` if nothing is stored at the position or if the
    /// position is out of bounds. Multiple stored entries at the same
    /// position are summed.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of stored entries, padding included
    fn stored_entries(&self) -> usize;
}
