//! Dense matrix accessor contract
//!
//! Shape checks only need the dimensions and the leading dimension, and
//! element access is by `(row, col)`. Storage management belongs to the
//! implementor.

/// Read access to a dense matrix
pub trait DenseMatrix {
    /// The element type stored in this matrix
    type Element: Copy;

    /// Number of rows
    fn num_rows(&self) -> usize;

    /// Number of columns
    fn num_cols(&self) -> usize;

    /// Leading dimension: distance between the starts of two rows
    fn stride(&self) -> usize;

    /// Read the element at `(row, col)`
    ///
    /// Panics when the position is out of bounds.
    fn at(&self, row: usize, col: usize) -> Self::Element;

    /// Get dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }
}

/// Write access to a dense matrix
pub trait DenseMatrixMut: DenseMatrix {
    /// Settable reference to the element at `(row, col)`
    ///
    /// Panics when the position is out of bounds.
    fn at_mut(&mut self, row: usize, col: usize) -> &mut Self::Element;
}
