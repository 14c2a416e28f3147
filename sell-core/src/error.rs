//! Error types for Sliced ELL layout checks

/// Errors reported when a Sliced ELL layout is inconsistent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellError {
    /// Slice size must be positive
    InvalidSliceSize,
    /// Number of slice lengths or slice sets differs from ceil(rows / slice size)
    SliceCountMismatch,
    /// Slice sets are not the exclusive prefix sum of the slice lengths
    SliceSetMismatch,
    /// Values and column index arrays differ in length
    StorageLengthMismatch,
    /// Backing arrays are shorter than the total slice capacity
    InsufficientStorage,
    /// A stored column index is negative or not below the column count
    ColumnOutOfBounds,
    /// An index does not fit the target integer width
    IndexOverflow,
    /// Storage size calculation overflowed
    ArraySizeOverflow,
}

impl SellError {
    /// Short machine-friendly name of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            SellError::InvalidSliceSize => "invalid_slice_size",
            SellError::SliceCountMismatch => "slice_count_mismatch",
            SellError::SliceSetMismatch => "slice_set_mismatch",
            SellError::StorageLengthMismatch => "storage_length_mismatch",
            SellError::InsufficientStorage => "insufficient_storage",
            SellError::ColumnOutOfBounds => "column_out_of_bounds",
            SellError::IndexOverflow => "index_overflow",
            SellError::ArraySizeOverflow => "array_size_overflow",
        }
    }
}

impl core::fmt::Display for SellError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SellError::InvalidSliceSize => "Slice size must be positive",
            SellError::SliceCountMismatch => "Slice metadata does not cover every row",
            SellError::SliceSetMismatch => "Slice sets are not the prefix sum of slice lengths",
            SellError::StorageLengthMismatch => "Values and column indices differ in length",
            SellError::InsufficientStorage => "Backing storage smaller than slice capacity",
            SellError::ColumnOutOfBounds => "Column index out of bounds",
            SellError::IndexOverflow => "Index does not fit the index type",
            SellError::ArraySizeOverflow => "Storage size overflow",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for SellError {}

/// Result type for layout operations
pub type Result<T> = core::result::Result<T, SellError>;
