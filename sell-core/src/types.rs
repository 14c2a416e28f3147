//! Type tags for the supported value and index types

/// Value types a Sliced ELL matrix can store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ValueType {
    F32 = 0,
    F64 = 1,
}

impl ValueType {
    /// Get the size in bytes for this value type
    pub const fn size_bytes(&self) -> usize {
        match self {
            ValueType::F32 => 4,
            ValueType::F64 => 8,
        }
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueType::F32 => write!(f, "f32"),
            ValueType::F64 => write!(f, "f64"),
        }
    }
}

/// Integer widths used for column indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum IndexType {
    I32 = 0,
    I64 = 1,
}

impl IndexType {
    /// Get the size in bytes for this index type
    pub const fn size_bytes(&self) -> usize {
        match self {
            IndexType::I32 => 4,
            IndexType::I64 => 8,
        }
    }
}

impl core::fmt::Display for IndexType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndexType::I32 => write!(f, "i32"),
            IndexType::I64 => write!(f, "i64"),
        }
    }
}
