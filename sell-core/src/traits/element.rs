//! Value type constraints for Sliced ELL storage
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix values and accumulated by the kernels.

use core::fmt::Debug;
use core::ops::{AddAssign, Mul, MulAssign};

use num_traits::{One, Zero};

use crate::types::ValueType;

/// Trait for types that can be stored as Sliced ELL values
///
/// Values are plain old data so that the backing arrays have the same
/// byte image on every backend. Padding entries hold `Self::zero()` and are
/// accumulated like any other entry.
pub trait SellValue:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + bytemuck::Pod
    + Zero
    + One
    + Mul<Output = Self>
    + AddAssign
    + MulAssign
    + 'static
{
    /// Tag for this value type
    fn value_type() -> ValueType;

    /// Get the size in bytes of this value type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic comparisons
    fn to_f64(self) -> f64;
}

impl SellValue for f32 {
    fn value_type() -> ValueType {
        ValueType::F32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl SellValue for f64 {
    fn value_type() -> ValueType {
        ValueType::F64
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}
