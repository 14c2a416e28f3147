#![no_std]

//! SELL Core - Sliced ELLPACK layout definitions
//!
//! This crate provides the layout contract, value/index traits, the dense
//! accessor contract and layout validation shared by every Sliced ELL
//! backend

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod layout;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::*;
pub use layout::{entry_offset, slice_count, SliceRows, DEFAULT_SLICE_SIZE};
#[cfg(feature = "alloc")]
pub use layout::slice_sets_from_lengths;
pub use traits::*;
pub use types::{IndexType, ValueType};
pub use validation::{validate_layout, LayoutParts};
