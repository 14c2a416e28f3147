//! Layout validation utilities
//!
//! Pure checks on layout metadata and index arrays, no storage ownership.

pub mod bounds;
pub mod layout;

pub use bounds::{required_storage, validate_column, validate_storage};
pub use layout::{validate_layout, LayoutParts};
