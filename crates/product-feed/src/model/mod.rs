//! # Domain Models
//!
//! Pure data structures matching the remote listing's wire schema.

pub mod product;

pub use product::*;
