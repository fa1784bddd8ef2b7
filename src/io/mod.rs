//! Input/output helpers.
//!
//! - sequence JSON read/write (`curve`)
//! - step-table CSV export (`export`)

pub mod curve;
pub mod export;

pub use curve::*;
pub use export::*;
