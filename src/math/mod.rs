//! Mathematical utilities: quadratic polynomial evaluation.

pub mod poly;

pub use poly::*;
