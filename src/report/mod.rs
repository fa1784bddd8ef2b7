//! Reporting utilities: step diagnostics and formatted terminal output.

pub mod format;

pub use format::*;
