//! `step-curves` library crate.
//!
//! The binary (`steps`) is a thin wrapper around this library so that:
//!
//! - the solver is testable without spawning processes
//! - modules are reusable (e.g., embedding the solver in other tools)
//! - presentation code (tables, plots, exports) stays separate from the math

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod solve;
