//! Domain types used throughout the tool.
//!
//! This module defines:
//!
//! - sequence parameters (`CurveSpec`)
//! - solver outputs (`Element`) and per-element diagnostics (`StepRow`)
//! - run configuration resolved from CLI flags (`RunConfig`)
//! - the portable sequence JSON schema (`SequenceFile`)

pub mod types;

pub use types::*;
