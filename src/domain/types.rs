//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while solving
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters of a constrained monotonic sequence.
///
/// The solver produces `n` strictly increasing values running from `start`
/// to `end`. When `first_delta` is set, the second value is pinned to
/// `start + first_delta` ("pinned mode"); otherwise the curve is the natural
/// `t²` ease-in between the two endpoints ("natural mode").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    /// Sequence length. Must be at least 3.
    pub n: usize,
    /// First value.
    pub start: f64,
    /// Last value. Should exceed `start` for the monotonic-increase semantics.
    pub end: f64,
    /// Pinned first step (`a1 - a0`). `None` selects natural mode.
    pub first_delta: Option<f64>,
}

impl CurveSpec {
    /// Total rise of the sequence (`end - start`).
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Human-readable mode label for terminal output.
    pub fn mode_label(&self) -> String {
        match self.first_delta {
            Some(d) => format!("pinned (first step {d:.6})"),
            None => "natural (t² ease-in)".to_string(),
        }
    }
}

/// Single-element query result: the value at an index and its step delta.
///
/// `delta` is `0` at index 0 (no predecessor), otherwise
/// `sequence[i] - sequence[i-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub value: f64,
    pub delta: f64,
}

/// Per-element diagnostics row for reports and CSV export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRow {
    pub index: usize,
    pub value: f64,
    /// Absolute step from the previous value (`0` at index 0).
    pub abs_step: f64,
    /// Relative step (`abs_step / previous value`), `None` when undefined
    /// (index 0, or a zero previous value).
    pub rel_step: Option<f64>,
}

/// A full run's configuration as understood by the app.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub spec: CurveSpec,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_steps: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

/// A saved sequence file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceFile {
    pub tool: String,
    pub generated: NaiveDate,
    pub spec: CurveSpec,
    pub values: Vec<f64>,
}
