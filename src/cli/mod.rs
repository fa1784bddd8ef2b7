//! Command-line parsing for the step sequence generator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the solver/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{CurveSpec, RunConfig};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "steps", version, about = "Quadratic step sequence generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a sequence and print the step table (plus optional plot/exports).
    Gen(GenArgs),
    /// Query a single element: print its value and step delta.
    At(AtArgs),
    /// Plot a previously exported sequence JSON.
    Plot(PlotArgs),
}

/// Curve parameters shared by `gen` and `at`.
#[derive(Debug, Args, Clone)]
pub struct CurveArgs {
    /// Sequence length (must be >= 3).
    #[arg(short = 'n', long, default_value_t = 10)]
    pub length: usize,

    /// First value.
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Last value (should exceed the first for an increasing sequence).
    #[arg(long, default_value_t = 0.7)]
    pub end: f64,

    /// Pinned first step (second value = start + first step).
    #[arg(long, default_value_t = 0.05)]
    pub first_delta: f64,

    /// Use the natural t² ease-in curve instead of pinning the first step.
    #[arg(long)]
    pub natural: bool,
}

impl CurveArgs {
    pub fn to_spec(&self) -> CurveSpec {
        CurveSpec {
            n: self.length,
            start: self.start,
            end: self.end,
            first_delta: if self.natural {
                None
            } else {
                Some(self.first_delta)
            },
        }
    }
}

/// Options for generating a full sequence.
#[derive(Debug, Parser, Clone)]
pub struct GenArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the step table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the sequence (spec + values) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

impl GenArgs {
    pub fn to_config(&self) -> RunConfig {
        RunConfig {
            spec: self.curve.to_spec(),
            plot: self.plot && !self.no_plot,
            plot_width: self.width,
            plot_height: self.height,
            export_steps: self.export.clone(),
            export_curve: self.export_curve.clone(),
        }
    }
}

/// Options for a single-element query.
#[derive(Debug, Parser)]
pub struct AtArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Index to query (0-based, must be < length).
    #[arg(long)]
    pub ith: usize,
}

/// Options for plotting a saved sequence.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Sequence JSON file produced by `steps gen --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
