//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the solver
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{AtArgs, Command, GenArgs, PlotArgs};
use crate::error::AppError;

/// Entry point for the `steps` binary.
pub fn run() -> Result<(), AppError> {
    // We want `steps` and `steps -n 12` to behave like `steps gen ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the short invocation ergonomic.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Gen(args) => handle_gen(args),
        Command::At(args) => handle_at(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_gen(args: GenArgs) -> Result<(), AppError> {
    let config = args.to_config();
    let values = crate::solve::solve_sequence(&config.spec)?;
    let rows = crate::report::build_step_rows(&values);

    println!("{}", crate::report::format_run_summary(&config));
    println!("{}", crate::report::format_step_table(&rows));

    if config.plot {
        let plot =
            crate::plot::render_sequence_plot(&values, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    if let Some(path) = &config.export_steps {
        crate::io::write_steps_csv(path, &rows)?;
    }
    if let Some(path) = &config.export_curve {
        let file = crate::io::sequence_file(&config.spec, values);
        crate::io::write_sequence_json(path, &file)?;
    }

    Ok(())
}

fn handle_at(args: AtArgs) -> Result<(), AppError> {
    let spec = args.curve.to_spec();
    let element = crate::solve::solve_element(&spec, args.ith)?;
    println!("{}", crate::report::format_element(args.ith, &element));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_sequence_json(&args.curve)?;
    let plot = crate::plot::render_sequence_file_plot(&file, args.width, args.height);
    println!("{plot}");
    Ok(())
}

/// Rewrite argv so `steps` defaults to `steps gen`.
///
/// Rules:
/// - `steps`                      -> `steps gen`
/// - `steps -n 12 ...`            -> `steps gen -n 12 ...`
/// - `steps --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("gen".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "gen" | "at" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "gen flags".
    if arg1.starts_with('-') {
        argv.insert(1, "gen".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
