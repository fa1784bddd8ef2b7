//! Export the step table to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::StepRow;
use crate::error::AppError;

/// Write step diagnostics to a CSV file.
///
/// Empty fields mark undefined steps (index 0, or a relative step over a
/// zero base).
pub fn write_steps_csv(path: &Path, rows: &[StepRow]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "index,value,abs_step,rel_step")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for r in rows {
        let abs = if r.index == 0 {
            String::new()
        } else {
            format!("{:.10}", r.abs_step)
        };
        let rel = r
            .rel_step
            .map(|v| format!("{v:.10}"))
            .unwrap_or_default();
        writeln!(file, "{},{:.10},{abs},{rel}", r.index, r.value)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
