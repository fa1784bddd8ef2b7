//! Read/write sequence JSON files.
//!
//! Sequence JSON is the "portable" representation of a generated sequence:
//! - the spec it was generated from (n, start, end, pinned first step)
//! - the generated values
//! - run metadata (tool name, generation date)
//!
//! The schema is defined by `domain::SequenceFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveSpec, SequenceFile};
use crate::error::AppError;

/// Build a [`SequenceFile`] stamped with today's date.
pub fn sequence_file(spec: &CurveSpec, values: Vec<f64>) -> SequenceFile {
    SequenceFile {
        tool: "steps".to_string(),
        generated: Utc::now().date_naive(),
        spec: *spec,
        values,
    }
}

/// Write a sequence JSON file.
pub fn write_sequence_json(path: &Path, file: &SequenceFile) -> Result<(), AppError> {
    let out = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create sequence JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::new(2, format!("Failed to write sequence JSON: {e}")))?;

    Ok(())
}

/// Read a sequence JSON file.
pub fn read_sequence_json(path: &Path) -> Result<SequenceFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open sequence JSON '{}': {e}", path.display()),
        )
    })?;
    let sequence: SequenceFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid sequence JSON: {e}")))?;
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sequence_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.json");

        let file = SequenceFile {
            tool: "steps".to_string(),
            generated: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            spec: CurveSpec {
                n: 10,
                start: 0.0,
                end: 0.7,
                first_delta: Some(0.05),
            },
            values: crate::solve::solve_sequence(&CurveSpec {
                n: 10,
                start: 0.0,
                end: 0.7,
                first_delta: Some(0.05),
            })
            .unwrap(),
        };

        write_sequence_json(&path, &file).unwrap();
        let loaded = read_sequence_json(&path).unwrap();

        assert_eq!(loaded.tool, file.tool);
        assert_eq!(loaded.generated, file.generated);
        assert_eq!(loaded.spec, file.spec);
        assert_eq!(loaded.values, file.values);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_sequence_json(Path::new("/nonexistent/seq.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seq.json"));
    }
}
