//! Step diagnostics and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the solver stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{Element, RunConfig, StepRow};

/// Compute per-element diagnostics: absolute and relative steps.
///
/// Index 0 has no predecessor, so its `abs_step` is `0` and `rel_step` is
/// `None`. `rel_step` is also `None` whenever the previous value is zero.
pub fn build_step_rows(values: &[f64]) -> Vec<StepRow> {
    let mut out = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        if index == 0 {
            out.push(StepRow {
                index,
                value,
                abs_step: 0.0,
                rel_step: None,
            });
            continue;
        }

        let prev = values[index - 1];
        let abs_step = value - prev;
        let rel_step = if prev != 0.0 {
            Some(abs_step / prev)
        } else {
            None
        };
        out.push(StepRow {
            index,
            value,
            abs_step,
            rel_step,
        });
    }
    out
}

/// Format the run header (mode, length, endpoints).
pub fn format_run_summary(config: &RunConfig) -> String {
    let spec = &config.spec;
    let mut out = String::new();

    out.push_str("=== steps - Quadratic Step Sequence ===\n");
    out.push_str(&format!("Mode: {}\n", spec.mode_label()));
    out.push_str(&format!(
        "Length: n={} | range=[{:.6}, {:.6}] | span={:.6}\n",
        spec.n,
        spec.start,
        spec.end,
        spec.span()
    ));

    out
}

/// Format the step table: index, value, absolute step, relative step (%).
pub fn format_step_table(rows: &[StepRow]) -> String {
    let mut out = String::new();

    out.push_str(
        format!(
            "{:>5} {:>14} {:>14} {:>12}\n",
            "i", "value", "abs_step", "rel_step_%"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:->5} {:->14} {:->14} {:->12}\n", "", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        let abs = if r.index == 0 {
            format!("{:>14}", "")
        } else {
            format!("{:>14.6}", r.abs_step)
        };
        let rel = match r.rel_step {
            Some(rel) => format!("{:>12.2}", rel * 100.0),
            None => format!("{:>12}", ""),
        };
        out.push_str(format!("{:>5} {:>14.6} {abs} {rel}\n", r.index, r.value).trim_end());
        out.push('\n');
    }

    out
}

/// Format a single-element query result.
pub fn format_element(ith: usize, element: &Element) -> String {
    format!(
        "i={ith}: value={:.6} delta={:.6}",
        element.value, element.delta
    )
}
