//! Console rendering of run results.
//!
//! Line formats are stable: `<name>: PASS`, `<name>: FAIL at line <index>`
//! and the `<passed>/<total> passed` summary.

use crate::core::types::{RunResult, RunSummary};

const MISSING: &str = "<missing>";

/// One status line per result.
pub fn result_line(result: &RunResult) -> String {
    match (result.passed, result.mismatch_index) {
        (true, _) => format!("{}: PASS", result.name),
        (false, Some(index)) => format!("{}: FAIL at line {}", result.name, index),
        (false, None) => format!("{}: FAIL", result.name),
    }
}

/// Indented detail lines shown under a failing result in verbose mode.
pub fn mismatch_detail(result: &RunResult) -> Vec<String> {
    let Some((expected, actual)) = result.mismatch_lines() else {
        return Vec::new();
    };
    let mut lines = vec![
        format!("  expected: {}", expected.unwrap_or(MISSING)),
        format!("  actual:   {}", actual.unwrap_or(MISSING)),
    ];
    if let Some(error) = &result.error {
        lines.push(format!("  error:    {error}"));
    }
    lines
}

/// Status lines for every result, followed by the summary line.
///
/// `summary` is passed in rather than derived so callers can account for
/// examples that never ran (unknown names).
pub fn render(results: &[RunResult], summary: &RunSummary, verbose: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(results.len() + 1);
    for result in results {
        lines.push(result_line(result));
        if verbose && !result.passed {
            lines.extend(mismatch_detail(result));
        }
    }
    lines.push(summary.to_string());
    lines
}
