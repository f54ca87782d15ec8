//! Run outcome types shared by the runner, reports and the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::exit_codes;

/// Outcome of executing one example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub name: String,
    /// Captured lines, followed by the error message if the action failed.
    pub actual_output: Vec<String>,
    pub expected_output: Vec<String>,
    pub passed: bool,
    pub mismatch_index: Option<usize>,
    /// Error or panic message from the action, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl RunResult {
    /// Expected and actual line at the mismatch, `None` where a side has no line.
    pub fn mismatch_lines(&self) -> Option<(Option<&str>, Option<&str>)> {
        let index = self.mismatch_index?;
        Some((
            self.expected_output.get(index).map(String::as_str),
            self.actual_output.get(index).map(String::as_str),
        ))
    }
}

/// Pass/fail counts over a batch of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl RunSummary {
    pub fn from_results(results: &[RunResult]) -> Self {
        let passed = results.iter().filter(|result| result.passed).count();
        Self {
            passed,
            failed: results.len() - passed,
            total: results.len(),
        }
    }

    /// Count an example that could not be run at all (e.g. unknown name).
    pub fn record_missing(&mut self) {
        self.failed += 1;
        self.total += 1;
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            exit_codes::OK
        } else {
            exit_codes::FAILED
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} passed", self.passed, self.total)
    }
}
