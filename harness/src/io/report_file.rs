//! JSON report of a run, written on request after the console report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{RunResult, RunSummary};

/// Persisted form of one batch run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunReport {
    /// RFC 3339 UTC timestamp of report creation.
    pub generated_at: String,
    pub summary: RunSummary,
    pub results: Vec<RunResult>,
}

impl RunReport {
    pub fn new(results: Vec<RunResult>, summary: RunSummary) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            summary,
            results,
        }
    }
}

/// Serialize `report` to pretty-printed JSON with trailing newline.
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut payload = serde_json::to_string_pretty(report).context("serialize report")?;
    payload.push('\n');
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), results = report.results.len(), "report written");
    Ok(())
}

/// Read a report back, mainly for tooling and tests.
pub fn load_report(path: &Path) -> Result<RunReport> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{result, scratch_dir};

    #[test]
    fn writes_pretty_json_with_newline() {
        let temp = scratch_dir();
        let path = temp.path().join("nested").join("report.json");
        let results = vec![result("a", true), result("b", false)];
        let summary = RunSummary::from_results(&results);
        let report = RunReport::new(results, summary);

        write_report(&path, &report).expect("write");

        let raw = fs::read_to_string(&path).expect("read");
        assert!(raw.ends_with("}\n"));
        let loaded = load_report(&path).expect("load");
        assert_eq!(loaded, report);
        assert_eq!(loaded.summary.failed, 1);
    }

    #[test]
    fn timestamp_is_utc_rfc3339() {
        let report = RunReport::new(Vec::new(), RunSummary::default());
        assert!(report.generated_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }
}
