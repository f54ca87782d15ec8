//! CLI command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use harness::io::report_file::{RunReport, write_report};
use harness::report::{mismatch_detail, render, result_line};
use harness::{Example, HarnessError, Registry, RunResult, RunSummary, Runner, exit_codes};
use tracing::{debug, info};

/// Options for `playground run`.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub names: Vec<String>,
    pub filter: Option<String>,
    pub verbose: bool,
    pub report: Option<PathBuf>,
}

/// Run the selected examples, print the report and return the exit code.
pub fn run_examples(registry: &Registry, options: &RunOptions) -> Result<i32> {
    let runner = Runner::new(registry);
    let mut missing = 0;

    let results: Vec<RunResult> = if !options.names.is_empty() {
        let mut results = Vec::with_capacity(options.names.len());
        for name in &options.names {
            match runner.run_one(name) {
                Ok(result) => results.push(result),
                Err(HarnessError::NotFound(name)) => {
                    eprintln!("{name}: no such example");
                    missing += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
        results
    } else if let Some(pattern) = &options.filter {
        let selected = registry.filter(pattern).context("compile --filter")?;
        runner.run_selected(selected)
    } else {
        runner.run_all()
    };
    debug!(ran = results.len(), missing, "examples executed");

    let mut summary = RunSummary::from_results(&results);
    for _ in 0..missing {
        summary.record_missing();
    }

    for line in render(&results, &summary, options.verbose) {
        println!("{line}");
    }

    if let Some(path) = &options.report {
        write_report(path, &RunReport::new(results, summary))
            .with_context(|| format!("write report {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(summary.exit_code())
}

/// Print `<name>\t<topic>` for each example.
pub fn list_examples(registry: &Registry, filter: Option<&str>) -> Result<i32> {
    let print = |example: &Example| {
        println!("{}\t{}", example.name(), example.topic().unwrap_or("-"));
    };
    match filter {
        Some(pattern) => registry
            .filter(pattern)
            .context("compile --filter")?
            .for_each(print),
        None => registry.list().for_each(print),
    }
    Ok(exit_codes::OK)
}

/// Run one example and print its captured output, then its status line.
pub fn show_example(registry: &Registry, name: &str) -> Result<i32> {
    let result = match Runner::new(registry).run_one(name) {
        Ok(result) => result,
        Err(HarnessError::NotFound(name)) => {
            eprintln!("{name}: no such example");
            return Ok(exit_codes::FAILED);
        }
        Err(err) => return Err(err.into()),
    };
    for line in &result.actual_output {
        println!("{line}");
    }
    println!("{}", result_line(&result));
    if !result.passed {
        for line in mismatch_detail(&result) {
            println!("{line}");
        }
    }
    Ok(RunSummary::from_results(std::slice::from_ref(&result)).exit_code())
}
