//! Example execution: capture, compare, record.
//!
//! Examples run strictly one at a time on the calling thread. Each action runs
//! under its own [`CaptureGuard`], so the sink is released before the next
//! example starts, even when the action fails or panics.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::core::compare::first_mismatch;
use crate::core::types::{RunResult, RunSummary};
use crate::error::{HarnessError, Result};
use crate::example::Example;
use crate::registry::Registry;
use crate::sink::CaptureGuard;

/// Stateless runner over a registry snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Runner<'a> {
    registry: &'a Registry,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Run every example in registration order.
    pub fn run_all(&self) -> Vec<RunResult> {
        self.run_selected(self.registry.list())
    }

    /// Run a single example by name.
    pub fn run_one(&self, name: &str) -> Result<RunResult> {
        let example = self.registry.get(name)?;
        Ok(execute(example))
    }

    /// Run the given examples in iteration order. A failing example never
    /// stops the batch.
    pub fn run_selected<'e>(
        &self,
        examples: impl IntoIterator<Item = &'e Example>,
    ) -> Vec<RunResult> {
        let results: Vec<RunResult> = examples.into_iter().map(execute).collect();
        let summary = RunSummary::from_results(&results);
        info!(
            passed = summary.passed,
            failed = summary.failed,
            total = summary.total,
            "batch finished"
        );
        results
    }
}

/// Execute one example under capture and compare its output.
#[instrument(skip_all, fields(example = %example.name()))]
pub fn execute(example: &Example) -> RunResult {
    let started = Instant::now();
    let guard = CaptureGuard::begin();
    let outcome = {
        let _quiet = QuietPanics::enter();
        panic::catch_unwind(AssertUnwindSafe(|| example.invoke()))
    };
    let mut actual_output = guard.finish();
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let error = match outcome {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(format!("{err:#}")),
        Err(payload) => Some(panic_message(payload.as_ref())),
    };

    let expected_output = example.expected_output();
    let mismatch_index = match &error {
        None => first_mismatch(&actual_output, expected_output),
        Some(message) => {
            let failure = HarnessError::ExampleExecution {
                name: example.name().to_string(),
                message: message.clone(),
            };
            warn!(error = %failure, "example action failed");
            let synthetic_start = actual_output.len();
            actual_output.extend(message.split('\n').map(str::to_string));
            // The synthetic lines always fail the run, even if they happen to
            // match the expected lines.
            first_mismatch(&actual_output, expected_output).or(Some(synthetic_start))
        }
    };

    let passed = mismatch_index.is_none();
    debug!(passed, mismatch_index = ?mismatch_index, duration_ms, "example finished");

    RunResult {
        name: example.name().to_string(),
        actual_output,
        expected_output: expected_output.to_vec(),
        passed,
        mismatch_index,
        error,
        duration_ms,
    }
}

thread_local! {
    static PANICS_QUIET: Cell<bool> = const { Cell::new(false) };
}

static INSTALL_QUIET_HOOK: Once = Once::new();

/// Silences the panic hook on this thread while an example action runs. The
/// panic is reported through the synthetic output line instead.
struct QuietPanics {
    previous: bool,
}

impl QuietPanics {
    fn enter() -> Self {
        INSTALL_QUIET_HOOK.call_once(|| {
            let fallback = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                if !PANICS_QUIET.with(Cell::get) {
                    fallback(info);
                }
            }));
        });
        Self {
            previous: PANICS_QUIET.with(|quiet| quiet.replace(true)),
        }
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        PANICS_QUIET.with(|quiet| quiet.set(self.previous));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink;
    use crate::test_support::{echo, failing, panicking, registry_of};

    #[test]
    fn adder_passes() {
        let mut registry = Registry::new();
        registry
            .register(
                "adder",
                || {
                    crate::say!("{}", 1 + 2);
                    Ok(())
                },
                ["3"],
            )
            .expect("register");

        let result = Runner::new(&registry).run_one("adder").expect("run");
        assert!(result.passed);
        assert_eq!(result.actual_output, vec!["3"]);
        assert_eq!(result.mismatch_index, None);
        assert_eq!(result.error, None);
    }

    #[test]
    fn one_line_short_fails_at_shorter_length() {
        let registry = registry_of(vec![Example::new(
            "short",
            || {
                sink::write_line("a");
                Ok(())
            },
            ["a", "b"],
        )]);
        let result = Runner::new(&registry).run_one("short").expect("run");
        assert!(!result.passed);
        assert_eq!(result.mismatch_index, Some(1));
    }

    #[test]
    fn error_becomes_synthetic_line() {
        let registry = registry_of(vec![failing("bad", "boom")]);
        let result = Runner::new(&registry).run_one("bad").expect("run");
        assert!(!result.passed);
        assert_eq!(result.actual_output, vec!["boom"]);
        assert_eq!(result.mismatch_index, Some(0));
        assert_eq!(result.error.as_deref(), Some("boom"));
        assert!(!sink::is_capturing());
    }

    #[test]
    fn error_matching_expected_text_still_fails() {
        let registry = registry_of(vec![Example::new(
            "sneaky",
            || anyhow::bail!("boom"),
            ["boom"],
        )]);
        let result = Runner::new(&registry).run_one("sneaky").expect("run");
        assert!(!result.passed);
        assert_eq!(result.mismatch_index, Some(0));
    }

    #[test]
    fn failing_example_does_not_abort_batch() {
        let registry = registry_of(vec![
            echo("first", &["1"]),
            failing("bad", "boom"),
            panicking("worse", "kaboom"),
            echo("last", &["2"]),
        ]);
        let results = Runner::new(&registry).run_all();
        let outcomes: Vec<(&str, bool)> = results
            .iter()
            .map(|result| (result.name.as_str(), result.passed))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                ("first", true),
                ("bad", false),
                ("worse", false),
                ("last", true)
            ]
        );
        assert_eq!(results[2].actual_output, vec!["panicked: kaboom"]);
        assert!(!sink::is_capturing());
    }

    #[test]
    fn output_before_failure_is_kept() {
        let registry = registry_of(vec![Example::new(
            "partial",
            || {
                sink::write_line("first");
                anyhow::bail!("stopped")
            },
            ["first", "second"],
        )]);
        let result = Runner::new(&registry).run_one("partial").expect("run");
        assert_eq!(result.actual_output, vec!["first", "stopped"]);
        assert_eq!(result.mismatch_index, Some(1));
    }

    #[test]
    fn multi_line_error_splits_into_lines() {
        let registry = registry_of(vec![failing("layered", "first\nsecond")]);
        let result = Runner::new(&registry).run_one("layered").expect("run");
        assert_eq!(result.actual_output, vec!["first", "second"]);
        assert_eq!(result.mismatch_index, Some(0));
    }

    #[test]
    fn multi_line_error_after_output_points_at_first_error_line() {
        let registry = registry_of(vec![Example::new(
            "late",
            || {
                sink::write_line("kept");
                anyhow::bail!("first\nsecond")
            },
            ["kept", "first", "second"],
        )]);
        let result = Runner::new(&registry).run_one("late").expect("run");
        assert_eq!(result.actual_output, vec!["kept", "first", "second"]);
        assert!(!result.passed);
        assert_eq!(result.mismatch_index, Some(1));
    }

    #[test]
    fn panic_hook_is_quiet_only_while_action_runs() {
        let observed = std::rc::Rc::new(Cell::new(false));
        let seen = observed.clone();
        let registry = registry_of(vec![Example::new(
            "observer",
            move || {
                seen.set(PANICS_QUIET.with(Cell::get));
                Ok(())
            },
            Vec::<String>::new(),
        )]);
        Runner::new(&registry).run_all();
        assert!(observed.get());
        assert!(!PANICS_QUIET.with(Cell::get));

        let registry = registry_of(vec![panicking("crash", "loud")]);
        let result = Runner::new(&registry).run_one("crash").expect("run");
        assert_eq!(result.actual_output, vec!["panicked: loud"]);
        assert!(!PANICS_QUIET.with(Cell::get));
    }

    #[test]
    fn empty_registry_runs_nothing() {
        let registry = Registry::new();
        let results = Runner::new(&registry).run_all();
        assert!(results.is_empty());
        assert_eq!(RunSummary::from_results(&results).exit_code(), 0);
    }

    #[test]
    fn run_one_unknown_is_not_found() {
        let registry = Registry::new();
        let err = Runner::new(&registry).run_one("ghost").expect_err("missing");
        assert!(matches!(err, HarnessError::NotFound(_)));
    }

    #[test]
    fn runs_are_independent() {
        let registry = registry_of(vec![echo("again", &["x", "y"])]);
        let runner = Runner::new(&registry);
        let first = runner.run_one("again").expect("first");
        let second = runner.run_one("again").expect("second");
        assert_eq!(first.actual_output, second.actual_output);
        assert!(first.passed && second.passed);
    }
}
