//! Batch-level tests for the registry and runner working together.
//!
//! These drive `Runner::run_all` over registries mixing passing, short,
//! failing and panicking examples to verify ordering, isolation of failures
//! and the rendered console report.

use harness::io::report_file::{RunReport, load_report, write_report};
use harness::report::render;
use harness::sink;
use harness::test_support::{echo, failing, panicking, registry_of, scratch_dir};
use harness::{Example, HarnessError, Registry, RunSummary, Runner, exit_codes, say};

/// Mixed batch:
///
/// ```text
/// greet   writes 2 lines, expects 2   -> PASS
/// short   writes 1 line,  expects 2   -> FAIL at line 1
/// bad     errors "boom"               -> FAIL at line 0
/// crash   panics                      -> FAIL at line 0
/// tail    writes 1 line,  expects 1   -> PASS
/// ```
#[test]
fn mixed_batch_reports_every_example_in_order() {
    let registry = registry_of(vec![
        echo("greet", &["Hello, Anna!", "Hello, Brian!"]),
        Example::new(
            "short",
            || {
                say!("only one");
                Ok(())
            },
            ["only one", "and another"],
        ),
        failing("bad", "boom"),
        panicking("crash", "index out of bounds"),
        echo("tail", &["done"]),
    ]);

    let results = Runner::new(&registry).run_all();
    let lines = render(&results, &RunSummary::from_results(&results), false);

    assert_eq!(
        lines,
        vec![
            "greet: PASS",
            "short: FAIL at line 1",
            "bad: FAIL at line 0",
            "crash: FAIL at line 0",
            "tail: PASS",
            "2/5 passed",
        ]
    );
    assert_eq!(
        RunSummary::from_results(&results).exit_code(),
        exit_codes::FAILED
    );
    assert!(!sink::is_capturing());
}

#[test]
fn bad_example_does_not_poison_later_runs() {
    let mut registry = Registry::new();
    registry
        .register("bad", || anyhow::bail!("boom"), Vec::<String>::new())
        .expect("register bad");
    registry
        .register(
            "adder",
            || {
                say!("{}", 1 + 2);
                Ok(())
            },
            ["3"],
        )
        .expect("register adder");

    let runner = Runner::new(&registry);
    let bad = runner.run_one("bad").expect("run bad");
    assert!(!bad.passed);

    let results = runner.run_all();
    assert_eq!(results.len(), 2);
    assert!(!results[0].passed);
    assert!(results[1].passed);
}

#[test]
fn all_passing_batch_exits_ok() {
    let registry = registry_of(vec![echo("a", &["1"]), echo("b", &[]), echo("c", &["x", ""])]);
    let results = Runner::new(&registry).run_all();
    let summary = RunSummary::from_results(&results);
    assert_eq!(summary.to_string(), "3/3 passed");
    assert_eq!(summary.exit_code(), exit_codes::OK);
}

#[test]
fn duplicate_registration_keeps_first_example() {
    let mut registry = registry_of(vec![echo("same", &["first"])]);
    let err = registry
        .insert(echo("same", &["second"]))
        .expect_err("duplicate");
    assert_eq!(err.to_string(), "example same is already registered");

    let result = Runner::new(&registry).run_one("same").expect("run");
    assert_eq!(result.actual_output, vec!["first"]);
}

#[test]
fn filtered_run_keeps_registration_order() {
    let registry = registry_of(vec![
        echo("enums/barcode", &[]).with_topic("enums"),
        echo("functions/greet", &[]).with_topic("functions"),
        echo("enums/planet", &[]).with_topic("enums"),
    ]);
    let runner = Runner::new(&registry);
    let results = runner.run_selected(registry.filter("^enums").expect("filter"));
    let names: Vec<&str> = results.iter().map(|result| result.name.as_str()).collect();
    assert_eq!(names, vec!["enums/barcode", "enums/planet"]);
}

#[test]
fn unknown_example_is_recoverable() {
    let registry = registry_of(vec![echo("known", &["ok"])]);
    let runner = Runner::new(&registry);
    match runner.run_one("unknown") {
        Err(HarnessError::NotFound(name)) => assert_eq!(name, "unknown"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(runner.run_one("known").expect("known").passed);
}

#[test]
fn report_file_round_trips_results() {
    let temp = scratch_dir();
    let path = temp.path().join("report.json");
    let registry = registry_of(vec![echo("a", &["1"]), failing("b", "nope")]);
    let results = Runner::new(&registry).run_all();
    let summary = RunSummary::from_results(&results);

    write_report(&path, &RunReport::new(results.clone(), summary)).expect("write");
    let loaded = load_report(&path).expect("load");

    assert_eq!(loaded.results, results);
    assert_eq!(loaded.results[1].error.as_deref(), Some("nope"));
    assert_eq!(loaded.summary, summary);
}
