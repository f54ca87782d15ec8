//! Test-only helpers for building examples, registries and results.

use crate::core::types::RunResult;
use crate::example::Example;
use crate::registry::Registry;
use crate::sink;

/// Example that writes `lines` and expects exactly `lines`.
pub fn echo(name: &str, lines: &[&str]) -> Example {
    let owned: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
    let expected = owned.clone();
    Example::new(
        name,
        move || {
            for line in &owned {
                sink::write_line(line);
            }
            Ok(())
        },
        expected,
    )
}

/// Example that writes nothing, expects nothing and returns `message` as an error.
pub fn failing(name: &str, message: &str) -> Example {
    let message = message.to_string();
    Example::new(
        name,
        move || Err(anyhow::anyhow!("{message}")),
        Vec::<String>::new(),
    )
}

/// Example that panics with `message`.
pub fn panicking(name: &str, message: &'static str) -> Example {
    Example::new(name, move || panic!("{}", message), Vec::<String>::new())
}

/// Registry holding `examples` in order. Panics on invalid or duplicate names.
pub fn registry_of(examples: Vec<Example>) -> Registry {
    let mut registry = Registry::new();
    for example in examples {
        registry.insert(example).expect("register test example");
    }
    registry
}

/// Deterministic result with no output.
pub fn result(name: &str, passed: bool) -> RunResult {
    RunResult {
        name: name.to_string(),
        actual_output: Vec::new(),
        expected_output: Vec::new(),
        passed,
        mismatch_index: if passed { None } else { Some(0) },
        error: None,
        duration_ms: 0,
    }
}

/// Scratch directory for report files, removed on drop.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}
