//! Named example registry and output-checking runner.
//!
//! An [`Example`] is a small labelled routine that prints through the
//! [`sink`] and declares the lines it is expected to print. The crate keeps
//! the moving parts apart:
//!
//! - **[`core`]**: Pure comparison and summary logic. No I/O, fully testable
//!   in isolation.
//! - **[`sink`]**: The thread-local write sink examples print through, and
//!   the scoped capture that redirects it.
//! - **[`io`]**: Report files written after a run.
//!
//! [`registry`] stores examples in registration order and [`run`] executes
//! them one at a time under capture.

pub mod core;
pub mod error;
pub mod example;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod registry;
pub mod report;
pub mod run;
pub mod sink;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::types::{RunResult, RunSummary};
pub use error::{HarnessError, Result};
pub use example::Example;
pub use registry::Registry;
pub use run::Runner;
