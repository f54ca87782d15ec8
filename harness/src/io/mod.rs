//! I/O helpers for the example runner.

pub mod report_file;
