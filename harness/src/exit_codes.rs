//! Stable exit codes for the example runner.

/// Every selected example passed.
pub const OK: i32 = 0;
/// At least one example failed, was missing, or the command itself errored.
pub const FAILED: i32 = 1;
