//! Exit code constants for the greenlight CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Diff parse failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Input was not recognizable as a unified diff.
pub const PARSE_FAILURE: i32 = 2;
