//! Exit code constants for the presets CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown preset, unparseable time)
//! - 2: Invalid preset definition
//! - 3: Configuration failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown preset, or invalid time input.
pub const USER_ERROR: i32 = 1;

/// A preset definition was rejected at construction.
pub const INVALID_PRESET: i32 = 2;

/// Configuration could not be read, parsed, or validated.
pub const CONFIG_FAILURE: i32 = 3;
