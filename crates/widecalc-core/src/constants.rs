//! Representation constants and default thresholds.

/// Radix of a digit buffer.
pub const DIGIT_BASE: i64 = 10;

/// Default transform length at or above which the two half-transforms run
/// as a fork-join task pair.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Exit codes for the command-line driver.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Division by zero or negative exponent.
    pub const ERROR_ARITHMETIC: i32 = 2;
    /// An operand could not be parsed.
    pub const ERROR_INPUT: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
