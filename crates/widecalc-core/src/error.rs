//! Error types for big-integer operations.

/// Error returned when a string is not a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWideIntError {
    /// No digits were supplied.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character other than an ASCII digit was found.
    #[error("invalid digit {ch:?} at position {index}")]
    InvalidDigit { ch: char, index: usize },
}

/// Error type for fallible `WideInt` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WideIntError {
    /// The divisor of `divide`/`modulo` is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// `power` was called with a negative exponent.
    #[error("negative exponent")]
    NegativeExponent,

    /// The value does not fit in the requested native type.
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },

    /// The input could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseWideIntError),
}
