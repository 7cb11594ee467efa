//! # widecalc-core
//!
//! Arbitrary-precision signed base-10 integers. Magnitudes are kept as
//! power-of-two sized digit buffers and multiplied by convolution through a
//! complex FFT or an exact number-theoretic transform.

pub mod calculator;
pub mod constants;
pub mod digits;
pub mod error;
pub(crate) mod magnitude;
pub mod options;
pub mod strategy;
pub mod wide_int;

// Re-exports
pub use calculator::Calculator;
pub use constants::{exit_codes, DEFAULT_PARALLEL_THRESHOLD, DIGIT_BASE};
pub use digits::DigitBuffer;
pub use error::{ParseWideIntError, WideIntError};
pub use options::Options;
pub use strategy::{build_multiplier, Multiplier, SchoolbookStrategy, TransformStrategy};
pub use wide_int::WideInt;
pub use widecalc_transform::TransformKind;

/// Parse two decimal operands and multiply them with the shared calculator.
///
/// # Example
/// ```
/// let product = widecalc_core::multiply_str("-12345", "67890").unwrap();
/// assert_eq!(product.to_string(), "-838102050");
/// ```
pub fn multiply_str(a: &str, b: &str) -> Result<WideInt, WideIntError> {
    let a: WideInt = a.parse()?;
    let b: WideInt = b.parse()?;
    Ok(Calculator::shared().multiply(&a, &b))
}
