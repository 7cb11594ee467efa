//! # widecalc-transform
//!
//! Discrete transforms over power-of-two sequences, used to turn digit-wise
//! multiplication into pointwise multiplication.
//!
//! Two element domains are supported: complex numbers (`Complex<f64>`) and
//! residues modulo the NTT prime `998244353`. Both run through the same
//! radix-2 kernels, scheduled sequentially or as fork-join tasks on rayon.

pub mod convolution;
pub mod domain;
pub mod engine;
pub(crate) mod kernel;
pub mod modular;
pub mod twiddle_cache;

// Re-exports
pub use convolution::{convolve, square, transform_len, TransformKind};
pub use domain::{Direction, TransformDomain};
pub use engine::{Schedule, TransformEngine, TransformError};
pub use modular::Residue;
