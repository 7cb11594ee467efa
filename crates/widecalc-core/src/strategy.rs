//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface for magnitude multiplication.
//! Strategies include the transform pipeline (complex FFT or NTT, sequential
//! or fork-join) and a schoolbook reference.

use std::sync::Arc;

use tracing::debug;
use widecalc_transform::{convolution, Schedule, TransformEngine, TransformKind};

use crate::digits::DigitBuffer;
use crate::options::Options;

/// Narrow interface for multiplying magnitudes.
pub trait Multiplier: Send + Sync {
    /// Multiply two canonical magnitudes.
    fn multiply(&self, a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer;

    /// Square a magnitude (may be optimized over multiply).
    fn square(&self, a: &DigitBuffer) -> DigitBuffer {
        self.multiply(a, a)
    }

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Transform-based multiplication: forward transforms, pointwise product,
/// inverse transform, carry.
pub struct TransformStrategy {
    kind: TransformKind,
    engine: TransformEngine,
}

impl TransformStrategy {
    #[must_use]
    pub fn new(kind: TransformKind, engine: TransformEngine) -> Self {
        Self { kind, engine }
    }

    /// Complex floating-point FFT.
    #[must_use]
    pub fn fft(engine: TransformEngine) -> Self {
        Self::new(TransformKind::Complex, engine)
    }

    /// Exact prime-field NTT.
    #[must_use]
    pub fn ntt(engine: TransformEngine) -> Self {
        Self::new(TransformKind::Modular, engine)
    }
}

impl Multiplier for TransformStrategy {
    fn multiply(&self, a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer {
        if a.is_zero() || b.is_zero() {
            return DigitBuffer::zero();
        }
        let raw = convolution::convolve(a.significant(), b.significant(), self.kind, &self.engine);
        DigitBuffer::from_raw(raw).0
    }

    fn square(&self, a: &DigitBuffer) -> DigitBuffer {
        if a.is_zero() {
            return DigitBuffer::zero();
        }
        let raw = convolution::square(a.significant(), self.kind, &self.engine);
        DigitBuffer::from_raw(raw).0
    }

    fn name(&self) -> &'static str {
        match (self.kind, self.engine.schedule()) {
            (TransformKind::Complex, Schedule::Parallel { .. }) => "ParallelFFT",
            (TransformKind::Complex, _) => "FFT",
            (TransformKind::Modular, Schedule::Parallel { .. }) => "ParallelNTT",
            (TransformKind::Modular, _) => "NTT",
        }
    }
}

/// O(n^2) digit-by-digit multiplication, kept as an independent reference.
pub struct SchoolbookStrategy;

impl SchoolbookStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchoolbookStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for SchoolbookStrategy {
    fn multiply(&self, a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer {
        let (a, b) = (a.significant(), b.significant());
        let mut raw = vec![0i64; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                raw[i + j] += x * y;
            }
        }
        DigitBuffer::from_raw(raw).0
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}

/// Build the multiplier described by `opts`.
#[must_use]
pub fn build_multiplier(opts: &Options) -> Arc<dyn Multiplier> {
    let multiplier: Arc<dyn Multiplier> = if opts.schoolbook {
        Arc::new(SchoolbookStrategy::new())
    } else {
        let engine = if opts.parallel {
            TransformEngine::parallel(opts.parallel_threshold)
        } else {
            TransformEngine::sequential()
        };
        Arc::new(TransformStrategy::new(opts.transform, engine))
    };
    debug!(strategy = multiplier.name(), "selected multiplier");
    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategies() -> Vec<Box<dyn Multiplier>> {
        vec![
            Box::new(TransformStrategy::fft(TransformEngine::sequential())),
            Box::new(TransformStrategy::ntt(TransformEngine::sequential())),
            Box::new(TransformStrategy::fft(TransformEngine::parallel(4))),
            Box::new(TransformStrategy::ntt(TransformEngine::new(Schedule::Recursive))),
            Box::new(SchoolbookStrategy::new()),
        ]
    }

    #[test]
    fn multiply_small() {
        let a = DigitBuffer::from_u128(12_345);
        let b = DigitBuffer::from_u128(67_890);
        for s in strategies() {
            assert_eq!(s.multiply(&a, &b), DigitBuffer::from_u128(838_102_050), "{}", s.name());
        }
    }

    #[test]
    fn square_small() {
        let a = DigitBuffer::from_u128(99_999);
        for s in strategies() {
            assert_eq!(s.square(&a), DigitBuffer::from_u128(9_999_800_001), "{}", s.name());
        }
    }

    #[test]
    fn multiply_by_zero() {
        let a = DigitBuffer::from_u128(12_345);
        for s in strategies() {
            assert_eq!(s.multiply(&a, &DigitBuffer::zero()), DigitBuffer::zero(), "{}", s.name());
            assert_eq!(s.square(&DigitBuffer::zero()), DigitBuffer::zero(), "{}", s.name());
        }
    }

    #[test]
    fn multiply_asymmetric_lengths() {
        let a = DigitBuffer::from_u128(u128::MAX);
        let b = DigitBuffer::from_u128(7);
        let reference = SchoolbookStrategy::new().multiply(&a, &b);
        assert_eq!(reference.to_string(), "2381976568446569244243622252022377480185");
        for s in strategies() {
            assert_eq!(s.multiply(&a, &b), reference, "{}", s.name());
        }
    }

    #[test]
    fn strategy_names() {
        assert_eq!(TransformStrategy::fft(TransformEngine::sequential()).name(), "FFT");
        assert_eq!(TransformStrategy::ntt(TransformEngine::parallel(8)).name(), "ParallelNTT");
        assert_eq!(SchoolbookStrategy::new().name(), "Schoolbook");
    }

    #[test]
    fn build_from_options() {
        let opts = Options {
            transform: TransformKind::Modular,
            parallel: false,
            ..Default::default()
        };
        assert_eq!(build_multiplier(&opts).name(), "NTT");
        assert_eq!(build_multiplier(&Options::default()).name(), "ParallelFFT");
        let opts = Options {
            schoolbook: true,
            ..Default::default()
        };
        assert_eq!(build_multiplier(&opts).name(), "Schoolbook");
    }
}
