//! Element domains a transform can run over.

use std::f64::consts::TAU;
use std::ops::{Add, Mul, Sub};
use std::sync::{Arc, LazyLock};

use num_complex::Complex;

use crate::twiddle_cache::TwiddleCache;

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Evaluate at the powers of the primitive root.
    Forward,
    /// Interpolate using the reciprocal root.
    Inverse,
}

/// A ring holding a primitive root of unity for every transform length the
/// domain supports.
pub trait TransformDomain:
    Copy + Send + Sync + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + 'static
{
    /// Largest transform length the domain has a primitive root for.
    const MAX_LEN: usize = usize::MAX;

    /// Powers `w^0 .. w^(len/2 - 1)` of a primitive `len`-th root of unity
    /// (its reciprocal for [`Direction::Inverse`]).
    fn twiddles(len: usize, direction: Direction) -> Arc<[Self]>;

    /// Divide by the transform length, as the last step of the inverse.
    #[must_use]
    fn divide_by_len(self, len: usize) -> Self;
}

static COMPLEX_TWIDDLES: LazyLock<TwiddleCache<Complex<f64>>> =
    LazyLock::new(TwiddleCache::default);

impl TransformDomain for Complex<f64> {
    fn twiddles(len: usize, direction: Direction) -> Arc<[Self]> {
        COMPLEX_TWIDDLES.get_or_insert_with(len, direction, || complex_roots(len, direction))
    }

    #[allow(clippy::cast_precision_loss)]
    fn divide_by_len(self, len: usize) -> Self {
        self / len as f64
    }
}

/// Each power is taken from its own angle so rounding error does not
/// accumulate along the table.
#[allow(clippy::cast_precision_loss)]
fn complex_roots(len: usize, direction: Direction) -> Vec<Complex<f64>> {
    let sign = match direction {
        Direction::Forward => 1.0,
        Direction::Inverse => -1.0,
    };
    let step = sign * TAU / len as f64;
    (0..len / 2)
        .map(|j| Complex::from_polar(1.0, step * j as f64))
        .collect()
}
