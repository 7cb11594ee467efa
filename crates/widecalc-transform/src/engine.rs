//! Transform engine: forward and inverse transforms under a chosen schedule.

use tracing::trace;

use crate::domain::{Direction, TransformDomain};
use crate::kernel;

/// Error type for checked transform entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// The sequence length is not a power of two.
    #[error("transform length {len} is not a power of two")]
    InvalidSize { len: usize },

    /// The domain has no primitive root of unity for this length.
    #[error("transform length {len} exceeds the domain maximum of {max}")]
    TooLarge { len: usize, max: usize },
}

/// How the divide-and-conquer recursion is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// Even/odd split with plain recursion.
    Recursive,
    /// Bit-reversal permutation followed by bottom-up butterflies.
    #[default]
    Iterative,
    /// Even/odd split where halves of length `>= threshold` run as a
    /// rayon task pair.
    Parallel { threshold: usize },
}

/// Forward/inverse transform driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformEngine {
    schedule: Schedule,
}

impl TransformEngine {
    #[must_use]
    pub const fn new(schedule: Schedule) -> Self {
        Self { schedule }
    }

    /// Single-threaded iterative engine.
    #[must_use]
    pub const fn sequential() -> Self {
        Self::new(Schedule::Iterative)
    }

    /// Fork-join engine; sub-sequences shorter than `threshold` stay sequential.
    #[must_use]
    pub const fn parallel(threshold: usize) -> Self {
        Self::new(Schedule::Parallel { threshold })
    }

    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Evaluate `data` at the powers of a primitive `len`-th root of unity.
    pub fn forward<T: TransformDomain>(&self, data: &mut [T]) -> Result<(), TransformError> {
        check_len::<T>(data.len())?;
        self.forward_unchecked(data);
        Ok(())
    }

    /// Interpolate `data` back from its evaluations, dividing by the length.
    pub fn inverse<T: TransformDomain>(&self, data: &mut [T]) -> Result<(), TransformError> {
        check_len::<T>(data.len())?;
        self.inverse_unchecked(data);
        Ok(())
    }

    /// Forward transform on a length the caller has already sized.
    pub(crate) fn forward_unchecked<T: TransformDomain>(&self, data: &mut [T]) {
        self.run(data, Direction::Forward);
    }

    /// Inverse transform on a length the caller has already sized.
    pub(crate) fn inverse_unchecked<T: TransformDomain>(&self, data: &mut [T]) {
        self.run(data, Direction::Inverse);
        let n = data.len();
        for value in data.iter_mut() {
            *value = value.divide_by_len(n);
        }
    }

    fn run<T: TransformDomain>(&self, data: &mut [T], direction: Direction) {
        let n = data.len();
        debug_assert!(n.is_power_of_two(), "transform length {n} is not a power of two");
        if n <= 1 {
            return;
        }

        let twiddles = T::twiddles(n, direction);
        match self.schedule {
            Schedule::Recursive => kernel::recursive(data, &twiddles, 1, None),
            Schedule::Iterative => kernel::iterative(data, &twiddles, 1),
            Schedule::Parallel { threshold } => {
                trace!(len = n, threshold, ?direction, "fork-join transform");
                kernel::recursive(data, &twiddles, 1, Some(threshold.max(2)));
            }
        }
    }
}

pub(crate) fn check_len<T: TransformDomain>(len: usize) -> Result<(), TransformError> {
    if !len.is_power_of_two() {
        return Err(TransformError::InvalidSize { len });
    }
    if len > T::MAX_LEN {
        return Err(TransformError::TooLarge {
            len,
            max: T::MAX_LEN,
        });
    }
    Ok(())
}
