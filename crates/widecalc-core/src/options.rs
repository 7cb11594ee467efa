//! Arithmetic options and configuration.

use serde::{Deserialize, Serialize};
use widecalc_transform::TransformKind;

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;

/// Options selecting how multiplication is carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Transform domain used for multiplication.
    pub transform: TransformKind,
    /// Whether large transforms fork their halves onto the rayon pool.
    pub parallel: bool,
    /// Transform length at which forking starts (0 = default).
    pub parallel_threshold: usize,
    /// Use the O(n^2) digit multiplier instead of a transform.
    pub schoolbook: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            transform: TransformKind::Complex,
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            schoolbook: false,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        self
    }
}
