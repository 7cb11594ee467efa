//! Convolution of integer sequences via forward transform, pointwise
//! product and inverse transform.
//!
//! This is the multiplication pipeline for digit arrays: the output is the
//! raw (uncarried) coefficient sequence of the product polynomial.

use std::fmt;

use num_complex::Complex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::TransformDomain;
use crate::engine::TransformEngine;
use crate::modular::{self, Residue};

/// Which transform domain carries the convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// Floating-point FFT over complex roots of unity; rounded back to integers.
    #[default]
    Complex,
    /// Exact NTT over the prime field of [`modular::MODULUS`].
    Modular,
}

impl TransformKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complex => "complex",
            Self::Modular => "modular",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transform length for a product of sequences of the given lengths.
///
/// One slot beyond `a_len + b_len` keeps the cyclic convolution from
/// wrapping around.
#[must_use]
pub fn transform_len(a_len: usize, b_len: usize) -> usize {
    (a_len + b_len + 1).next_power_of_two()
}

/// Linear convolution of `a` and `b`, padded to [`transform_len`] entries.
///
/// Returns an empty vector when either input is empty.
#[must_use]
pub fn convolve(a: &[i64], b: &[i64], kind: TransformKind, engine: &TransformEngine) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let len = transform_len(a.len(), b.len());
    match resolve_kind(kind, a, b, len) {
        TransformKind::Complex => run_pipeline(a, Some(b), len, engine, lift_complex, lower_complex),
        TransformKind::Modular => run_pipeline(a, Some(b), len, engine, Residue::from_i64, Residue::centered),
    }
}

/// Convolution of `a` with itself using a single forward transform.
#[must_use]
pub fn square(a: &[i64], kind: TransformKind, engine: &TransformEngine) -> Vec<i64> {
    if a.is_empty() {
        return Vec::new();
    }
    let len = transform_len(a.len(), a.len());
    match resolve_kind(kind, a, a, len) {
        TransformKind::Complex => run_pipeline(a, None, len, engine, lift_complex, lower_complex),
        TransformKind::Modular => run_pipeline(a, None, len, engine, Residue::from_i64, Residue::centered),
    }
}

/// Fall back to the complex path when the product could leave the field's
/// unambiguous range or the length has no root of unity.
fn resolve_kind(kind: TransformKind, a: &[i64], b: &[i64], len: usize) -> TransformKind {
    if kind == TransformKind::Modular && !modular_fits(a, b, len) {
        debug!(len, "operands exceed the NTT prime's range, using the complex transform");
        return TransformKind::Complex;
    }
    kind
}

fn modular_fits(a: &[i64], b: &[i64], len: usize) -> bool {
    if len > modular::MAX_LEN {
        return false;
    }
    let max_abs = |s: &[i64]| s.iter().map(|d| d.unsigned_abs()).max().unwrap_or(0);
    let terms = a.len().min(b.len()) as u128;
    u128::from(max_abs(a)) * u128::from(max_abs(b)) * terms <= u128::from(modular::MODULUS / 2)
}

fn run_pipeline<T: TransformDomain>(
    a: &[i64],
    b: Option<&[i64]>,
    len: usize,
    engine: &TransformEngine,
    lift: impl Fn(i64) -> T,
    lower: impl Fn(T) -> i64,
) -> Vec<i64> {
    let padded = |s: &[i64]| -> Vec<T> {
        let mut out: Vec<T> = s.iter().map(|&d| lift(d)).collect();
        out.resize(len, lift(0));
        out
    };

    let mut acc = padded(a);
    engine.forward_unchecked(&mut acc);
    match b {
        Some(b) => {
            let mut other = padded(b);
            engine.forward_unchecked(&mut other);
            for (x, y) in acc.iter_mut().zip(&other) {
                *x = *x * *y;
            }
        }
        None => {
            for x in &mut acc {
                *x = *x * *x;
            }
        }
    }
    engine.inverse_unchecked(&mut acc);

    acc.into_iter().map(lower).collect()
}

#[allow(clippy::cast_precision_loss)]
fn lift_complex(d: i64) -> Complex<f64> {
    Complex::new(d as f64, 0.0)
}

/// Round to the nearest integer; truncating would turn `4.9999999` into 4.
#[allow(clippy::cast_possible_truncation)]
fn lower_complex(c: Complex<f64>) -> i64 {
    c.re.round() as i64
}
