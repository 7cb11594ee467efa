//! Prime-field arithmetic for the Number Theoretic Transform.
//!
//! The field is Z/pZ with `p = 998244353 = 119 * 2^23 + 1`. Its
//! multiplicative group has order divisible by `2^23`, so a primitive
//! `2^k`-th root of unity exists for every `k <= 23`. The per-level roots,
//! their inverses and the inverses of the transform lengths are computed at
//! compile time.

use std::ops::{Add, Mul, Sub};
use std::sync::{Arc, LazyLock};

use crate::domain::{Direction, TransformDomain};
use crate::twiddle_cache::TwiddleCache;

/// The NTT prime.
pub const MODULUS: u64 = 998_244_353;

/// A generator of the multiplicative group mod [`MODULUS`].
pub const GENERATOR: u64 = 3;

/// Largest `k` such that a primitive `2^k`-th root of unity exists.
pub const MAX_LOG_LEN: usize = 23;

/// Largest supported NTT length.
pub const MAX_LEN: usize = 1 << MAX_LOG_LEN;

// Products of two reduced residues must fit in a u64 before reduction.
const _: () = assert!((MODULUS - 1).checked_mul(MODULUS - 1).is_some());
const _: () = assert!((MODULUS - 1) % (1 << MAX_LOG_LEN) == 0);

const fn mul_mod(a: u64, b: u64) -> u64 {
    a * b % MODULUS
}

const fn pow_mod(mut base: u64, mut exp: u64) -> u64 {
    let mut acc = 1;
    base %= MODULUS;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    acc
}

const fn inv_mod(a: u64) -> u64 {
    pow_mod(a, MODULUS - 2)
}

/// `ROOTS[k]` is a primitive `2^k`-th root of unity.
pub const ROOTS: [u64; MAX_LOG_LEN + 1] = {
    let mut table = [0u64; MAX_LOG_LEN + 1];
    let mut k = 0;
    while k <= MAX_LOG_LEN {
        table[k] = pow_mod(GENERATOR, (MODULUS - 1) >> k);
        k += 1;
    }
    table
};

/// `INV_ROOTS[k]` is the inverse of `ROOTS[k]`.
pub const INV_ROOTS: [u64; MAX_LOG_LEN + 1] = {
    let mut table = [0u64; MAX_LOG_LEN + 1];
    let mut k = 0;
    while k <= MAX_LOG_LEN {
        table[k] = inv_mod(ROOTS[k]);
        k += 1;
    }
    table
};

/// `INV_LENGTHS[k]` is the inverse of `2^k`.
pub const INV_LENGTHS: [u64; MAX_LOG_LEN + 1] = {
    let mut table = [0u64; MAX_LOG_LEN + 1];
    let mut k = 0;
    while k <= MAX_LOG_LEN {
        table[k] = inv_mod(1 << k);
        k += 1;
    }
    table
};

/// A reduced residue mod [`MODULUS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Residue(u64);

impl Residue {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    /// Reduce an unsigned value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % MODULUS)
    }

    /// Reduce a signed value into `[0, p)`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn from_i64(value: i64) -> Self {
        Self(value.rem_euclid(MODULUS as i64) as u64)
    }

    /// The representative in `(-p/2, p/2]`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn centered(self) -> i64 {
        if self.0 > MODULUS / 2 {
            self.0 as i64 - MODULUS as i64
        } else {
            self.0 as i64
        }
    }

    #[must_use]
    pub const fn pow(self, exp: u64) -> Self {
        Self(pow_mod(self.0, exp))
    }
}

impl Add for Residue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let sum = self.0 + rhs.0;
        Self(if sum >= MODULUS { sum - MODULUS } else { sum })
    }
}

impl Sub for Residue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(if self.0 >= rhs.0 {
            self.0 - rhs.0
        } else {
            self.0 + MODULUS - rhs.0
        })
    }
}

impl Mul for Residue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mul_mod(self.0, rhs.0))
    }
}

static RESIDUE_TWIDDLES: LazyLock<TwiddleCache<Residue>> = LazyLock::new(TwiddleCache::default);

impl TransformDomain for Residue {
    const MAX_LEN: usize = MAX_LEN;

    fn twiddles(len: usize, direction: Direction) -> Arc<[Self]> {
        RESIDUE_TWIDDLES.get_or_insert_with(len, direction, || {
            let level = len.trailing_zeros() as usize;
            let root = Self(match direction {
                Direction::Forward => ROOTS[level],
                Direction::Inverse => INV_ROOTS[level],
            });
            std::iter::successors(Some(Self::ONE), |w| Some(*w * root))
                .take(len / 2)
                .collect()
        })
    }

    fn divide_by_len(self, len: usize) -> Self {
        self * Self(INV_LENGTHS[len.trailing_zeros() as usize])
    }
}
