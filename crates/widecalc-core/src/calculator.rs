//! Arithmetic context: sign dispatch over magnitude operations.
//!
//! A `Calculator` owns the multiplication strategy. Every operation is a
//! pure function of its operands and returns a freshly allocated value.
//! `Calculator::shared()` backs the `WideInt` operators.

use std::cmp::Ordering;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::digits::DigitBuffer;
use crate::error::WideIntError;
use crate::magnitude;
use crate::options::Options;
use crate::strategy::{build_multiplier, Multiplier};
use crate::wide_int::WideInt;

static SHARED: LazyLock<Calculator> = LazyLock::new(Calculator::default);

/// Big-integer arithmetic bound to a multiplication strategy.
pub struct Calculator {
    multiplier: Arc<dyn Multiplier>,
}

impl Calculator {
    #[must_use]
    pub fn new(multiplier: Arc<dyn Multiplier>) -> Self {
        Self { multiplier }
    }

    /// Build a calculator from options, normalizing them first.
    #[must_use]
    pub fn from_options(opts: &Options) -> Self {
        Self::new(build_multiplier(&opts.clone().normalize()))
    }

    /// The process-wide calculator built from default options.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Name of the multiplication strategy.
    #[must_use]
    pub fn name(&self) -> &str {
        self.multiplier.name()
    }

    #[must_use]
    pub fn compare(&self, a: &WideInt, b: &WideInt) -> Ordering {
        a.cmp(b)
    }

    #[must_use]
    pub fn add(&self, a: &WideInt, b: &WideInt) -> WideInt {
        match (a.is_negative(), b.is_negative()) {
            (false, false) => WideInt::from_parts(false, magnitude::add(a.magnitude(), b.magnitude())),
            (true, true) => WideInt::from_parts(true, magnitude::add(a.magnitude(), b.magnitude())),
            (false, true) => difference(a.magnitude(), b.magnitude()),
            (true, false) => difference(b.magnitude(), a.magnitude()),
        }
    }

    #[must_use]
    pub fn subtract(&self, a: &WideInt, b: &WideInt) -> WideInt {
        match (a.is_negative(), b.is_negative()) {
            (false, true) => WideInt::from_parts(false, magnitude::add(a.magnitude(), b.magnitude())),
            (true, false) => WideInt::from_parts(true, magnitude::add(a.magnitude(), b.magnitude())),
            (false, false) => difference(a.magnitude(), b.magnitude()),
            (true, true) => difference(b.magnitude(), a.magnitude()),
        }
    }

    #[must_use]
    pub fn multiply(&self, a: &WideInt, b: &WideInt) -> WideInt {
        let product = self.multiplier.multiply(a.magnitude(), b.magnitude());
        WideInt::from_parts(a.is_negative() ^ b.is_negative(), product)
    }

    #[must_use]
    pub fn square(&self, a: &WideInt) -> WideInt {
        WideInt::from_parts(false, self.multiplier.square(a.magnitude()))
    }

    /// Quotient truncated toward zero.
    pub fn divide(&self, a: &WideInt, b: &WideInt) -> Result<WideInt, WideIntError> {
        if b.is_zero() {
            return Err(WideIntError::DivisionByZero);
        }
        let quotient = magnitude::divide(a.magnitude(), b.magnitude());
        Ok(WideInt::from_parts(a.is_negative() ^ b.is_negative(), quotient))
    }

    /// Remainder `a - b * divide(a, b)`, carrying the sign of `a`.
    pub fn modulo(&self, a: &WideInt, b: &WideInt) -> Result<WideInt, WideIntError> {
        self.div_rem(a, b).map(|(_, remainder)| remainder)
    }

    /// Quotient and remainder with `b * q + r == a`.
    pub fn div_rem(&self, a: &WideInt, b: &WideInt) -> Result<(WideInt, WideInt), WideIntError> {
        if b.is_zero() {
            return Err(WideIntError::DivisionByZero);
        }
        let quotient = magnitude::divide(a.magnitude(), b.magnitude());
        let covered = self.multiplier.multiply(b.magnitude(), &quotient);
        let remainder = magnitude::sub(a.magnitude(), &covered);
        Ok((
            WideInt::from_parts(a.is_negative() ^ b.is_negative(), quotient),
            WideInt::from_parts(a.is_negative(), remainder),
        ))
    }

    /// `base^exp` by binary exponentiation; `exp` must be non-negative.
    pub fn power(&self, base: &WideInt, exp: &WideInt) -> Result<WideInt, WideIntError> {
        if exp.is_negative() {
            return Err(WideIntError::NegativeExponent);
        }

        let one = WideInt::one();
        let two = WideInt::from(2u8);
        let mut result = one.clone();
        let mut base = base.clone();
        let mut n = exp.clone();

        while !n.is_zero() {
            if self.modulo(&n, &two)? == one {
                result = self.multiply(&result, &base);
            }
            base = self.square(&base);
            n = self.divide(&n, &two)?;
        }
        Ok(result)
    }
}

/// Signed difference `x - y` of two magnitudes.
fn difference(x: &DigitBuffer, y: &DigitBuffer) -> WideInt {
    if magnitude::compare(x, y) == Ordering::Less {
        WideInt::from_parts(true, magnitude::sub(y, x))
    } else {
        WideInt::from_parts(false, magnitude::sub(x, y))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("multiplier", &self.name())
            .finish()
    }
}
