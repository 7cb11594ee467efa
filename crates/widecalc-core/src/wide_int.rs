//! Signed arbitrary-precision integer.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, ToPrimitive, Zero};

use crate::calculator::Calculator;
use crate::digits::DigitBuffer;
use crate::error::{ParseWideIntError, WideIntError};
use crate::magnitude;

/// A signed integer of unbounded size.
///
/// Zero is never negative, so structural equality is numeric equality.
/// Operators go through [`Calculator::shared`]; use a dedicated
/// [`Calculator`] to pick a different multiplication strategy.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct WideInt {
    negative: bool,
    magnitude: DigitBuffer,
}

impl WideInt {
    pub(crate) fn from_parts(negative: bool, magnitude: DigitBuffer) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self { negative, magnitude }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn one() -> Self {
        Self::from(1u8)
    }

    /// Value of `sum(raw[i] * 10^i)` for arbitrary signed entries.
    #[must_use]
    pub fn from_digits(raw: Vec<i64>) -> Self {
        let (magnitude, negative) = DigitBuffer::from_raw(raw);
        Self::from_parts(negative, magnitude)
    }

    #[must_use]
    pub fn magnitude(&self) -> &DigitBuffer {
        &self.magnitude
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.magnitude.clone())
    }

    /// Number of decimal digits in the magnitude (1 for zero).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.magnitude.significant_len()
    }

    /// Low 64 bits of the value in two's complement.
    #[must_use]
    pub fn to_i64_wrapping(&self) -> i64 {
        let value = self
            .magnitude
            .significant()
            .iter()
            .rev()
            .fold(0i64, |acc, &d| acc.wrapping_mul(10).wrapping_add(d));
        if self.negative {
            value.wrapping_neg()
        } else {
            value
        }
    }

    fn magnitude_u128(&self) -> Option<u128> {
        self.magnitude
            .significant()
            .iter()
            .rev()
            .try_fold(0u128, |acc, &d| {
                acc.checked_mul(10)?.checked_add(u128::try_from(d).ok()?)
            })
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, WideIntError> {
        Calculator::shared().divide(self, rhs)
    }

    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, WideIntError> {
        Calculator::shared().modulo(self, rhs)
    }

    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), WideIntError> {
        Calculator::shared().div_rem(self, rhs)
    }

    pub fn pow(&self, exp: &Self) -> Result<Self, WideIntError> {
        Calculator::shared().power(self, exp)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for WideInt {
            #[allow(clippy::cast_lossless)]
            fn from(value: $t) -> Self {
                Self::from_parts(false, DigitBuffer::from_u128(value as u128))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for WideInt {
            #[allow(clippy::cast_lossless)]
            fn from(value: $t) -> Self {
                let value = value as i128;
                Self::from_parts(value < 0, DigitBuffer::from_u128(value.unsigned_abs()))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl FromStr for WideInt {
    type Err = ParseWideIntError;

    /// Parse an optionally signed run of ASCII decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if body.is_empty() {
            return Err(ParseWideIntError::Empty);
        }

        let offset = s.len() - body.len();
        let mut raw = body
            .char_indices()
            .map(|(index, ch)| {
                ch.to_digit(10)
                    .map(i64::from)
                    .ok_or(ParseWideIntError::InvalidDigit { ch, index: index + offset })
            })
            .collect::<Result<Vec<_>, _>>()?;
        raw.reverse();

        let (magnitude, _) = DigitBuffer::from_raw(raw);
        Ok(Self::from_parts(negative, magnitude))
    }
}

impl ToPrimitive for WideInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        if self.negative {
            0i128.checked_sub_unsigned(magnitude)
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        self.magnitude_u128()
    }
}

impl TryFrom<&WideInt> for i64 {
    type Error = WideIntError;

    fn try_from(value: &WideInt) -> Result<Self, Self::Error> {
        value.to_i64().ok_or(WideIntError::Overflow { target: "i64" })
    }
}

impl TryFrom<&WideInt> for u64 {
    type Error = WideIntError;

    fn try_from(value: &WideInt) -> Result<Self, Self::Error> {
        value.to_u64().ok_or(WideIntError::Overflow { target: "u64" })
    }
}

impl Ord for WideInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude::compare(&self.magnitude, &other.magnitude),
            (true, true) => magnitude::compare(&other.magnitude, &self.magnitude),
        }
    }
}

impl PartialOrd for WideInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $calc:ident) => {
        impl $imp<&WideInt> for &WideInt {
            type Output = WideInt;

            fn $method(self, rhs: &WideInt) -> WideInt {
                Calculator::shared().$calc(self, rhs)
            }
        }

        impl $imp<WideInt> for WideInt {
            type Output = WideInt;

            fn $method(self, rhs: WideInt) -> WideInt {
                Calculator::shared().$calc(&self, &rhs)
            }
        }

        impl $imp<&WideInt> for WideInt {
            type Output = WideInt;

            fn $method(self, rhs: &WideInt) -> WideInt {
                Calculator::shared().$calc(&self, rhs)
            }
        }

        impl $imp<WideInt> for &WideInt {
            type Output = WideInt;

            fn $method(self, rhs: WideInt) -> WideInt {
                Calculator::shared().$calc(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);

impl Neg for WideInt {
    type Output = WideInt;

    fn neg(self) -> WideInt {
        let negative = !self.negative;
        Self::from_parts(negative, self.magnitude)
    }
}

impl Neg for &WideInt {
    type Output = WideInt;

    fn neg(self) -> WideInt {
        WideInt::from_parts(!self.negative, self.magnitude.clone())
    }
}

impl Zero for WideInt {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for WideInt {
    fn one() -> Self {
        Self::from(1u8)
    }
}

impl fmt::Display for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude.to_string())
    }
}

impl fmt::Debug for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WideInt").field(&format_args!("{self}")).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for s in ["0", "7", "-7", "123456789012345678901234567890", "-1000000"] {
            assert_eq!(s.parse::<WideInt>().unwrap().to_string(), s);
        }
        assert_eq!("+42".parse::<WideInt>().unwrap(), WideInt::from(42));
        assert_eq!("000123".parse::<WideInt>().unwrap().to_string(), "123");
        assert_eq!("-0".parse::<WideInt>().unwrap().to_string(), "0");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<WideInt>(), Err(ParseWideIntError::Empty));
        assert_eq!("-".parse::<WideInt>(), Err(ParseWideIntError::Empty));
        assert_eq!(
            "12a4".parse::<WideInt>(),
            Err(ParseWideIntError::InvalidDigit { ch: 'a', index: 2 })
        );
        assert_eq!(
            "-1 2".parse::<WideInt>(),
            Err(ParseWideIntError::InvalidDigit { ch: ' ', index: 2 })
        );
    }

    #[test]
    fn from_native_extremes() {
        assert_eq!(WideInt::from(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(WideInt::from(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(WideInt::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert!(!WideInt::from(0i32).is_negative());
    }

    #[test]
    fn to_primitive_bounds() {
        assert_eq!(WideInt::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(WideInt::from(i64::MAX).to_i64(), Some(i64::MAX));
        assert_eq!(WideInt::from(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(WideInt::from(u128::MAX).to_i128(), None);
        assert_eq!(WideInt::from(-1).to_u64(), None);
        assert_eq!(WideInt::from(u64::MAX).to_i64(), None);
        assert_eq!(
            i64::try_from(&WideInt::from(u64::MAX)),
            Err(WideIntError::Overflow { target: "i64" })
        );
        assert_eq!(i64::try_from(&WideInt::from(-99)), Ok(-99));
    }

    #[test]
    fn wrapping_conversion() {
        assert_eq!(WideInt::from(-12_345).to_i64_wrapping(), -12_345);
        let big = WideInt::from(u64::MAX);
        assert_eq!(big.to_i64_wrapping(), -1);
        let two_64: WideInt = "18446744073709551616".parse().unwrap();
        assert_eq!(two_64.to_i64_wrapping(), 0);
    }

    #[test]
    fn from_digits_normalizes() {
        assert_eq!(WideInt::from_digits(vec![15, -3, 20]), WideInt::from(1985));
        assert_eq!(WideInt::from_digits(vec![3, -2]), WideInt::from(-17));
        assert_eq!(WideInt::from_digits(Vec::new()), WideInt::zero());
        assert_eq!(WideInt::from_digits(vec![i64::MIN]), WideInt::from(i64::MIN));
        assert_eq!(
            WideInt::from_digits(vec![i64::MAX, i64::MAX]),
            WideInt::from(i128::from(i64::MAX) * 11)
        );
    }

    #[test]
    fn ordering() {
        let mut values: Vec<WideInt> = [5i64, -3, 0, 100, -100, 7, -1]
            .into_iter()
            .map(WideInt::from)
            .collect();
        values.sort();
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["-100", "-3", "-1", "0", "5", "7", "100"]);
    }

    #[test]
    fn operators() {
        let a = WideInt::from(1_000_000_007);
        let b = WideInt::from(-999);
        assert_eq!(&a + &b, WideInt::from(1_000_000_007 - 999));
        assert_eq!(&a - &b, WideInt::from(1_000_000_007 + 999));
        assert_eq!(&a * &b, WideInt::from(-999_000_006_993i64));
        assert_eq!(a.clone() * b.clone(), &a * &b);
        assert_eq!(-&b, WideInt::from(999));
        assert_eq!(-WideInt::zero(), WideInt::zero());
    }

    #[test]
    fn checked_operations() {
        let a = WideInt::from(-17);
        let b = WideInt::from(5);
        assert_eq!(a.checked_div(&b).unwrap(), WideInt::from(-3));
        assert_eq!(a.checked_rem(&b).unwrap(), WideInt::from(-2));
        assert_eq!(a.div_rem(&b).unwrap(), (WideInt::from(-3), WideInt::from(-2)));
        assert_eq!(a.checked_div(&WideInt::zero()), Err(WideIntError::DivisionByZero));
        assert_eq!(b.pow(&WideInt::from(3)).unwrap(), WideInt::from(125));
    }

    #[test]
    fn display_flags() {
        assert_eq!(format!("{:+}", WideInt::from(5)), "+5");
        assert_eq!(format!("{:>6}", WideInt::from(-42)), "   -42");
        assert_eq!(format!("{:?}", WideInt::from(-42)), "WideInt(-42)");
    }

    #[test]
    fn digit_count_and_abs() {
        assert_eq!(WideInt::zero().digit_count(), 1);
        assert_eq!(WideInt::from(-12_345).digit_count(), 5);
        assert_eq!(WideInt::from(-12_345).abs(), WideInt::from(12_345));
    }
}
