//! Base-10 digit buffer with power-of-two capacity.
//!
//! A buffer holds a non-negative magnitude, least significant digit first.
//! In canonical form every digit is in `[0, 9]`, there are no leading zeros
//! beyond the single digit of zero, and the stored length is padded with
//! zero digits up to the next power of two so it can be fed to a transform
//! directly.

use std::fmt;

use crate::constants::DIGIT_BASE;

/// Canonical base-10 magnitude.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitBuffer {
    digits: Vec<i64>,
}

impl DigitBuffer {
    /// The magnitude zero: a single zero digit.
    #[must_use]
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// Decompose a native magnitude into digits.
    #[must_use]
    pub fn from_u128(mut value: u128) -> Self {
        let mut digits = Vec::with_capacity(40);
        while value > 0 {
            #[allow(clippy::cast_possible_truncation)]
            digits.push((value % 10) as i64);
            value /= 10;
        }
        Self::from_raw(digits).0
    }

    /// Normalize an arbitrary digit array.
    ///
    /// Returns the canonical magnitude and whether the encoded value
    /// `sum(raw[i] * 10^i)` was negative.
    #[must_use]
    pub fn from_raw(raw: Vec<i64>) -> (Self, bool) {
        let mut buffer = Self { digits: raw };
        let negative = buffer.normalize();
        (buffer, negative)
    }

    /// Bring the buffer into canonical form without changing its value.
    ///
    /// Entries may be negative or larger than 9. Returns `true` if the
    /// encoded value is negative, in which case the buffer now holds its
    /// magnitude.
    pub fn normalize(&mut self) -> bool {
        if self.digits.is_empty() {
            self.digits.push(0);
        }

        // Signed carry: quotient and remainder both truncate toward zero.
        // The carry is held in i128 so entries anywhere in the i64 range
        // cannot overflow it.
        let base = i128::from(DIGIT_BASE);
        let mut carry: i128 = 0;
        for d in &mut self.digits {
            let v = i128::from(*d) + carry;
            #[allow(clippy::cast_possible_truncation)]
            let digit = (v % base) as i64;
            *d = digit;
            carry = v / base;
        }

        // Whatever is left extends the buffer one digit at a time.
        while carry != 0 {
            #[allow(clippy::cast_possible_truncation)]
            self.digits.push((carry % base) as i64);
            carry /= base;
        }

        // Digits are now in [-9, 9]; the most significant non-zero one has
        // the sign of the whole value.
        let negative = self
            .digits
            .iter()
            .rev()
            .find(|&&d| d != 0)
            .is_some_and(|&d| d < 0);
        if negative {
            for d in &mut self.digits {
                *d = -*d;
            }
        }

        // Borrow pass for the remaining negative digits.
        for i in 0..self.digits.len() - 1 {
            if self.digits[i] < 0 {
                self.digits[i] += DIGIT_BASE;
                self.digits[i + 1] -= 1;
            }
        }

        self.trim();
        self.pad();
        negative
    }

    fn trim(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    fn pad(&mut self) {
        let len = self.digits.len().next_power_of_two();
        self.digits.resize(len, 0);
    }

    /// Stored length including zero padding; always a power of two.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Number of digits without padding (1 for zero).
    #[must_use]
    pub fn significant_len(&self) -> usize {
        self.digits.iter().rposition(|&d| d != 0).map_or(1, |i| i + 1)
    }

    /// All stored digits, including padding.
    #[must_use]
    pub fn digits(&self) -> &[i64] {
        &self.digits
    }

    /// Digits without padding.
    #[must_use]
    pub fn significant(&self) -> &[i64] {
        &self.digits[..self.significant_len()]
    }

    /// Digit at position `i`, zero beyond the stored length.
    #[must_use]
    pub fn digit_at(&self, i: usize) -> i64 {
        self.digits.get(i).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .significant()
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + u8::try_from(d).unwrap_or(0)))
            .collect();
        f.write_str(&rendered)
    }
}

impl fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitBuffer")
            .field("value", &format_args!("{self}"))
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_digits_with_negative_entry() {
        // 15 + (-3)*10 + 20*100 = 1985
        let (buf, negative) = DigitBuffer::from_raw(vec![15, -3, 20]);
        assert!(!negative);
        assert_eq!(buf.digits(), &[5, 8, 9, 1]);
    }

    #[test]
    fn extreme_raw_entries_do_not_overflow() {
        // i64::MAX * 11
        let (buf, negative) = DigitBuffer::from_raw(vec![i64::MAX, i64::MAX]);
        assert!(!negative);
        assert_eq!(buf.to_string(), "101457092405402533877");

        let (buf, negative) = DigitBuffer::from_raw(vec![i64::MIN]);
        assert!(negative);
        assert_eq!(buf.to_string(), "9223372036854775808");

        // i64::MIN + i64::MAX * 10 = 9 * i64::MAX - 1
        let (buf, negative) = DigitBuffer::from_raw(vec![i64::MIN, i64::MAX]);
        assert!(!negative);
        assert_eq!(buf.to_string(), "83010348331692982262");

        let (buf, negative) = DigitBuffer::from_raw(vec![i64::MIN; 4]);
        assert!(negative);
        assert_eq!(buf.to_string(), "10247166332945655922688");
    }

    #[test]
    fn all_zero_collapses_to_single_digit() {
        let (buf, negative) = DigitBuffer::from_raw(vec![0, 0, 0, 0, 0, 0]);
        assert!(!negative);
        assert_eq!(buf.digits(), &[0]);
        assert_eq!(buf.capacity(), 1);
        assert!(buf.is_zero());

        let (empty, _) = DigitBuffer::from_raw(Vec::new());
        assert_eq!(empty, DigitBuffer::zero());
    }

    #[test]
    fn pads_to_power_of_two() {
        let buf = DigitBuffer::from_u128(12_345);
        assert_eq!(buf.digits(), &[5, 4, 3, 2, 1, 0, 0, 0]);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.significant_len(), 5);
        assert_eq!(buf.significant(), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn top_digit_overflow_extends_buffer() {
        // A single entry holding several carries' worth.
        let (buf, _) = DigitBuffer::from_raw(vec![123_456_789]);
        assert_eq!(buf.to_string(), "123456789");
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn negative_value_reports_sign() {
        // 3 - 2*10 = -17
        let (buf, negative) = DigitBuffer::from_raw(vec![3, -2]);
        assert!(negative);
        assert_eq!(buf.to_string(), "17");

        let (buf, negative) = DigitBuffer::from_raw(vec![-250]);
        assert!(negative);
        assert_eq!(buf.to_string(), "250");
    }

    #[test]
    fn borrow_chain_across_zeros() {
        // -1 + 0*10 + 0*100 + 1*1000 = 999
        let (buf, negative) = DigitBuffer::from_raw(vec![-1, 0, 0, 1]);
        assert!(!negative);
        assert_eq!(buf.digits(), &[9, 9, 9, 0]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut buf = DigitBuffer::from_u128(9_876_543_210);
        let before = buf.clone();
        assert!(!buf.normalize());
        assert_eq!(buf, before);
    }

    #[test]
    fn u128_max_round_trips() {
        let buf = DigitBuffer::from_u128(u128::MAX);
        assert_eq!(buf.to_string(), u128::MAX.to_string());
        assert_eq!(buf.capacity(), 64);
    }

    #[test]
    fn digit_at_beyond_capacity() {
        let buf = DigitBuffer::from_u128(42);
        assert_eq!(buf.digit_at(0), 2);
        assert_eq!(buf.digit_at(1), 4);
        assert_eq!(buf.digit_at(100), 0);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(DigitBuffer::zero().to_string(), "0");
        let dbg = format!("{:?}", DigitBuffer::from_u128(7));
        assert!(dbg.contains("value: 7"));
    }
}
