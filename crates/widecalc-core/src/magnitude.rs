//! Sign-agnostic operations on canonical digit buffers.

use std::cmp::Ordering;

use tracing::trace;

use crate::digits::DigitBuffer;

/// Compare two magnitudes from the most significant digit down.
pub(crate) fn compare(a: &DigitBuffer, b: &DigitBuffer) -> Ordering {
    let len = a.capacity().max(b.capacity());
    for i in (0..len).rev() {
        match a.digit_at(i).cmp(&b.digit_at(i)) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// `a + b`.
pub(crate) fn add(a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer {
    combine(a, b, |x, y| x + y)
}

/// `a - b`; requires `a >= b`.
pub(crate) fn sub(a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer {
    debug_assert!(compare(a, b) != Ordering::Less, "magnitude subtraction underflow");
    combine(a, b, |x, y| x - y)
}

/// Element-wise combination over one extra slot, then normalization.
fn combine(a: &DigitBuffer, b: &DigitBuffer, op: impl Fn(i64, i64) -> i64) -> DigitBuffer {
    let len = (a.capacity().max(b.capacity()) + 1).next_power_of_two();
    let raw = (0..len).map(|i| op(a.digit_at(i), b.digit_at(i))).collect();
    DigitBuffer::from_raw(raw).0
}

/// Truncated quotient `a / b` by repeated doubling; `b` must be non-zero.
///
/// Each round finds the largest `2^k * b` not exceeding what is left of the
/// dividend, subtracts it and adds `2^k` to the quotient.
pub(crate) fn divide(a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer {
    debug_assert!(!b.is_zero(), "division by a zero magnitude");

    let one = DigitBuffer::from_u128(1);
    let mut remainder = a.clone();
    let mut quotient = DigitBuffer::zero();
    let mut rounds = 0usize;

    while compare(b, &remainder) != Ordering::Greater {
        let mut shifted = b.clone();
        let mut multiple = one.clone();
        loop {
            let doubled = add(&shifted, &shifted);
            if compare(&doubled, &remainder) == Ordering::Greater {
                break;
            }
            shifted = doubled;
            multiple = add(&multiple, &multiple);
        }
        remainder = sub(&remainder, &shifted);
        quotient = add(&quotient, &multiple);
        rounds += 1;
    }

    trace!(rounds, digits = a.significant_len(), "long division finished");
    quotient
}
