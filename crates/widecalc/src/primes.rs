//! Trial-division primality built only on `WideInt` arithmetic.

use std::cmp::Ordering;

use tracing::trace;
use widecalc_core::{Calculator, WideInt};

fn divides(calc: &Calculator, d: &WideInt, n: &WideInt) -> bool {
    calc.modulo(n, d).is_ok_and(|r| r.is_zero())
}

/// Whether `n` is prime. Values below 2 are not.
#[must_use]
pub fn is_prime(calc: &Calculator, n: &WideInt) -> bool {
    let two = WideInt::from(2u8);
    match n.cmp(&two) {
        Ordering::Less => return false,
        Ordering::Equal => return true,
        Ordering::Greater => {}
    }
    if divides(calc, &two, n) {
        return false;
    }

    let mut d = WideInt::from(3u8);
    while calc.multiply(&d, &d) <= *n {
        if divides(calc, &d, n) {
            trace!(%n, divisor = %d, "composite");
            return false;
        }
        d = calc.add(&d, &two);
    }
    true
}

/// All primes `p <= limit`, ascending.
#[must_use]
pub fn primes_up_to(calc: &Calculator, limit: &WideInt) -> Vec<WideInt> {
    let one = WideInt::one();
    let mut primes = Vec::new();
    let mut k = WideInt::from(2u8);
    while k <= *limit {
        if is_prime(calc, &k) {
            primes.push(k.clone());
        }
        k = calc.add(&k, &one);
    }
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(v: i64) -> WideInt {
        WideInt::from(v)
    }

    #[test]
    fn small_values() {
        let calc = Calculator::default();
        for (n, expected) in [(-7, false), (0, false), (1, false), (2, true), (3, true), (4, false), (9, false), (25, false), (97, true)] {
            assert_eq!(is_prime(&calc, &w(n)), expected, "{n}");
        }
    }

    #[test]
    fn large_prime_and_square_of_prime() {
        let calc = Calculator::default();
        assert!(is_prime(&calc, &w(1_000_003)));
        assert!(!is_prime(&calc, &w(1_009 * 1_009)));
    }

    #[test]
    fn primes_below_thirty() {
        let calc = Calculator::default();
        let primes: Vec<i64> = primes_up_to(&calc, &w(30))
            .iter()
            .map(|p| p.to_i64_wrapping())
            .collect();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(primes_up_to(&calc, &w(1)).is_empty());
    }
}
