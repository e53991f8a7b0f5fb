//! Greatest common divisor and prime factorization
//!
//! Trial division is O(√n). Moduli are expected to be modest, so there is no
//! attempt at faster factorization.

use std::collections::BTreeSet;

/// Greatest common divisor of two integers (Euclid)
///
/// Both inputs are taken by absolute value, so the result is never negative.
/// `gcd(0, k) == |k|` and `gcd(0, 0) == 0`.
///
/// The result is `u64` because `|i64::MIN|` does not fit in `i64`.
///
/// # Example
/// ```
/// use lcg_core_rs::gcd;
///
/// assert_eq!(gcd(8, 12), 4);
/// assert_eq!(gcd(-8, 12), 4);
/// assert_eq!(gcd(0, 7), 7);
/// ```
pub fn gcd(n1: i64, n2: i64) -> u64 {
    let mut x = n1.unsigned_abs();
    let mut y = n2.unsigned_abs();
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Distinct prime divisors of `n`
///
/// Returns the empty set for `n <= 1`. Multiplicity is dropped: 360 = 2³·3²·5
/// yields `{2, 3, 5}`. Callers must not rely on iteration order.
///
/// # Example
/// ```
/// use lcg_core_rs::prime_factors;
///
/// let factors: Vec<i64> = prime_factors(360).into_iter().collect();
/// assert_eq!(factors.len(), 3);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(n: i64) -> BTreeSet<i64> {
    let mut factors = BTreeSet::new();
    if n <= 1 {
        return factors;
    }

    let mut rest = n;
    if rest % 2 == 0 {
        factors.insert(2);
        while rest % 2 == 0 {
            rest /= 2;
        }
    }

    // `d <= rest / d` instead of `d * d <= rest`: d*d overflows near i64::MAX
    let mut d = 3;
    while d <= rest / d {
        if rest % d == 0 {
            factors.insert(d);
            while rest % d == 0 {
                rest /= d;
            }
        }
        d += 2;
    }

    if rest > 1 {
        factors.insert(rest);
    }
    factors
}
