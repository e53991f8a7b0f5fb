//! Tests for gcd and prime factorization

use std::collections::BTreeSet;

use lcg_core_rs::{gcd, prime_factors};
use proptest::prelude::*;

#[test]
fn test_gcd_scenario() {
    assert_eq!(gcd(8, 12), 4);
}

#[test]
fn test_prime_factors_scenario() {
    // 360 = 2^3 * 3^2 * 5
    assert_eq!(prime_factors(360), BTreeSet::from([2, 3, 5]));
}

#[test]
fn test_prime_factors_of_powers_drop_multiplicity() {
    assert_eq!(prime_factors(1 << 40), BTreeSet::from([2]));
    assert_eq!(prime_factors(3_i64.pow(20)), BTreeSet::from([3]));
    assert_eq!(prime_factors(2 * 2 * 7 * 7 * 7), BTreeSet::from([2, 7]));
}

fn is_prime(n: i64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[test]
fn test_prime_maps_to_itself() {
    for n in (2..5_000).filter(|&n| is_prime(n)) {
        assert_eq!(prime_factors(n), BTreeSet::from([n]), "n = {}", n);
    }
}

proptest! {
    #[test]
    fn prop_gcd_symmetric(x in any::<i64>(), y in any::<i64>()) {
        prop_assert_eq!(gcd(x, y), gcd(y, x));
    }

    #[test]
    fn prop_gcd_identities(n in any::<i64>()) {
        prop_assert_eq!(gcd(n, 0), n.unsigned_abs());
        prop_assert_eq!(gcd(0, n), n.unsigned_abs());
        prop_assert_eq!(gcd(n, n), n.unsigned_abs());
    }

    #[test]
    fn prop_gcd_divides_both(x in -1_000_000i64..1_000_000, y in 1i64..1_000_000) {
        let g = gcd(x, y) as i64;
        prop_assert!(g > 0);
        prop_assert_eq!(x % g, 0);
        prop_assert_eq!(y % g, 0);
    }

    #[test]
    fn prop_prime_factors_empty_below_two(n in i64::MIN..=1) {
        prop_assert!(prime_factors(n).is_empty());
    }

    #[test]
    fn prop_prime_factors_are_exact(n in 2i64..200_000) {
        let factors = prime_factors(n);

        // Every reported factor is a prime divisor
        for &p in &factors {
            prop_assert!(is_prime(p), "{} is not prime", p);
            prop_assert_eq!(n % p, 0);
        }

        // Dividing them all out leaves 1: nothing was missed
        let mut rest = n;
        for &p in &factors {
            while rest % p == 0 {
                rest /= p;
            }
        }
        prop_assert_eq!(rest, 1);
    }
}
