//! Tests for the LCG engine
//!
//! Same parameters + same seed MUST produce the same sequence.

use lcg_core_rs::{GeneratorParameters, LcgEngine, ParameterError};
use proptest::prelude::*;

#[test]
fn test_scenario_first_values() {
    // 21 ≡ 5 (mod 16): the engine needs the multiplier reduced into [0, m)
    let mut lcg = LcgEngine::new(21 % 16, 3, 16, 0).unwrap();

    assert_eq!(lcg.next_integer(), 3);
    assert_eq!(lcg.next_integer(), 2);
    assert_eq!(lcg.next_integer(), 13);
}

#[test]
fn test_construction_rejects_zero_modulus() {
    assert_eq!(
        LcgEngine::new(0, 0, 0, 0),
        Err(ParameterError::NonPositiveModulus { m: 0 })
    );
}

#[test]
fn test_construction_rejects_multiplier_equal_to_modulus() {
    assert_eq!(
        LcgEngine::new(10, 1, 10, 0),
        Err(ParameterError::MultiplierOutOfRange { a: 10, m: 10 })
    );
}

#[test]
fn test_construction_rejects_bad_increment_and_seed() {
    assert_eq!(
        LcgEngine::new(1, -3, 10, 0),
        Err(ParameterError::IncrementOutOfRange { c: -3, m: 10 })
    );
    assert_eq!(
        LcgEngine::new(1, 3, 10, 11),
        Err(ParameterError::SeedOutOfRange { seed: 11, m: 10 })
    );
}

#[test]
fn test_construction_does_not_require_full_period() {
    // Fails Hull-Dobell (gcd(0, 10) = 10) but is well formed
    let mut lcg = LcgEngine::new(2, 0, 10, 1).unwrap();
    assert_eq!(lcg.sequence(4), vec![2, 4, 8, 6]);
}

#[test]
fn test_from_parameters_matches_new() {
    let params = GeneratorParameters::new(13, 7, 36).unwrap();
    let mut lcg1 = LcgEngine::from_parameters(params, 4).unwrap();
    let mut lcg2 = LcgEngine::new(13, 7, 36, 4).unwrap();

    assert_eq!(lcg1.parameters(), params);
    assert_eq!(lcg1.sequence(100), lcg2.sequence(100));
}

#[test]
fn test_independent_engines_do_not_interfere() {
    let mut lcg1 = LcgEngine::new(5, 3, 16, 0).unwrap();
    let mut lcg2 = LcgEngine::new(5, 3, 16, 0).unwrap();

    // Advance only the first engine
    let ahead = lcg1.sequence(10);
    assert_eq!(lcg2.current(), 0);
    assert_eq!(lcg2.sequence(10), ahead);
}

#[test]
fn test_normalized_matches_integer_over_modulus() {
    let mut ints = LcgEngine::new(13, 7, 36, 4).unwrap();
    let mut fracs = ints.clone();

    for _ in 0..72 {
        let value = ints.next_integer();
        assert_eq!(fracs.next_normalized(), value as f64 / 36.0);
    }
    assert_eq!(ints.current(), fracs.current());
}

#[test]
fn test_long_sequence_determinism() {
    let mut lcg1 = LcgEngine::new(1_103_515_245, 12_345, 1 << 31, 42).unwrap();
    let mut lcg2 = LcgEngine::new(1_103_515_245, 12_345, 1 << 31, 42).unwrap();

    for i in 0..1000 {
        let val1 = lcg1.next_integer();
        let val2 = lcg2.next_integer();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

proptest! {
    #[test]
    fn prop_values_stay_in_range(
        m in 1i64..=i64::MAX,
        a_seed in any::<u64>(),
        c_seed in any::<u64>(),
        x_seed in any::<u64>(),
    ) {
        let modulus = m as u64;
        let a = (a_seed % modulus) as i64;
        let c = (c_seed % modulus) as i64;
        let x = (x_seed % modulus) as i64;
        let mut lcg = LcgEngine::new(a, c, m, x).unwrap();

        for _ in 0..64 {
            let value = lcg.next_integer();
            prop_assert!((0..m).contains(&value));
            prop_assert_eq!(lcg.current(), value);
        }
        let frac = lcg.next_normalized();
        prop_assert!((0.0..1.0).contains(&frac));
    }

    #[test]
    fn prop_same_inputs_same_sequence(
        m in 1i64..1_000_000,
        a_seed in any::<u32>(),
        c_seed in any::<u32>(),
        x_seed in any::<u32>(),
    ) {
        let a = i64::from(a_seed) % m;
        let c = i64::from(c_seed) % m;
        let x = i64::from(x_seed) % m;

        let mut lcg1 = LcgEngine::new(a, c, m, x).unwrap();
        let mut lcg2 = LcgEngine::new(a, c, m, x).unwrap();
        prop_assert_eq!(lcg1.sequence(200), lcg2.sequence(200));
    }
}
