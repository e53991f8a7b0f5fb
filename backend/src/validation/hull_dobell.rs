//! Hull-Dobell theorem checks
//!
//! The mixed LCG `x' = (a·x + c) mod m` has period exactly `m` iff:
//! 1. `gcd(c, m) == 1`
//! 2. `(a - 1)` is divisible by every prime factor of `m`
//! 3. `(a - 1)` is divisible by 4 whenever `m` is
//!
//! All three conditions are always evaluated so the report is a complete
//! diagnostic. For `m <= 1` condition 2 has no factors to check and holds
//! vacuously.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::arith::{gcd, prime_factors};
use crate::models::GeneratorParameters;

/// One of the three Hull-Dobell conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HullDobellCondition {
    /// `gcd(c, m) == 1`
    Coprime,
    /// `(a - 1) mod p == 0` for each prime `p | m`
    FactorDivisibility,
    /// `m mod 4 == 0` implies `(a - 1) mod 4 == 0`
    DivisibleByFour,
}

/// Outcome of a single validation call
///
/// Plain data: the three condition flags, the overall verdict, and the
/// intermediate values a reporter needs to explain them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub multiplier: i64,
    pub increment: i64,
    pub modulus: i64,

    /// `gcd(c, m)`
    pub gcd: u64,
    /// Distinct prime factors of `m`
    pub prime_factors: BTreeSet<i64>,
    /// Prime factors `p` of `m` with `(a - 1) mod p != 0`
    pub failing_factors: BTreeSet<i64>,
    /// Whether condition 3 applies at all
    pub modulus_divisible_by_four: bool,

    pub coprime_ok: bool,
    pub factor_divisibility_ok: bool,
    pub mod4_ok: bool,

    /// Conjunction of the three flags above
    pub full_period: bool,
}

impl ValidationReport {
    /// True when the parameters guarantee a period of exactly `m`
    pub fn is_full_period(&self) -> bool {
        self.full_period
    }

    /// Conditions that did not hold, in theorem order
    pub fn failed_conditions(&self) -> Vec<HullDobellCondition> {
        [
            (HullDobellCondition::Coprime, self.coprime_ok),
            (HullDobellCondition::FactorDivisibility, self.factor_divisibility_ok),
            (HullDobellCondition::DivisibleByFour, self.mod4_ok),
        ]
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(condition, _)| condition)
        .collect()
    }
}

/// Check (a, c, m) against the Hull-Dobell conditions
///
/// Defined for any integers, but only meaningful for `m > 0`. Never fails
/// and never short-circuits.
///
/// # Example
/// ```
/// use lcg_core_rs::{validate, HullDobellCondition};
///
/// let report = validate(21, 3, 16);
/// assert!(report.is_full_period());
///
/// let report = validate(2, 0, 10);
/// assert!(!report.is_full_period());
/// assert!(report.failed_conditions().contains(&HullDobellCondition::Coprime));
/// ```
pub fn validate(a: i64, c: i64, m: i64) -> ValidationReport {
    // i128 so that `a - 1` is exact for a == i64::MIN
    let a_minus_one = i128::from(a) - 1;

    let g = gcd(c, m);
    let coprime_ok = g == 1;

    let factors = prime_factors(m);
    let failing_factors: BTreeSet<i64> = factors
        .iter()
        .copied()
        .filter(|&p| a_minus_one % i128::from(p) != 0)
        .collect();
    let factor_divisibility_ok = failing_factors.is_empty();

    let modulus_divisible_by_four = m % 4 == 0;
    let mod4_ok = !modulus_divisible_by_four || a_minus_one % 4 == 0;

    let full_period = coprime_ok && factor_divisibility_ok && mod4_ok;

    tracing::debug!(
        a,
        c,
        m,
        gcd = g,
        coprime_ok,
        factor_divisibility_ok,
        mod4_ok,
        full_period,
        "validated LCG parameters"
    );

    ValidationReport {
        multiplier: a,
        increment: c,
        modulus: m,
        gcd: g,
        prime_factors: factors,
        failing_factors,
        modulus_divisible_by_four,
        coprime_ok,
        factor_divisibility_ok,
        mod4_ok,
        full_period,
    }
}

/// [`validate`] over an already range-checked parameter set
pub fn validate_parameters(params: &GeneratorParameters) -> ValidationReport {
    validate(params.multiplier(), params.increment(), params.modulus())
}
