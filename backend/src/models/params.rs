//! Generator parameters
//!
//! The (a, c, m) triple of the mixed LCG `x' = (a·x + c) mod m`.
//!
//! Invariants enforced at construction (and on deserialization):
//! - `m > 0`
//! - `0 <= a < m`
//! - `0 <= c < m`
//!
//! A well-formed triple says nothing about the period. Use
//! [`validate_parameters`](crate::validate_parameters) for that.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Range/positivity violations for generator inputs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Modulus must be positive, got {m}")]
    NonPositiveModulus { m: i64 },

    #[error("Multiplier {a} outside [0, {m})")]
    MultiplierOutOfRange { a: i64, m: i64 },

    #[error("Increment {c} outside [0, {m})")]
    IncrementOutOfRange { c: i64, m: i64 },

    #[error("Seed {seed} outside [0, {m})")]
    SeedOutOfRange { seed: i64, m: i64 },

    #[error("Checkpoint value {current} outside [0, {m})")]
    StateOutOfRange { current: i64, m: i64 },
}

/// Immutable LCG parameters
///
/// # Example
/// ```
/// use lcg_core_rs::{GeneratorParameters, ParameterError};
///
/// let params = GeneratorParameters::new(5, 3, 16).unwrap();
/// assert_eq!(params.modulus(), 16);
///
/// assert_eq!(
///     GeneratorParameters::new(16, 3, 16),
///     Err(ParameterError::MultiplierOutOfRange { a: 16, m: 16 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct GeneratorParameters {
    a: i64,
    c: i64,
    m: i64,
}

/// Unchecked wire form; converted through [`GeneratorParameters::new`]
#[derive(Deserialize)]
struct RawParameters {
    a: i64,
    c: i64,
    m: i64,
}

impl TryFrom<RawParameters> for GeneratorParameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(raw.a, raw.c, raw.m)
    }
}

impl GeneratorParameters {
    /// Check the range invariants and build the parameter set
    ///
    /// The modulus is checked first, so `new(5, 5, 0)` reports
    /// `NonPositiveModulus` rather than a range error.
    pub fn new(a: i64, c: i64, m: i64) -> Result<Self, ParameterError> {
        if m <= 0 {
            return Err(ParameterError::NonPositiveModulus { m });
        }
        if !(0..m).contains(&a) {
            return Err(ParameterError::MultiplierOutOfRange { a, m });
        }
        if !(0..m).contains(&c) {
            return Err(ParameterError::IncrementOutOfRange { c, m });
        }
        Ok(Self { a, c, m })
    }

    /// Check that `seed` is a legal starting state for these parameters
    pub fn check_seed(&self, seed: i64) -> Result<(), ParameterError> {
        if (0..self.m).contains(&seed) {
            Ok(())
        } else {
            Err(ParameterError::SeedOutOfRange { seed, m: self.m })
        }
    }

    /// Multiplier `a`
    pub fn multiplier(&self) -> i64 {
        self.a
    }

    /// Increment `c`
    pub fn increment(&self) -> i64 {
        self.c
    }

    /// Modulus `m`
    pub fn modulus(&self) -> i64 {
        self.m
    }
}
