//! Mixed linear congruential generator
//!
//! Recurrence: `x' = (a·x + c) mod m`.
//!
//! # Preconditions
//!
//! Construction only checks that the inputs are well formed (`m > 0`,
//! `a`, `c`, seed in `[0, m)`). It does NOT check the Hull-Dobell
//! conditions: callers that need a full period must run
//! [`validate_parameters`](crate::validate_parameters) first.
//!
//! # Arithmetic width
//!
//! The step is computed in `i128`. With every operand in `[0, m)` and
//! `m <= i64::MAX`, `a·x + c < 2^127`, so the whole `i64` parameter range is
//! supported without overflow or wrapping.
//!
//! # Determinism
//!
//! Same parameters + same seed → same sequence. There is no hidden global
//! state, so independent engines can live side by side.

use serde::{Deserialize, Serialize};

use crate::models::{GeneratorParameters, ParameterError};

/// Largest `f64` strictly below 1.0
const ONE_BELOW: f64 = 1.0 - f64::EPSILON / 2.0;

/// LCG engine owning its current value
///
/// # Example
/// ```
/// use lcg_core_rs::LcgEngine;
///
/// let mut lcg = LcgEngine::new(5, 3, 16, 0).unwrap();
/// assert_eq!(lcg.next_integer(), 3);
/// assert_eq!(lcg.next_integer(), 2);
/// assert_eq!(lcg.next_integer(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineCheckpoint", into = "EngineCheckpoint")]
pub struct LcgEngine {
    params: GeneratorParameters,
    /// Current value, always in `[0, m)`
    current: i64,
}

/// Flat serialized form of an engine: `{ a, c, m, current }`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EngineCheckpoint {
    a: i64,
    c: i64,
    m: i64,
    current: i64,
}

impl TryFrom<EngineCheckpoint> for LcgEngine {
    type Error = ParameterError;

    fn try_from(cp: EngineCheckpoint) -> Result<Self, Self::Error> {
        let params = GeneratorParameters::new(cp.a, cp.c, cp.m)?;
        if !(0..cp.m).contains(&cp.current) {
            return Err(ParameterError::StateOutOfRange {
                current: cp.current,
                m: cp.m,
            });
        }
        Ok(Self {
            params,
            current: cp.current,
        })
    }
}

impl From<LcgEngine> for EngineCheckpoint {
    fn from(engine: LcgEngine) -> Self {
        Self {
            a: engine.params.multiplier(),
            c: engine.params.increment(),
            m: engine.params.modulus(),
            current: engine.current,
        }
    }
}

impl LcgEngine {
    /// Create an engine from raw integers
    ///
    /// # Errors
    /// [`ParameterError`] if `m <= 0` or any of `a`, `c`, `seed` lies outside
    /// `[0, m)`.
    ///
    /// # Example
    /// ```
    /// use lcg_core_rs::{LcgEngine, ParameterError};
    ///
    /// assert_eq!(
    ///     LcgEngine::new(1, 1, 0, 0),
    ///     Err(ParameterError::NonPositiveModulus { m: 0 })
    /// );
    /// ```
    pub fn new(a: i64, c: i64, m: i64, seed: i64) -> Result<Self, ParameterError> {
        let params = GeneratorParameters::new(a, c, m)?;
        Self::from_parameters(params, seed)
    }

    /// Create an engine from an already checked parameter set
    pub fn from_parameters(params: GeneratorParameters, seed: i64) -> Result<Self, ParameterError> {
        params.check_seed(seed)?;
        tracing::debug!(
            a = params.multiplier(),
            c = params.increment(),
            m = params.modulus(),
            seed,
            "constructed LCG engine"
        );
        Ok(Self {
            params,
            current: seed,
        })
    }

    /// Advance one step and return the new value, in `[0, m)`
    pub fn next_integer(&mut self) -> i64 {
        let a = i128::from(self.params.multiplier());
        let c = i128::from(self.params.increment());
        let m = i128::from(self.params.modulus());

        let mut next = (a * i128::from(self.current) + c) % m;
        // Unreachable while every operand is non-negative
        if next < 0 {
            next += m;
        }

        // 0 <= next < m <= i64::MAX
        self.current = next as i64;
        tracing::trace!(value = self.current, "lcg step");
        self.current
    }

    /// Advance one step and return the new value divided by `m`, in `[0.0, 1.0)`
    ///
    /// For `m > 2^53` the quotient can round up to 1.0; it is clamped to the
    /// largest `f64` below 1.0.
    ///
    /// # Example
    /// ```
    /// use lcg_core_rs::LcgEngine;
    ///
    /// let mut lcg = LcgEngine::new(5, 3, 16, 0).unwrap();
    /// assert_eq!(lcg.next_normalized(), 3.0 / 16.0);
    /// ```
    pub fn next_normalized(&mut self) -> f64 {
        let value = self.next_integer();
        (value as f64 / self.params.modulus() as f64).min(ONE_BELOW)
    }

    /// Advance `count` steps, collecting every value
    pub fn sequence(&mut self, count: usize) -> Vec<i64> {
        (0..count).map(|_| self.next_integer()).collect()
    }

    /// Current value (the seed until the first step)
    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn parameters(&self) -> GeneratorParameters {
        self.params
    }

    pub fn multiplier(&self) -> i64 {
        self.params.multiplier()
    }

    pub fn increment(&self) -> i64 {
        self.params.increment()
    }

    pub fn modulus(&self) -> i64 {
        self.params.modulus()
    }
}
