//! LCG Core - Rust Engine
//!
//! Linear congruential generator with up-front full-period validation.
//!
//! # Architecture
//!
//! - **arith**: gcd and prime factorization
//! - **models**: Generator parameters and their range errors
//! - **validation**: Hull-Dobell full-period checks
//! - **rng**: The stateful LCG engine
//!
//! # Typical Flow
//!
//! ```
//! use lcg_core_rs::{validate_parameters, GeneratorParameters, LcgEngine};
//!
//! let params = GeneratorParameters::new(5, 3, 16).unwrap();
//! let report = validate_parameters(&params);
//! assert!(report.is_full_period());
//!
//! let mut lcg = LcgEngine::from_parameters(params, 0).unwrap();
//! assert_eq!(lcg.sequence(3), vec![3, 2, 13]);
//! ```
//!
//! # Critical Invariants
//!
//! 1. Generator values always lie in `[0, m)`
//! 2. Same parameters + seed → same sequence (no global state)
//! 3. Validation never fails; it only reports

pub mod arith;
pub mod models;
pub mod rng;
pub mod validation;

// Re-exports for convenience
pub use arith::{gcd, prime_factors};
pub use models::{GeneratorParameters, ParameterError};
pub use rng::LcgEngine;
pub use validation::{validate, validate_parameters, HullDobellCondition, ValidationReport};
