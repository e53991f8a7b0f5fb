//! Deterministic sequence generation
//!
//! Mixed-form linear congruential generator. Reproducible, NOT
//! cryptographically secure.

mod lcg;

pub use lcg::LcgEngine;
