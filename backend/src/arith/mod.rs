//! Number-theory primitives
//!
//! Used only by the Hull-Dobell validator. Everything here is pure and
//! infallible over the whole `i64` domain.

mod number_theory;

pub use number_theory::{gcd, prime_factors};
