//! Full-period validation
//!
//! Checks candidate (a, c, m) against the Hull-Dobell conditions and returns
//! structured facts. Rendering those facts as text is the caller's job.

mod hull_dobell;

pub use hull_dobell::{validate, validate_parameters, HullDobellCondition, ValidationReport};
