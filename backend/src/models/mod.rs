//! Domain models for the generator

pub mod params;

// Re-exports
pub use params::{GeneratorParameters, ParameterError};
