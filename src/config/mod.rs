// ==========================================
// GreenBit - Configuration Layer
// ==========================================
// Tunable emission factors with file/env overrides. Facility inputs
// are runtime state, not configuration; they live in the domain layer.
// ==========================================

pub mod factors;

pub use factors::{ConfigError, EmissionFactors};
