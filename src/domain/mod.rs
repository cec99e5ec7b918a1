// ==========================================
// GreenBit - Domain Model Layer
// ==========================================
// Entities, types and invariants only. No computation beyond
// field clamping, no I/O, no engine logic.
// ==========================================

pub mod employee;
pub mod facility;
pub mod types;

// Re-export core types
pub use employee::{CommuteRecord, EmployeeRecord, EnrichedEmployee};
pub use facility::FacilityInputs;
pub use types::{CommuteMode, Department};
