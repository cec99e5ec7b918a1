// ==========================================
// GreenBit - Engine Layer
// ==========================================
// Pure computation over state snapshots. Engines hold no state,
// perform no I/O and never mutate their inputs; callers re-invoke
// them fully on every read of a derived view.
// ==========================================

pub mod allocator;

pub use allocator::{EmissionsAllocator, FootprintReport};
