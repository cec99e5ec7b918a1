// ==========================================
// GreenBit - Application Layer
// ==========================================
// Hosts the state container the API layers operate on.
// ==========================================

pub mod state;

pub use state::AppState;
