// ==========================================
// GreenBit - Carbon Accounting Core
// ==========================================
// Bottom-up emission tracking for the enterprise: employees log
// commute sessions, the admin view allocates the shared facility
// footprint across them proportionally to hours logged.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - pure derivation over snapshots
pub mod engine;

// Configuration layer - emission factors
pub mod config;

// Seed data - mock roster generation
pub mod seed;

// API layer - admin read path, portal write path
pub mod api;

// Application layer - state container
pub mod app;

// Logging setup
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::{
    CommuteMode, CommuteRecord, Department, EmployeeRecord, EnrichedEmployee, FacilityInputs,
};

// Engine
pub use engine::{EmissionsAllocator, FootprintReport};

// Configuration
pub use config::{ConfigError, EmissionFactors};

// API
pub use api::{ApiError, DashboardApi, DashboardOverview, PortalApi};

// Application
pub use app::AppState;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "GreenBit";
