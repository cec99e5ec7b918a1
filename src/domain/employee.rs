// ==========================================
// GreenBit - Employee Domain Model
// ==========================================
// EmployeeRecord is the roster's unit of fact: created once by the
// seed generator or the portal, never mutated or deleted afterwards.
// EnrichedEmployee is a derived view, recomputed on every read and
// never stored.
// ==========================================

use crate::domain::types::Department;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// CommuteRecord - one logged commute
// ==========================================
// The mode is kept as its wire identifier rather than the enum so
// that an unmatched id flows through to the factor-0 fallback
// instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommuteRecord {
    pub mode_id: String,  // commute mode wire id ("car", "metro", ...)
    pub distance_km: f64, // one-way distance, clamped >= 0 at entry
}

// ==========================================
// EmployeeRecord - roster entry
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: u64,
    pub name: String,
    pub department: Department,
    pub commute: CommuteRecord,
    pub hours_logged: f64, // office presence in hours, positive
    pub logged_at: Option<DateTime<Utc>>,
}

// ==========================================
// EnrichedEmployee - derived footprint view
// ==========================================
// record + computed shares; produced by the EmissionsAllocator.
// Values carry full f64 precision; rounding to whole kilograms is a
// display concern and must never be baked in here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedEmployee {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    pub commute_carbon_kg: f64,     // distance x 2 x mode factor
    pub electricity_share_kg: f64,  // hours x allocation rate
    pub total_carbon_kg: f64,       // commute + electricity share
}
