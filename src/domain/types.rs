// ==========================================
// GreenBit - Domain Type Definitions
// ==========================================
// Commute modes and departments are closed enumerations.
// Factor lookup by wire identifier falls back to 0.0 for
// unmatched ids; this is documented policy, not an error.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Commute Mode
// ==========================================
// Emission factors in kg CO2e per km (Indian context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommuteMode {
    CarPetrol,    // petrol car
    CarEv,        // electric car
    Metro,        // metro rail
    Bus,          // city bus
    AutoRickshaw, // auto-rickshaw
    BikeWalk,     // bicycle or on foot, zero factor
}

impl CommuteMode {
    /// All modes, in the order the portal presents them.
    pub const ALL: [CommuteMode; 6] = [
        CommuteMode::CarPetrol,
        CommuteMode::CarEv,
        CommuteMode::Metro,
        CommuteMode::Bus,
        CommuteMode::AutoRickshaw,
        CommuteMode::BikeWalk,
    ];

    /// Stable wire identifier, as stored in commute records.
    pub fn id(&self) -> &'static str {
        match self {
            CommuteMode::CarPetrol => "car",
            CommuteMode::CarEv => "ev",
            CommuteMode::Metro => "metro",
            CommuteMode::Bus => "bus",
            CommuteMode::AutoRickshaw => "auto",
            CommuteMode::BikeWalk => "bike",
        }
    }

    /// Emission factor in kg CO2e per km.
    pub fn factor(&self) -> f64 {
        match self {
            CommuteMode::CarPetrol => 0.19,
            CommuteMode::CarEv => 0.07,
            CommuteMode::Metro => 0.04,
            CommuteMode::Bus => 0.08,
            CommuteMode::AutoRickshaw => 0.12,
            CommuteMode::BikeWalk => 0.0,
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            CommuteMode::CarPetrol => "Car (Petrol)",
            CommuteMode::CarEv => "Car (EV)",
            CommuteMode::Metro => "Metro",
            CommuteMode::Bus => "Bus",
            CommuteMode::AutoRickshaw => "Auto-rickshaw",
            CommuteMode::BikeWalk => "Bike/Walk",
        }
    }

    /// Resolve a wire identifier to a mode.
    ///
    /// # Returns
    /// - `Some(mode)` for a known identifier
    /// - `None` for anything else
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "car" => Some(CommuteMode::CarPetrol),
            "ev" => Some(CommuteMode::CarEv),
            "metro" => Some(CommuteMode::Metro),
            "bus" => Some(CommuteMode::Bus),
            "auto" => Some(CommuteMode::AutoRickshaw),
            "bike" => Some(CommuteMode::BikeWalk),
            _ => None,
        }
    }

    /// Factor for a wire identifier, 0.0 when unmatched.
    ///
    /// Unknown ids are absorbed silently so a stale or foreign record
    /// never poisons an aggregation run. Revisit if real-world accuracy
    /// ever requires surfacing these as validation warnings.
    pub fn factor_for_id(id: &str) -> f64 {
        CommuteMode::from_id(id).map(|m| m.factor()).unwrap_or(0.0)
    }
}

impl fmt::Display for CommuteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Department
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    Engineering,
    Sales,
    Marketing,
    Hr,
}

impl Department {
    /// All departments, used by the mock generator.
    pub const ALL: [Department; 4] = [
        Department::Engineering,
        Department::Sales,
        Department::Marketing,
        Department::Hr,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Hr => "HR",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
