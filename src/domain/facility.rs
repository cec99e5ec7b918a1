// ==========================================
// GreenBit - Facility Inputs
// ==========================================
// Singleton configuration record for the shared facility: the
// monthly electricity bill, grid intensity, cloud usage and server
// fleet. Owned and mutated by the admin side only; the allocator
// reads snapshots.
//
// Invariant: every field is clamped to >= 0 on every update path.
// The allocator does not re-validate.
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityInputs {
    pub electricity_kwh: f64,  // monthly usage (kWh)
    pub grid_factor: f64,      // grid intensity (kg CO2e per kWh)
    pub cloud_cpu_hours: f64,  // monthly compute (vCPU hours)
    pub cloud_storage_gb: f64, // monthly storage (GB)
    pub server_count: f64,     // active rack servers
}

impl Default for FacilityInputs {
    /// Indian-office defaults: 15 000 kWh at the 0.82 grid factor,
    /// plus a modest cloud and on-prem footprint.
    fn default() -> Self {
        Self {
            electricity_kwh: 15000.0,
            grid_factor: 0.82,
            cloud_cpu_hours: 4500.0,
            cloud_storage_gb: 1800.0,
            server_count: 6.0,
        }
    }
}

impl FacilityInputs {
    /// Build inputs with all fields clamped to non-negative.
    pub fn clamped(
        electricity_kwh: f64,
        grid_factor: f64,
        cloud_cpu_hours: f64,
        cloud_storage_gb: f64,
        server_count: f64,
    ) -> Self {
        Self {
            electricity_kwh: electricity_kwh.max(0.0),
            grid_factor: grid_factor.max(0.0),
            cloud_cpu_hours: cloud_cpu_hours.max(0.0),
            cloud_storage_gb: cloud_storage_gb.max(0.0),
            server_count: server_count.max(0.0),
        }
    }

    /// Re-apply the non-negative invariant in place.
    ///
    /// Called by every admin update path before the new snapshot
    /// becomes visible to readers.
    pub fn clamp_non_negative(&mut self) {
        self.electricity_kwh = self.electricity_kwh.max(0.0);
        self.grid_factor = self.grid_factor.max(0.0);
        self.cloud_cpu_hours = self.cloud_cpu_hours.max(0.0);
        self.cloud_storage_gb = self.cloud_storage_gb.max(0.0);
        self.server_count = self.server_count.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_admin_seed_values() {
        let inputs = FacilityInputs::default();
        assert_eq!(inputs.electricity_kwh, 15000.0);
        assert_eq!(inputs.grid_factor, 0.82);
        assert_eq!(inputs.cloud_cpu_hours, 4500.0);
        assert_eq!(inputs.cloud_storage_gb, 1800.0);
        assert_eq!(inputs.server_count, 6.0);
    }

    #[test]
    fn test_clamped_constructor_floors_negatives_at_zero() {
        let inputs = FacilityInputs::clamped(-100.0, -0.5, -1.0, -2.0, -3.0);
        assert_eq!(inputs.electricity_kwh, 0.0);
        assert_eq!(inputs.grid_factor, 0.0);
        assert_eq!(inputs.cloud_cpu_hours, 0.0);
        assert_eq!(inputs.cloud_storage_gb, 0.0);
        assert_eq!(inputs.server_count, 0.0);
    }

    #[test]
    fn test_clamp_in_place_leaves_valid_fields_untouched() {
        let mut inputs = FacilityInputs::default();
        inputs.cloud_storage_gb = -42.0;
        inputs.clamp_non_negative();
        assert_eq!(inputs.cloud_storage_gb, 0.0);
        assert_eq!(inputs.electricity_kwh, 15000.0);
    }
}
