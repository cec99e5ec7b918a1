// ==========================================
// GreenBit - Application State
// ==========================================
// Owns the shared mutable state: the append-only roster and the
// facility inputs. All mutation is serialized on a single logical
// thread of control by the host; engines and read APIs only ever
// see `&` snapshots, so no locking is needed here.
// ==========================================

use crate::config::EmissionFactors;
use crate::domain::employee::EmployeeRecord;
use crate::domain::facility::FacilityInputs;
use crate::seed;
use rand::Rng;

pub struct AppState {
    /// Roster, newest user-submitted entries first. Entries are
    /// never mutated or removed once added.
    roster: Vec<EmployeeRecord>,

    /// Facility-level inputs, admin-owned, clamped on every update.
    inputs: FacilityInputs,

    /// Scope 3 multipliers resolved at startup.
    factors: EmissionFactors,

    /// Next id handed to a user-submitted entry.
    next_employee_id: u64,
}

impl AppState {
    /// Fresh state with an empty roster and default facility inputs.
    pub fn new(factors: EmissionFactors) -> Self {
        Self {
            roster: Vec::new(),
            inputs: FacilityInputs::default(),
            factors,
            next_employee_id: 1,
        }
    }

    // ==========================================
    // Snapshots (read side)
    // ==========================================

    pub fn roster(&self) -> &[EmployeeRecord] {
        &self.roster
    }

    pub fn inputs(&self) -> &FacilityInputs {
        &self.inputs
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    // ==========================================
    // Mutations (admin / portal side)
    // ==========================================

    /// Replace the roster with `count` generated mock employees.
    pub fn seed_roster<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        self.roster = seed::generate_roster(rng, count);
        self.next_employee_id = self.roster.len() as u64 + 1;
        tracing::info!(count = self.roster.len(), "roster seeded");
    }

    /// Append a user-submitted entry at the front (newest first).
    ///
    /// The caller supplies a fully validated record except for the
    /// id, which this method assigns.
    pub fn push_log(&mut self, mut record: EmployeeRecord) -> u64 {
        let employee_id = self.next_employee_id;
        self.next_employee_id += 1;
        record.employee_id = employee_id;
        self.roster.insert(0, record);
        employee_id
    }

    /// Replace facility inputs, re-clamping every field to >= 0.
    pub fn update_inputs(&mut self, mut inputs: FacilityInputs) {
        inputs.clamp_non_negative();
        tracing::debug!(?inputs, "facility inputs updated");
        self.inputs = inputs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::CommuteRecord;
    use crate::domain::types::Department;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn log_entry(name: &str) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: 0, // assigned by push_log
            name: name.to_string(),
            department: Department::Engineering,
            commute: CommuteRecord {
                mode_id: "metro".to_string(),
                distance_km: 12.5,
            },
            hours_logged: 8.0,
            logged_at: None,
        }
    }

    #[test]
    fn test_push_log_is_newest_first() {
        let mut state = AppState::new(EmissionFactors::default());
        let mut rng = StdRng::seed_from_u64(1);
        state.seed_roster(&mut rng, 3);

        let first = state.push_log(log_entry("First Logger"));
        let second = state.push_log(log_entry("Second Logger"));

        assert_eq!(state.roster().len(), 5);
        assert_eq!(state.roster()[0].name, "Second Logger");
        assert_eq!(state.roster()[1].name, "First Logger");
        assert!(second > first);
    }

    #[test]
    fn test_push_log_ids_continue_after_seed() {
        let mut state = AppState::new(EmissionFactors::default());
        let mut rng = StdRng::seed_from_u64(1);
        state.seed_roster(&mut rng, 25);
        assert_eq!(state.push_log(log_entry("Arjun Reddy")), 26);
    }

    #[test]
    fn test_update_inputs_clamps_negatives() {
        let mut state = AppState::new(EmissionFactors::default());
        state.update_inputs(FacilityInputs {
            electricity_kwh: -500.0,
            grid_factor: 0.82,
            cloud_cpu_hours: 4500.0,
            cloud_storage_gb: -1.0,
            server_count: 6.0,
        });
        assert_eq!(state.inputs().electricity_kwh, 0.0);
        assert_eq!(state.inputs().cloud_storage_gb, 0.0);
        assert_eq!(state.inputs().grid_factor, 0.82);
    }
}
