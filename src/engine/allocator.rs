// ==========================================
// GreenBit - Emissions Allocation Engine
// ==========================================
// Responsibility: deterministic, side-effect-free derivation of
// emissions totals and per-employee shares from a roster snapshot
// and the current facility inputs.
//
// Input: roster + FacilityInputs + EmissionFactors (read-only)
// Output: FootprintReport (category totals, allocation rate,
//         enriched roster, department aggregates, grand total)
//
// Numeric policy: plain f64 throughout, no internal rounding.
// Formatting to whole kilograms happens at display time only, so
// repeated aggregation never compounds rounding error.
// ==========================================

use crate::config::EmissionFactors;
use crate::domain::employee::{EmployeeRecord, EnrichedEmployee};
use crate::domain::facility::FacilityInputs;
use crate::domain::types::{CommuteMode, Department};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// FootprintReport - full derived view
// ==========================================
// Recomputed from scratch on every read; never cached or stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintReport {
    // Category totals (kg CO2e)
    pub electricity_carbon_kg: f64, // Scope 2
    pub cloud_carbon_kg: f64,       // Scope 3, cloud compute + storage
    pub hardware_carbon_kg: f64,    // Scope 3, embodied server carbon
    pub commute_carbon_kg: f64,     // Scope 3, summed over the roster

    // Allocation
    pub total_hours_logged: f64,
    pub allocation_rate_kg_per_hour: f64,

    // Derived views
    pub enriched: Vec<EnrichedEmployee>, // same order as the input roster
    pub by_department: BTreeMap<Department, f64>,

    // Aggregate
    pub company_total_kg: f64,
    pub headcount: usize,
}

// ==========================================
// EmissionsAllocator
// ==========================================
pub struct EmissionsAllocator {
    // Stateless engine; inputs arrive as snapshots on every call.
}

impl Default for EmissionsAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmissionsAllocator {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Category totals
    // ==========================================

    /// Scope 2 electricity carbon: usage x grid intensity.
    ///
    /// Negative inputs are disallowed upstream (clamped at the point
    /// of entry) and are not re-validated here.
    pub fn electricity_carbon(&self, inputs: &FacilityInputs) -> f64 {
        inputs.electricity_kwh * inputs.grid_factor
    }

    /// Cloud carbon: compute plus storage, each under its own factor.
    pub fn cloud_carbon(&self, inputs: &FacilityInputs, factors: &EmissionFactors) -> f64 {
        inputs.cloud_cpu_hours * factors.cloud_cpu_kg_per_vcpu_hour
            + inputs.cloud_storage_gb * factors.cloud_storage_kg_per_gb_month
    }

    /// Embodied hardware carbon, amortized monthly per server unit.
    pub fn hardware_carbon(&self, inputs: &FacilityInputs, factors: &EmissionFactors) -> f64 {
        inputs.server_count * factors.server_embodied_kg_per_month
    }

    // ==========================================
    // Allocation
    // ==========================================

    /// Electricity carbon attributed per hour of logged presence.
    ///
    /// Defined as 0.0 when the roster is empty or total hours is 0.
    /// This is allocation policy (nobody present means nothing to
    /// attribute), not an incidental division guard; preserve exactly.
    pub fn allocation_rate(
        &self,
        total_electricity_carbon: f64,
        roster: &[EmployeeRecord],
    ) -> f64 {
        let total_hours: f64 = roster.iter().map(|e| e.hours_logged).sum();
        if total_hours > 0.0 {
            total_electricity_carbon / total_hours
        } else {
            0.0
        }
    }

    // ==========================================
    // Per-employee derivation
    // ==========================================

    /// Derive one employee's footprint view.
    ///
    /// commute = one-way distance x 2 x mode factor (round trip);
    /// an unmatched mode id contributes factor 0.
    pub fn enrich_employee(
        &self,
        employee: &EmployeeRecord,
        allocation_rate: f64,
    ) -> EnrichedEmployee {
        let mode_factor = CommuteMode::factor_for_id(&employee.commute.mode_id);
        let commute_carbon_kg = employee.commute.distance_km * 2.0 * mode_factor;
        let electricity_share_kg = employee.hours_logged * allocation_rate;

        EnrichedEmployee {
            record: employee.clone(),
            commute_carbon_kg,
            electricity_share_kg,
            total_carbon_kg: commute_carbon_kg + electricity_share_kg,
        }
    }

    /// Enrich the whole roster, preserving input order.
    pub fn enrich_roster(
        &self,
        roster: &[EmployeeRecord],
        allocation_rate: f64,
    ) -> Vec<EnrichedEmployee> {
        roster
            .iter()
            .map(|e| self.enrich_employee(e, allocation_rate))
            .collect()
    }

    // ==========================================
    // Aggregation
    // ==========================================

    /// Sum total carbon per department.
    ///
    /// Departments with no roster members are absent from the map,
    /// not zero-valued. Result ordering is independent of roster
    /// insertion order.
    pub fn aggregate_by_department(
        &self,
        enriched: &[EnrichedEmployee],
    ) -> BTreeMap<Department, f64> {
        let mut agg: BTreeMap<Department, f64> = BTreeMap::new();
        for e in enriched {
            *agg.entry(e.record.department).or_insert(0.0) += e.total_carbon_kg;
        }
        agg
    }

    /// Company-wide grand total across all four categories.
    pub fn company_total(
        &self,
        electricity_kg: f64,
        commute_kg: f64,
        cloud_kg: f64,
        hardware_kg: f64,
    ) -> f64 {
        electricity_kg + commute_kg + cloud_kg + hardware_kg
    }

    // ==========================================
    // Full pipeline
    // ==========================================

    /// Run the whole derivation over one snapshot.
    pub fn generate_report(
        &self,
        roster: &[EmployeeRecord],
        inputs: &FacilityInputs,
        factors: &EmissionFactors,
    ) -> FootprintReport {
        let electricity_carbon_kg = self.electricity_carbon(inputs);
        let cloud_carbon_kg = self.cloud_carbon(inputs, factors);
        let hardware_carbon_kg = self.hardware_carbon(inputs, factors);

        let total_hours_logged: f64 = roster.iter().map(|e| e.hours_logged).sum();
        let allocation_rate_kg_per_hour = self.allocation_rate(electricity_carbon_kg, roster);

        let enriched = self.enrich_roster(roster, allocation_rate_kg_per_hour);
        let commute_carbon_kg: f64 = enriched.iter().map(|e| e.commute_carbon_kg).sum();
        let by_department = self.aggregate_by_department(&enriched);

        let company_total_kg = self.company_total(
            electricity_carbon_kg,
            commute_carbon_kg,
            cloud_carbon_kg,
            hardware_carbon_kg,
        );

        FootprintReport {
            electricity_carbon_kg,
            cloud_carbon_kg,
            hardware_carbon_kg,
            commute_carbon_kg,
            total_hours_logged,
            allocation_rate_kg_per_hour,
            enriched,
            by_department,
            company_total_kg,
            headcount: roster.len(),
        }
    }
}
