// ==========================================
// GreenBit - Admin Dashboard API
// ==========================================
// Read-only projection of the current state into the DTOs the
// admin surfaces consume: summary cards, the department chart and
// the live allocation ledger. Everything is recomputed from the
// snapshot on every call; nothing is cached.
// ==========================================

use crate::app::state::AppState;
use crate::domain::types::Department;
use crate::engine::{EmissionsAllocator, FootprintReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DTOs
// ==========================================

/// One bar of the emissions-by-department chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRow {
    pub department: Department,
    pub total_carbon_kg: f64,
}

/// One row of the live bill-splitting ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRow {
    pub employee_id: u64,
    pub name: String,
    pub logged_at: Option<DateTime<Utc>>,
    pub hours_logged: f64,
    pub electricity_share_kg: f64,
}

/// Everything the company-overview page needs, raw precision;
/// rounding to whole kilograms is left to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub headcount: usize,
    pub total_hours_logged: f64,
    pub allocation_rate_kg_per_hour: f64,

    // Summary cards
    pub company_total_kg: f64,
    pub electricity_carbon_kg: f64,
    pub cloud_carbon_kg: f64,
    pub hardware_carbon_kg: f64,
    pub commute_carbon_kg: f64,

    // Chart and ledger, ledger in roster order (newest first)
    pub department_rows: Vec<DepartmentRow>,
    pub ledger: Vec<LedgerRow>,
}

// ==========================================
// DashboardApi
// ==========================================
pub struct DashboardApi {
    allocator: EmissionsAllocator,
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApi {
    pub fn new() -> Self {
        Self {
            allocator: EmissionsAllocator::new(),
        }
    }

    /// Full footprint report over the current snapshot.
    pub fn report(&self, state: &AppState) -> FootprintReport {
        self.allocator
            .generate_report(state.roster(), state.inputs(), state.factors())
    }

    /// Company overview projection for the admin page.
    pub fn overview(&self, state: &AppState) -> DashboardOverview {
        let report = self.report(state);

        let department_rows = report
            .by_department
            .iter()
            .map(|(department, total)| DepartmentRow {
                department: *department,
                total_carbon_kg: *total,
            })
            .collect();

        let ledger = report
            .enriched
            .iter()
            .map(|e| LedgerRow {
                employee_id: e.record.employee_id,
                name: e.record.name.clone(),
                logged_at: e.record.logged_at,
                hours_logged: e.record.hours_logged,
                electricity_share_kg: e.electricity_share_kg,
            })
            .collect();

        DashboardOverview {
            headcount: report.headcount,
            total_hours_logged: report.total_hours_logged,
            allocation_rate_kg_per_hour: report.allocation_rate_kg_per_hour,
            company_total_kg: report.company_total_kg,
            electricity_carbon_kg: report.electricity_carbon_kg,
            cloud_carbon_kg: report.cloud_carbon_kg,
            hardware_carbon_kg: report.hardware_carbon_kg,
            commute_carbon_kg: report.commute_carbon_kg,
            department_rows,
            ledger,
        }
    }
}
