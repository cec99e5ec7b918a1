// ==========================================
// GreenBit - Demo Binary
// ==========================================
// Exercises the library end to end: seed a mock roster, log one
// commute through the portal, then render the admin company
// overview as text. Whole-kilogram rounding happens here and only
// here; the core carries full precision.
// ==========================================

use anyhow::Result;
use greenbit::api::{CommuteLogForm, CommuteOrigin, MockRouteEstimator, PortalApi};
use greenbit::{
    AppState, DashboardApi, DashboardOverview, Department, EmissionFactors,
};
use std::sync::Arc;

fn main() -> Result<()> {
    greenbit::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - carbon accounting core", greenbit::APP_NAME);
    tracing::info!("version: {}", greenbit::VERSION);
    tracing::info!("==================================================");

    // Emission factors: env/file override, defaults otherwise.
    let factors = EmissionFactors::load()?;

    let mut state = AppState::new(factors);
    state.seed_roster(&mut rand::thread_rng(), greenbit::seed::DEFAULT_ROSTER_SIZE);

    // One portal submission, the way the employee form produces it.
    let portal = PortalApi::new(Arc::new(MockRouteEstimator::new()));
    let receipt = portal.log_commute(
        &mut state,
        CommuteLogForm {
            name: "Arjun Reddy".to_string(),
            department: Department::Engineering,
            mode_id: "metro".to_string(),
            origin: CommuteOrigin::Home,
            hours: 8.0,
        },
    )?;
    tracing::info!(
        "logged commute: est. impact {:.2} kg CO2e",
        receipt.session_impact_kg
    );

    let overview = DashboardApi::new().overview(&state);
    render_overview(&overview);

    Ok(())
}

fn render_overview(overview: &DashboardOverview) {
    println!();
    println!("GreenBit | Company Overview");
    println!("===========================");
    println!(
        "employees: {:>4}    allocation rate: {:.2} kg/hr",
        overview.headcount, overview.allocation_rate_kg_per_hour
    );
    println!();
    println!("  Total Footprint        {:>8.0} kg", overview.company_total_kg);
    println!(
        "  Electricity (Scope 2)  {:>8.0} kg",
        overview.electricity_carbon_kg
    );
    println!(
        "  Cloud & Infra          {:>8.0} kg",
        overview.cloud_carbon_kg + overview.hardware_carbon_kg
    );
    println!(
        "  Commute (Scope 3)      {:>8.0} kg",
        overview.commute_carbon_kg
    );

    println!();
    println!("Emissions by Department");
    println!("-----------------------");
    for row in &overview.department_rows {
        println!("  {:<12} {:>8.0} kg", row.department.label(), row.total_carbon_kg);
    }

    println!();
    println!("Live Ledger (bill share by hours)");
    println!("---------------------------------");
    println!("  {:<22} {:>4}  {:>12}", "Employee", "Hrs", "Bill Share");
    for row in &overview.ledger {
        println!(
            "  {:<22} {:>4}  {:>9.2} kg",
            row.name, row.hours_logged, row.electricity_share_kg
        );
    }
    println!();
}
