// ==========================================
// GreenBit - Employee Portal API
// ==========================================
// The commute-logging flow behind the multi-step portal form:
// resolve the origin to a distance, clamp the numeric inputs,
// append the entry newest-first, and hand back a receipt with the
// commute-only impact estimate (the electricity share is allocated
// on the admin side and is not known at logging time).
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::routing::{CommuteOrigin, RouteEstimator};
use crate::app::state::AppState;
use crate::domain::employee::{CommuteRecord, EmployeeRecord};
use crate::domain::types::{CommuteMode, Department};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Hours are clamped to this range, matching the form's stepper.
pub const MIN_HOURS: f64 = 1.0;
pub const MAX_HOURS: f64 = 24.0;

// ==========================================
// CommuteLogForm - portal submission
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommuteLogForm {
    pub name: String,
    pub department: Department,
    /// Commute mode wire id. Unknown ids are accepted and resolve
    /// to factor 0 downstream; that policy lives in the domain.
    pub mode_id: String,
    pub origin: CommuteOrigin,
    pub hours: f64,
}

/// What the success screen shows after logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommuteLogReceipt {
    pub employee_id: u64,
    pub distance_km: f64,
    pub hours_logged: f64,
    /// Commute carbon only (round trip), kg CO2e.
    pub session_impact_kg: f64,
}

// ==========================================
// PortalApi
// ==========================================
pub struct PortalApi {
    estimator: Arc<dyn RouteEstimator>,
}

impl PortalApi {
    pub fn new(estimator: Arc<dyn RouteEstimator>) -> Self {
        Self { estimator }
    }

    /// Validate and log one commute session.
    ///
    /// # Errors
    /// - `ApiError::InvalidInput` for a blank name or non-finite
    ///   hours. Numeric range issues are clamped, not rejected.
    pub fn log_commute(
        &self,
        state: &mut AppState,
        form: CommuteLogForm,
    ) -> ApiResult<CommuteLogReceipt> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("employee name is required".into()));
        }
        if !form.hours.is_finite() {
            return Err(ApiError::InvalidInput(format!(
                "hours must be a finite number, got {}",
                form.hours
            )));
        }

        let distance_km = self
            .estimator
            .estimate_distance_km(&form.origin)
            .max(0.0);
        let hours_logged = form.hours.clamp(MIN_HOURS, MAX_HOURS);

        // Commute-only estimate for the success screen.
        let session_impact_kg =
            distance_km * 2.0 * CommuteMode::factor_for_id(&form.mode_id);

        let record = EmployeeRecord {
            employee_id: 0, // assigned by the state container
            name: name.to_string(),
            department: form.department,
            commute: CommuteRecord {
                mode_id: form.mode_id,
                distance_km,
            },
            hours_logged,
            logged_at: Some(Utc::now()),
        };

        let employee_id = state.push_log(record);
        tracing::info!(
            employee_id,
            distance_km,
            hours_logged,
            session_impact_kg,
            "commute logged"
        );

        Ok(CommuteLogReceipt {
            employee_id,
            distance_km,
            hours_logged,
            session_impact_kg,
        })
    }
}
