// ==========================================
// GreenBit - API Layer
// ==========================================
// The function-call boundary between the (excluded) presentation
// layer and the core: the admin read path and the portal write path.
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod portal_api;
pub mod routing;

pub use dashboard_api::{DashboardApi, DashboardOverview, DepartmentRow, LedgerRow};
pub use error::{ApiError, ApiResult};
pub use portal_api::{CommuteLogForm, CommuteLogReceipt, PortalApi};
pub use routing::{CommuteOrigin, MockRouteEstimator, RouteEstimator};
