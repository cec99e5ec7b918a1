// ==========================================
// GreenBit - Route Estimation Seam
// ==========================================
// The portal resolves an origin to a one-way distance through this
// trait. Real geocoding/routing is out of scope; the mock estimator
// stands in for that external collaborator and answers immediately.
// ==========================================

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Where the commute started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommuteOrigin {
    /// The registered home address; distance is known.
    Home,
    /// Free-text starting address; distance must be estimated.
    Custom { address: String },
}

/// Distance resolution contract for the portal.
pub trait RouteEstimator: Send + Sync {
    /// One-way distance in km for the given origin, >= 0.
    fn estimate_distance_km(&self, origin: &CommuteOrigin) -> f64;
}

// ==========================================
// MockRouteEstimator
// ==========================================
// Home resolves to the fixed registered route; custom addresses get
// a plausible 15..=34 km draw.
pub struct MockRouteEstimator {
    rng: Mutex<rand::rngs::StdRng>,
}

/// Registered home-to-office distance (km).
pub const HOME_DISTANCE_KM: f64 = 12.5;

impl MockRouteEstimator {
    pub fn new() -> Self {
        use rand::SeedableRng;
        Self {
            rng: Mutex::new(rand::rngs::StdRng::from_entropy()),
        }
    }

    /// Seeded constructor for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockRouteEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteEstimator for MockRouteEstimator {
    fn estimate_distance_km(&self, origin: &CommuteOrigin) -> f64 {
        match origin {
            CommuteOrigin::Home => HOME_DISTANCE_KM,
            CommuteOrigin::Custom { address } => {
                if address.trim().is_empty() {
                    return 0.0;
                }
                let mut rng = match self.rng.lock() {
                    Ok(rng) => rng,
                    // A poisoned RNG only means a panic elsewhere; a
                    // fixed fallback keeps the estimator total.
                    Err(_) => return HOME_DISTANCE_KM,
                };
                rng.gen_range(15..35) as f64
            }
        }
    }
}
