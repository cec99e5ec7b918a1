// ==========================================
// GreenBit - Emission Factor Configuration
// ==========================================
// Scope 3 multipliers that are facility-independent: cloud compute,
// cloud storage and amortized server manufacturing carbon. The
// commute-mode factors live on the CommuteMode enum; these three are
// the only factors an operator may plausibly want to retune, so they
// load from an optional JSON file.
//
// Resolution order:
//   1. GREENBIT_FACTORS_PATH environment variable
//   2. <user config dir>/greenbit/factors.json
//   3. built-in defaults
// A missing file is not an error; a malformed one is.
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration layer errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read factor file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse factor file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid factor value (field={field}): must be >= 0, got {value}")]
    NegativeFactor { field: &'static str, value: f64 },
}

// ==========================================
// EmissionFactors
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub cloud_cpu_kg_per_vcpu_hour: f64,
    pub cloud_storage_kg_per_gb_month: f64,
    pub server_embodied_kg_per_month: f64,
}

impl Default for EmissionFactors {
    /// Defaults adjusted for Indian grid intensity.
    fn default() -> Self {
        Self {
            cloud_cpu_kg_per_vcpu_hour: 0.025,
            cloud_storage_kg_per_gb_month: 0.006,
            server_embodied_kg_per_month: 85.0,
        }
    }
}

impl EmissionFactors {
    /// Load factors from the standard resolution chain.
    ///
    /// # Returns
    /// - `Ok(factors)` from the first source that resolves
    /// - `Err(ConfigError)` only when a file exists but cannot be
    ///   read or parsed
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = factors_path_from_env() {
            tracing::info!("loading emission factors from {}", path.display());
            return Self::from_file(&path);
        }

        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("greenbit").join("factors.json");
            if path.exists() {
                tracing::info!("loading emission factors from {}", path.display());
                return Self::from_file(&path);
            }
        }

        tracing::debug!("no factor file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Load and validate factors from a specific JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let factors: EmissionFactors =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        factors.validate()?;
        Ok(factors)
    }

    /// Reject negative factors; a zero factor is legal (bike/walk
    /// already demonstrates the zero case on the commute side).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("cloud_cpu_kg_per_vcpu_hour", self.cloud_cpu_kg_per_vcpu_hour),
            (
                "cloud_storage_kg_per_gb_month",
                self.cloud_storage_kg_per_gb_month,
            ),
            (
                "server_embodied_kg_per_month",
                self.server_embodied_kg_per_month,
            ),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeFactor { field, value });
            }
        }
        Ok(())
    }
}

/// Explicit override path, empty value treated as unset.
fn factors_path_from_env() -> Option<PathBuf> {
    match std::env::var("GREENBIT_FACTORS_PATH") {
        Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path.trim())),
        _ => None,
    }
}
