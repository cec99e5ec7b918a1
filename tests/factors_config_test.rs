// ==========================================
// Emission factor configuration tests
// ==========================================
// File loading goes through explicit paths with tempfile; the env
// resolution chain is covered indirectly (missing file => defaults)
// to keep tests independent of process environment.
// ==========================================

use greenbit::{ConfigError, EmissionFactors};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_factors_from_valid_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "cloud_cpu_kg_per_vcpu_hour": 0.031,
            "cloud_storage_kg_per_gb_month": 0.004,
            "server_embodied_kg_per_month": 92.5
        }}"#
    )
    .unwrap();

    let factors = EmissionFactors::from_file(file.path()).unwrap();
    assert_eq!(factors.cloud_cpu_kg_per_vcpu_hour, 0.031);
    assert_eq!(factors.cloud_storage_kg_per_gb_month, 0.004);
    assert_eq!(factors.server_embodied_kg_per_month, 92.5);
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "server_embodied_kg_per_month": 60.0 }}"#).unwrap();

    let factors = EmissionFactors::from_file(file.path()).unwrap();
    assert_eq!(factors.server_embodied_kg_per_month, 60.0);
    assert_eq!(factors.cloud_cpu_kg_per_vcpu_hour, 0.025);
    assert_eq!(factors.cloud_storage_kg_per_gb_month, 0.006);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();

    let err = EmissionFactors::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_negative_factor_in_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "cloud_cpu_kg_per_vcpu_hour": -0.01 }}"#).unwrap();

    let err = EmissionFactors::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeFactor { .. }));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err =
        EmissionFactors::from_file(std::path::Path::new("/nonexistent/factors.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
