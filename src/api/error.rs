// ==========================================
// GreenBit - API Layer Error Types
// ==========================================
// The allocator itself is total over its input domain; errors only
// arise at the edges (form handling, configuration). Every message
// carries an explicit reason.
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Input handling =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    // ===== Configuration =====
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    // ===== Generic =====
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
