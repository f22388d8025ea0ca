//! Error types for the nuclear simulation modules

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NuclearError {
    #[error("isotope not found: {0}")]
    IsotopeNotFound(String),

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NuclearError>;
