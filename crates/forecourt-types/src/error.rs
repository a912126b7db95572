//! Error types for forecourt

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid vehicle: {0}")]
    InvalidVehicle(String),

    #[error("Invalid pump: {0}")]
    InvalidPump(String),
}

pub type Result<T> = std::result::Result<T, Error>;
