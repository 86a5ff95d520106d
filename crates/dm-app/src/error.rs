//! Error types for the dm-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Data(#[from] dm_data::DataLoadError),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Unknown province: {name}")]
    UnknownProvince { name: String },

    #[error("Year {year} is outside the projected span {first}-{last}")]
    YearOutOfRange { year: u16, first: u16, last: u16 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dm-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<dm_core::CoreError> for AppError {
    fn from(err: dm_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
