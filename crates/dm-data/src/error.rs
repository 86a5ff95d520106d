//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

pub type DataResult<T> = Result<T, DataLoadError>;

/// Anything that can go wrong while reading the static input files. All of
/// these are fatal for the session: the dashboard shows the message and
/// stays up, but renders nothing.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse {path}")]
    GeoJson {
        path: PathBuf,
        #[source]
        source: geojson::Error,
    },

    #[error("{path}: expected first column '{column}'")]
    MissingNameColumn { path: PathBuf, column: String },

    #[error("{path}: column '{column}' is not a year")]
    BadYearColumn { path: PathBuf, column: String },

    #[error("{path}: no year columns")]
    NoYearColumns { path: PathBuf },

    #[error("{path}: years are not contiguous ({prev} is followed by {next})")]
    YearGap { path: PathBuf, prev: u16, next: u16 },

    #[error("{path}: no data rows")]
    EmptyTable { path: PathBuf },

    #[error("{path}: bad value '{value}' for {province} in {year}")]
    BadValue {
        path: PathBuf,
        value: String,
        province: String,
        year: u16,
    },

    #[error("{path}: negative demand {value} for {province} in {year}")]
    NegativeValue {
        path: PathBuf,
        value: f64,
        province: String,
        year: u16,
    },

    #[error("{path}: invalid series")]
    Series {
        path: PathBuf,
        #[source]
        source: dm_core::CoreError,
    },

    #[error("{path}: feature {index} is missing the '{property}' property")]
    MissingProperty {
        path: PathBuf,
        index: usize,
        property: &'static str,
    },

    #[error("{path}: feature {index} ('{name}') has no usable polygon geometry")]
    BadGeometry {
        path: PathBuf,
        index: usize,
        name: String,
    },

    #[error("Province '{province}' from {boundary_path} has no row in {missing_from}")]
    JoinMismatch {
        province: String,
        boundary_path: PathBuf,
        missing_from: PathBuf,
    },
}
