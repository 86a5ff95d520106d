//! Shared application service layer for demandmap.
//!
//! This crate provides a unified interface for both CLI and GUI frontends:
//! configuration, selection state, data queries, and the chart/choropleth
//! models the views render. Model builders are pure functions of the
//! loaded dataset and the current selection, so every render is
//! reproducible and testable without a UI.

pub mod chart;
pub mod choropleth;
pub mod config;
pub mod error;
pub mod map;
pub mod query;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types for convenience
pub use chart::{ChartModel, ChartSeries, SeriesKind, build_chart};
pub use choropleth::{ChoroplethCell, ChoroplethModel, build_choropleth};
pub use config::DashboardConfig;
pub use error::{AppError, AppResult};
pub use map::{MapProjection, hit_test};
pub use query::{
    national_historical, national_projection, province_historical, province_projection,
};
pub use selection::{SelectedProvince, SelectionState};
