//! dm-core: stable foundation for demandmap.
//!
//! Contains:
//! - scenario (the five SSP pathways)
//! - province (normalized join keys for province names)
//! - series (contiguous annual demand series)
//! - units (GWh/TWh display scaling)
//! - error (shared error types)

pub mod error;
pub mod province;
pub mod scenario;
pub mod series;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use province::*;
pub use scenario::*;
pub use series::*;
pub use units::*;
