//! dm-data: loading and validation of the static input files.
//!
//! Everything here runs once at startup: the GeoJSON boundary file and the
//! demand tables are read into an immutable [`Dataset`] which the rest of
//! the application shares read-only.

pub mod boundary;
pub mod dataset;
pub mod error;
pub mod table;

pub use boundary::{ProvinceBoundary, bounding_rect, load_boundaries};
pub use dataset::Dataset;
pub use error::{DataLoadError, DataResult};
pub use table::{DemandTable, TableRow};
