//! The immutable in-memory dataset.

use std::collections::BTreeMap;
use std::path::Path;

use dm_core::{ProvinceKey, Scenario};
use tracing::info;

use crate::boundary::{ProvinceBoundary, load_boundaries};
use crate::error::{DataLoadError, DataResult};
use crate::table::DemandTable;

/// File name of the historical consumption table.
pub const HISTORICAL_FILE: &str = "historical_electricity.csv";
/// File name of the province boundary collection.
pub const BOUNDARY_FILE: &str = "geoBoundaries-TUR-ADM1_simplified.geojson";

/// Name column headers differ between the scenario and historical files.
const SCENARIO_NAME_COLUMN: &str = "Provinces";
const HISTORICAL_NAME_COLUMN: &str = "Province";

pub fn scenario_file(scenario: Scenario) -> String {
    format!("{}.csv", scenario.label())
}

/// Everything the dashboard reads: boundaries, the five scenario tables and
/// the historical table. Loaded once, never mutated afterwards; wrap in an
/// `Arc` to share across renders.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub boundaries: Vec<ProvinceBoundary>,
    pub scenarios: BTreeMap<Scenario, DemandTable>,
    pub historical: DemandTable,
}

impl Dataset {
    /// Load every input file from `dir` and cross-validate the join keys.
    pub fn load(dir: &Path) -> DataResult<Self> {
        let boundaries = load_boundaries(&dir.join(BOUNDARY_FILE))?;

        let mut scenarios = BTreeMap::new();
        for scenario in Scenario::ALL {
            let table =
                DemandTable::from_csv(&dir.join(scenario_file(scenario)), SCENARIO_NAME_COLUMN)?;
            scenarios.insert(scenario, table);
        }
        let historical =
            DemandTable::from_csv(&dir.join(HISTORICAL_FILE), HISTORICAL_NAME_COLUMN)?;

        let dataset = Self {
            boundaries,
            scenarios,
            historical,
        };
        dataset.validate(dir)?;

        info!(
            provinces = dataset.boundaries.len(),
            projected = ?dataset.scenario(Scenario::Ssp1).years(),
            historical = ?dataset.historical.years(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Join completeness: every boundary province must have a row in every
    /// scenario table and in the historical table.
    fn validate(&self, dir: &Path) -> DataResult<()> {
        for boundary in &self.boundaries {
            for (&scenario, table) in &self.scenarios {
                if !table.contains(&boundary.key) {
                    return Err(DataLoadError::JoinMismatch {
                        province: boundary.name.clone(),
                        boundary_path: dir.join(BOUNDARY_FILE),
                        missing_from: dir.join(scenario_file(scenario)),
                    });
                }
            }
            if !self.historical.contains(&boundary.key) {
                return Err(DataLoadError::JoinMismatch {
                    province: boundary.name.clone(),
                    boundary_path: dir.join(BOUNDARY_FILE),
                    missing_from: dir.join(HISTORICAL_FILE),
                });
            }
        }
        Ok(())
    }

    /// Demand table for `scenario`. `load` fills every scenario, so the
    /// lookup cannot miss.
    pub fn scenario(&self, scenario: Scenario) -> &DemandTable {
        &self.scenarios[&scenario]
    }

    pub fn find_boundary(&self, key: &ProvinceKey) -> Option<&ProvinceBoundary> {
        self.boundaries.iter().find(|boundary| &boundary.key == key)
    }
}
