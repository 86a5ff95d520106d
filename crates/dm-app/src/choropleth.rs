//! Choropleth model building.
//!
//! Maps every province to a relative intensity for one scenario and target
//! year. The view turns intensities into fill colors; exact coloring is
//! presentation, not a correctness-critical path.

use dm_core::{EnergyUnit, ProvinceKey, Scenario};
use dm_data::Dataset;

use crate::error::{AppError, AppResult};

/// One province's value on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethCell {
    pub key: ProvinceKey,
    pub name: String,
    pub value_gwh: f64,
    /// Position of the value within [min, max] of the displayed year,
    /// in [0, 1].
    pub intensity: f64,
}

/// Everything the map needs besides the geometry: cells in the same order
/// as `dataset.boundaries`, plus the legend range.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethModel {
    pub scenario: Scenario,
    pub year: u16,
    pub unit: EnergyUnit,
    pub min_gwh: f64,
    pub max_gwh: f64,
    pub cells: Vec<ChoroplethCell>,
}

impl ChoroplethModel {
    pub fn legend(&self) -> String {
        format!(
            "Residential electricity demand ({}) in {} ({})",
            self.unit, self.year, self.scenario
        )
    }
}

/// Build the map model for `scenario`. `year` defaults to the last
/// projected year (the far end of the projection horizon).
pub fn build_choropleth(
    dataset: &Dataset,
    scenario: Scenario,
    year: Option<u16>,
) -> AppResult<ChoroplethModel> {
    let table = dataset.scenario(scenario);
    let year = year.unwrap_or_else(|| table.last_year());
    if !table.years().contains(&year) {
        return Err(AppError::YearOutOfRange {
            year,
            first: table.first_year(),
            last: table.last_year(),
        });
    }

    let mut values = Vec::with_capacity(dataset.boundaries.len());
    for boundary in &dataset.boundaries {
        let value = table
            .get(&boundary.key)
            .and_then(|row| row.series.get(year))
            .ok_or_else(|| AppError::UnknownProvince {
                name: boundary.name.clone(),
            })?;
        values.push(value);
    }

    let min_gwh = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_gwh = values.iter().copied().fold(0.0, f64::max);
    let range = max_gwh - min_gwh;

    let cells = dataset
        .boundaries
        .iter()
        .zip(values)
        .map(|(boundary, value_gwh)| ChoroplethCell {
            key: boundary.key.clone(),
            name: boundary.name.clone(),
            value_gwh,
            intensity: if range > 0.0 {
                (value_gwh - min_gwh) / range
            } else {
                0.0
            },
        })
        .collect();

    Ok(ChoroplethModel {
        scenario,
        year,
        unit: EnergyUnit::GigawattHours,
        min_gwh,
        max_gwh,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_dataset;

    #[test]
    fn defaults_to_the_last_projected_year() {
        let dataset = sample_dataset();
        let model = build_choropleth(&dataset, Scenario::Ssp1, None).unwrap();
        assert_eq!(model.year, 2027);
        assert_eq!(model.cells.len(), 2);
    }

    #[test]
    fn intensities_span_zero_to_one() {
        let dataset = sample_dataset();
        let model = build_choropleth(&dataset, Scenario::Ssp1, None).unwrap();
        let ankara = model.cells.iter().find(|c| c.name == "Ankara").unwrap();
        let izmir = model.cells.iter().find(|c| c.name == "İzmir").unwrap();
        assert_eq!(ankara.intensity, 1.0);
        assert_eq!(izmir.intensity, 0.0);
        assert_eq!(model.min_gwh, izmir.value_gwh);
        assert_eq!(model.max_gwh, ankara.value_gwh);
    }

    #[test]
    fn an_explicit_year_is_bounds_checked() {
        let dataset = sample_dataset();
        assert!(build_choropleth(&dataset, Scenario::Ssp1, Some(2026)).is_ok());
        let err = build_choropleth(&dataset, Scenario::Ssp1, Some(2030)).unwrap_err();
        assert!(matches!(err, AppError::YearOutOfRange { year: 2030, .. }));
    }

    #[test]
    fn a_flat_map_has_zero_intensity() {
        let dataset = crate::test_support::zero_dataset();
        let model = build_choropleth(&dataset, Scenario::Ssp2, None).unwrap();
        assert!(model.cells.iter().all(|cell| cell.intensity == 0.0));
    }

    #[test]
    fn legend_names_unit_year_and_scenario() {
        let dataset = sample_dataset();
        let model = build_choropleth(&dataset, Scenario::Ssp3, None).unwrap();
        assert_eq!(
            model.legend(),
            "Residential electricity demand (GWh) in 2027 (SSP3)"
        );
    }
}
