//! Query helpers for extracting series from a loaded dataset.

use dm_core::{DemandSeries, ProvinceKey, Scenario};
use dm_data::Dataset;

/// Projected series for one province under `scenario`. None when the
/// province has no row.
pub fn province_projection(
    dataset: &Dataset,
    scenario: Scenario,
    key: &ProvinceKey,
) -> Option<DemandSeries> {
    dataset
        .scenario(scenario)
        .get(key)
        .map(|row| row.series.clone())
}

/// Historical series for one province, truncated to start no earlier than
/// `from_year`.
pub fn province_historical(
    dataset: &Dataset,
    key: &ProvinceKey,
    from_year: u16,
) -> Option<DemandSeries> {
    dataset
        .historical
        .get(key)
        .and_then(|row| row.series.from_year(from_year))
}

/// National aggregate of the projected series under `scenario`.
pub fn national_projection(dataset: &Dataset, scenario: Scenario) -> Option<DemandSeries> {
    dataset.scenario(scenario).national_total()
}

/// National aggregate of the historical series, truncated like
/// [`province_historical`].
pub fn national_historical(dataset: &Dataset, from_year: u16) -> Option<DemandSeries> {
    dataset
        .historical
        .national_total()
        .and_then(|series| series.from_year(from_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_dataset;

    #[test]
    fn province_lookup_uses_the_normalized_key() {
        let dataset = sample_dataset();
        let series =
            province_projection(&dataset, Scenario::Ssp1, &ProvinceKey::new("IZMIR")).unwrap();
        assert_eq!(series.first_year(), 2025);
    }

    #[test]
    fn unknown_province_yields_none() {
        let dataset = sample_dataset();
        assert!(province_projection(&dataset, Scenario::Ssp1, &ProvinceKey::new("Atlantis")).is_none());
        assert!(province_historical(&dataset, &ProvinceKey::new("Atlantis"), 2020).is_none());
    }

    #[test]
    fn national_series_sum_rows() {
        let dataset = sample_dataset();
        let projected = national_projection(&dataset, Scenario::Ssp1).unwrap();
        assert_eq!(projected.get(2025), Some(1100.0 + 300.0));
        let historical = national_historical(&dataset, 2020).unwrap();
        assert_eq!(historical.get(2020), Some(900.0 + 250.0));
    }

    #[test]
    fn historical_truncation_respects_from_year() {
        let dataset = sample_dataset();
        let historical = national_historical(&dataset, 2021).unwrap();
        assert_eq!(historical.first_year(), 2021);
    }
}
