//! Integration tests for loading a full dataset from disk.

use std::path::PathBuf;

use dm_core::{ProvinceKey, Scenario};
use dm_data::{Dataset, DataLoadError};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn loads_and_cross_validates_the_fixture_dataset() {
    let dataset = Dataset::load(&fixtures_dir()).expect("fixture dataset should load");

    assert_eq!(dataset.boundaries.len(), 2);
    assert_eq!(dataset.scenarios.len(), 5);
    assert_eq!(dataset.scenario(Scenario::Ssp1).years(), 2025..=2027);
    assert_eq!(dataset.historical.years(), 2020..=2021);

    // Every boundary province has a row in every table (join completeness).
    for boundary in &dataset.boundaries {
        for scenario in Scenario::ALL {
            assert!(dataset.scenario(scenario).contains(&boundary.key));
        }
        assert!(dataset.historical.contains(&boundary.key));
    }
}

#[test]
fn joins_across_different_name_encodings() {
    let dataset = Dataset::load(&fixtures_dir()).unwrap();

    // Boundary file says "İzmir", scenario tables "Izmir", historical "IZMIR".
    let key = ProvinceKey::new("izmir");
    let boundary = dataset.find_boundary(&key).expect("boundary present");
    assert_eq!(boundary.name, "İzmir");

    let projected = dataset.scenario(Scenario::Ssp2).get(&key).unwrap();
    assert_eq!(projected.series.get(2025), Some(412.0));
    let historical = dataset.historical.get(&key).unwrap();
    assert_eq!(historical.series.get(2021), Some(370.25));
}

#[test]
fn every_projected_year_is_defined() {
    let dataset = Dataset::load(&fixtures_dir()).unwrap();
    for scenario in Scenario::ALL {
        let table = dataset.scenario(scenario);
        for (_, row) in table.iter() {
            for year in table.years() {
                assert!(row.series.get(year).is_some(), "gap at {year}");
            }
        }
    }
}

#[test]
fn national_total_matches_the_row_sum() {
    let dataset = Dataset::load(&fixtures_dir()).unwrap();
    let total = dataset.scenario(Scenario::Ssp1).national_total().unwrap();
    assert_eq!(total.get(2025), Some(211.0 + 411.0));
    assert_eq!(total.get(2027), Some(231.0 + 431.0));
}

#[test]
fn a_missing_directory_reports_an_io_error() {
    let err = Dataset::load(&fixtures_dir().join("does-not-exist")).unwrap_err();
    assert!(matches!(err, DataLoadError::Io { .. }));
}
