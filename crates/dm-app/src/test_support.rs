//! Small synthetic datasets for unit tests.

use std::collections::BTreeMap;

use dm_core::{ProvinceKey, Scenario};
use dm_data::{Dataset, DemandTable, ProvinceBoundary};
use geo::{MultiPolygon, polygon};

pub fn square(origin: (f64, f64), size: f64) -> MultiPolygon<f64> {
    let (x, y) = origin;
    MultiPolygon(vec![polygon![
        (x: x, y: y),
        (x: x + size, y: y),
        (x: x + size, y: y + size),
        (x: x, y: y + size),
    ]])
}

fn boundary(name: &str, origin: (f64, f64)) -> ProvinceBoundary {
    ProvinceBoundary {
        name: name.to_string(),
        key: ProvinceKey::new(name),
        geometry: square(origin, 2.0),
    }
}

/// Two provinces, 2020-2021 historical, 2025-2027 projections. Ankara is
/// large enough that national aggregates cross the TWh threshold; İzmir
/// alone stays below it.
pub fn sample_dataset() -> Dataset {
    let mut scenarios = BTreeMap::new();
    for (index, scenario) in Scenario::ALL.into_iter().enumerate() {
        let bump = 10.0 * index as f64;
        let table = DemandTable::from_rows(
            2025,
            &[
                ("Ankara", vec![1100.0 + bump, 1150.0 + bump, 1200.0 + bump]),
                ("İzmir", vec![300.0 + bump, 310.0 + bump, 320.0 + bump]),
            ],
        )
        .expect("valid table");
        scenarios.insert(scenario, table);
    }

    Dataset {
        boundaries: vec![boundary("Ankara", (32.0, 39.0)), boundary("İzmir", (26.0, 38.0))],
        scenarios,
        historical: DemandTable::from_rows(
            2020,
            &[("Ankara", vec![900.0, 950.0]), ("İzmir", vec![250.0, 260.0])],
        )
        .expect("valid table"),
    }
}

/// Like [`sample_dataset`] but every demand value is zero.
pub fn zero_dataset() -> Dataset {
    let zeroes = |n: usize| vec![0.0; n];
    let mut scenarios = BTreeMap::new();
    for scenario in Scenario::ALL {
        let table = DemandTable::from_rows(
            2025,
            &[("Ankara", zeroes(3)), ("İzmir", zeroes(3))],
        )
        .expect("valid table");
        scenarios.insert(scenario, table);
    }

    Dataset {
        boundaries: vec![boundary("Ankara", (32.0, 39.0)), boundary("İzmir", (26.0, 38.0))],
        scenarios,
        historical: DemandTable::from_rows(
            2020,
            &[("Ankara", zeroes(2)), ("İzmir", zeroes(2))],
        )
        .expect("valid table"),
    }
}
