//! Chart model building.
//!
//! A [`ChartModel`] is plain data: one historical series plus one projected
//! series per scenario, already scaled to the display unit. The view only
//! styles and draws it.

use dm_core::{DemandSeries, DisplayScale, EnergyUnit, Scenario};
use dm_data::Dataset;

use crate::query;
use crate::selection::SelectionState;

/// What a series represents, used by the view to style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Measured consumption, rendered distinctly from projections.
    Historical,
    Projection(Scenario),
}

/// One line on the chart, points in display units.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub kind: SeriesKind,
    pub points: Vec<(u16, f64)>,
}

/// Everything one chart shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: String,
    pub unit: EnergyUnit,
    pub scenario: Scenario,
    pub series: Vec<ChartSeries>,
}

impl ChartModel {
    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }

    pub fn y_axis_label(&self) -> String {
        format!("Electricity ({})", self.unit)
    }

    fn series_of(&self, kind: SeriesKind) -> Option<&ChartSeries> {
        self.series.iter().find(|series| series.kind == kind)
    }

    pub fn historical(&self) -> Option<&ChartSeries> {
        self.series_of(SeriesKind::Historical)
    }

    pub fn projection(&self, scenario: Scenario) -> Option<&ChartSeries> {
        self.series_of(SeriesKind::Projection(scenario))
    }
}

/// Build the chart for the current selection: the selected province, or the
/// national aggregate when no province is selected.
///
/// Unit choice is shared: if the largest value across every displayed
/// series exceeds the GWh threshold, all series convert to TWh together.
/// A province without data rows yields an empty model; the view renders a
/// "no data" message for it.
pub fn build_chart(
    dataset: &Dataset,
    selection: &SelectionState,
    historical_from_year: u16,
) -> ChartModel {
    let (title, historical, projections) = match &selection.province {
        Some(province) => (
            format!("Demand in {}", province.name),
            query::province_historical(dataset, &province.key, historical_from_year),
            collect_projections(|scenario| {
                query::province_projection(dataset, scenario, &province.key)
            }),
        ),
        None => (
            "Total residential demand in Turkey".to_string(),
            query::national_historical(dataset, historical_from_year),
            collect_projections(|scenario| query::national_projection(dataset, scenario)),
        ),
    };

    let mut raw: Vec<(SeriesKind, String, DemandSeries)> = Vec::new();
    if let Some(series) = historical {
        raw.push((SeriesKind::Historical, "Historical".to_string(), series));
    }
    for (scenario, series) in projections {
        raw.push((
            SeriesKind::Projection(scenario),
            scenario.label().to_string(),
            series,
        ));
    }

    let max_gwh = raw
        .iter()
        .map(|(_, _, series)| series.max_value())
        .fold(0.0, f64::max);
    let scale = DisplayScale::for_max_gwh(max_gwh);

    let series = raw
        .into_iter()
        .map(|(kind, label, series)| ChartSeries {
            label,
            kind,
            points: series
                .iter()
                .map(|(year, value)| (year, scale.apply(value)))
                .collect(),
        })
        .collect();

    ChartModel {
        title,
        unit: scale.unit,
        scenario: selection.scenario,
        series,
    }
}

fn collect_projections<F>(mut lookup: F) -> Vec<(Scenario, DemandSeries)>
where
    F: FnMut(Scenario) -> Option<DemandSeries>,
{
    Scenario::ALL
        .iter()
        .filter_map(|&scenario| lookup(scenario).map(|series| (scenario, series)))
        .collect()
}
