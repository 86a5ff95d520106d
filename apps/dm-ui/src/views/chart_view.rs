//! Line chart rendering for a [`ChartModel`].

use dm_app::{ChartModel, SeriesKind};
use dm_core::Scenario;
use egui::Color32;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

/// Fixed per-scenario colors so lines stay recognizable across charts.
fn scenario_color(scenario: Scenario) -> Color32 {
    match scenario {
        Scenario::Ssp1 => Color32::from_rgb(214, 48, 49),
        Scenario::Ssp2 => Color32::from_rgb(64, 115, 244),
        Scenario::Ssp3 => Color32::from_rgb(32, 160, 84),
        Scenario::Ssp4 => Color32::from_rgb(235, 145, 32),
        Scenario::Ssp5 => Color32::from_rgb(150, 80, 200),
    }
}

/// Draw one chart. The selected scenario and the historical series are
/// solid and full-strength; the remaining scenarios are dotted and muted.
pub fn show_chart(ui: &mut egui::Ui, id: &str, model: &ChartModel, height: f32) {
    ui.strong(model.title.as_str());

    if !model.has_data() {
        ui.label("No data for this province");
        return;
    }

    let mut lines = Vec::new();
    for series in &model.series {
        let points: Vec<[f64; 2]> = series
            .points
            .iter()
            .map(|&(year, value)| [year as f64, value])
            .collect();
        let plot_points: PlotPoints = points.into();
        let line = Line::new(plot_points).name(&series.label);
        let line = match series.kind {
            SeriesKind::Historical => line.color(Color32::WHITE).width(2.0),
            SeriesKind::Projection(scenario) if scenario == model.scenario => {
                line.color(scenario_color(scenario)).width(2.0)
            }
            SeriesKind::Projection(scenario) => line
                .color(scenario_color(scenario).gamma_multiply(0.6))
                .style(LineStyle::dotted_dense()),
        };
        lines.push(line);
    }

    Plot::new(id.to_owned())
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Year")
        .y_axis_label(model.y_axis_label())
        .show(ui, |plot_ui| {
            for line in lines {
                plot_ui.line(line);
            }
        });
}
