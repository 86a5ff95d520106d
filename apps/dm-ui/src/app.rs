use std::sync::Arc;

use dm_app::{
    DashboardConfig, MapProjection, SelectionState, build_chart, build_choropleth,
};
use dm_core::Scenario;
use dm_data::{Dataset, bounding_rect};
use tracing::error;

use crate::views;

const CHART_HEIGHT: f32 = 300.0;

pub struct DemandMapApp {
    config: DashboardConfig,
    dataset: Option<Arc<Dataset>>,
    projection: Option<MapProjection>,
    selection: SelectionState,
    load_error: Option<String>,
}

impl DemandMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self {
            selection: SelectionState::new(config.default_scenario),
            config,
            dataset: None,
            projection: None,
            load_error: None,
        };
        app.load_dataset();
        app
    }

    fn load_dataset(&mut self) {
        match Dataset::load(&self.config.data_dir) {
            Ok(dataset) => {
                self.projection = bounding_rect(&dataset.boundaries).map(MapProjection::for_bounds);
                self.dataset = Some(Arc::new(dataset));
                self.load_error = None;
            }
            Err(e) => {
                error!("failed to load dataset: {e}");
                self.dataset = None;
                self.projection = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn show_charts(&mut self, ui: &mut egui::Ui, dataset: &Dataset) {
        let national = build_chart(
            dataset,
            &SelectionState::new(self.selection.scenario),
            self.config.historical_from_year,
        );
        views::show_chart(ui, "national_chart", &national, CHART_HEIGHT);

        ui.separator();

        let selected = build_chart(dataset, &self.selection, self.config.historical_from_year);
        views::show_chart(ui, "selection_chart", &selected, CHART_HEIGHT);

        if !self.selection.is_national() && ui.button("Show national total").clicked() {
            self.selection = self.selection.clone().clear_province();
        }
    }

    fn show_map_panel(&mut self, ui: &mut egui::Ui, dataset: &Dataset) {
        egui::CollapsingHeader::new("How to use this dashboard").show(ui, |ui| {
            ui.label(
                "Click a province on the map to view its demand projections; \
                 pick an SSP scenario below the map. The charts on the left \
                 show the national total and the current selection.",
            );
            for scenario in Scenario::ALL {
                ui.label(format!("{}: {}", scenario, scenario.narrative()));
            }
        });

        let Some(projection) = self.projection else {
            ui.colored_label(egui::Color32::RED, "Boundary file contains no geometry");
            return;
        };

        let model = match build_choropleth(dataset, self.selection.scenario, None) {
            Ok(model) => model,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Map unavailable: {e}"));
                return;
            }
        };

        // Leave room for the selector row and legend under the map.
        let map_height = (ui.available_height() - 70.0).max(240.0);
        let response = views::show_map(ui, dataset, projection, &model, &self.selection, map_height);

        if let Some((key, name)) = response.clicked {
            self.selection = self.selection.clone().with_province(key, name);
        }

        ui.horizontal(|ui| {
            ui.label("Select SSP scenario:");
            let mut scenario = self.selection.scenario;
            for candidate in Scenario::ALL {
                ui.radio_value(&mut scenario, candidate, candidate.label());
            }
            if scenario != self.selection.scenario {
                self.selection = self.selection.clone().with_scenario(scenario);
            }

            if let Some(hovered) = response.hovered {
                ui.separator();
                ui.label(hovered);
            }
        });

        ui.weak(format!(
            "{} — {:.0} to {:.0} GWh",
            model.legend(),
            model.min_gwh,
            model.max_gwh
        ));
    }
}

impl eframe::App for DemandMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.heading("Projected Residential Electricity Demand in Turkey (2025–2050)");
        });

        if let Some(error) = self.load_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("Failed to load dataset: {error}"),
                );
                ui.label("Fix the data directory and restart the dashboard.");
            });
            return;
        }
        let Some(dataset) = self.dataset.clone() else {
            return;
        };

        egui::SidePanel::left("charts")
            .default_width(420.0)
            .show(ctx, |ui| self.show_charts(ui, &dataset));

        egui::CentralPanel::default().show(ctx, |ui| self.show_map_panel(ui, &dataset));
    }
}
