//! Clickable choropleth map.
//!
//! Province polygons are drawn into a plot whose coordinates are the
//! projected lon/lat space; a click is mapped back through the projection
//! and hit-tested against the boundary geometry.

use dm_app::{ChoroplethModel, MapProjection, SelectionState, hit_test};
use dm_core::ProvinceKey;
use dm_data::Dataset;
use egui::{Color32, Stroke};
use egui_plot::{Plot, PlotPoints, Polygon};

/// What the map reported back this frame.
#[derive(Debug, Default)]
pub struct MapResponse {
    /// Province the user clicked, if any.
    pub clicked: Option<(ProvinceKey, String)>,
    /// Province under the pointer.
    pub hovered: Option<String>,
}

pub fn show_map(
    ui: &mut egui::Ui,
    dataset: &Dataset,
    projection: MapProjection,
    model: &ChoroplethModel,
    selection: &SelectionState,
    height: f32,
) -> MapResponse {
    let mut response = MapResponse::default();
    let selected_key = selection.province.as_ref().map(|province| &province.key);

    Plot::new("province_map")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_scroll(false)
        .height(height)
        .show(ui, |plot_ui| {
            for (boundary, cell) in dataset.boundaries.iter().zip(&model.cells) {
                let selected = selected_key == Some(&boundary.key);
                let stroke = Stroke::new(if selected { 2.0 } else { 0.6 }, Color32::BLACK);
                let fill = fill_color(cell.intensity);

                for polygon in &boundary.geometry.0 {
                    let points: Vec<[f64; 2]> = polygon
                        .exterior()
                        .coords()
                        .map(|coord| projection.to_plot(coord.x, coord.y))
                        .collect();
                    let plot_points: PlotPoints = points.into();
                    plot_ui.polygon(
                        Polygon::new(plot_points)
                            .name(&boundary.name)
                            .fill_color(fill)
                            .stroke(stroke),
                    );
                }
            }

            if let Some(pointer) = plot_ui.pointer_coordinate() {
                let (lon, lat) = projection.to_lon_lat([pointer.x, pointer.y]);
                if let Some(hit) = hit_test(&dataset.boundaries, lon, lat) {
                    response.hovered = Some(hit.name.clone());
                    if plot_ui.response().clicked() {
                        response.clicked = Some((hit.key.clone(), hit.name.clone()));
                    }
                }
            }
        });

    response
}

/// Orange-red ramp from low to high demand, semi-transparent so the
/// selected outline stays visible.
fn fill_color(intensity: f64) -> Color32 {
    const LOW: (f32, f32, f32) = (254.0, 240.0, 217.0);
    const MID: (f32, f32, f32) = (252.0, 141.0, 89.0);
    const HIGH: (f32, f32, f32) = (179.0, 0.0, 0.0);

    let t = intensity.clamp(0.0, 1.0) as f32;
    let (from, to, t) = if t < 0.5 {
        (LOW, MID, t * 2.0)
    } else {
        (MID, HIGH, (t - 0.5) * 2.0)
    };
    let lerp = |a: f32, b: f32| a + (b - a) * t;
    Color32::from_rgba_unmultiplied(
        lerp(from.0, to.0) as u8,
        lerp(from.1, to.1) as u8,
        lerp(from.2, to.2) as u8,
        178,
    )
}
