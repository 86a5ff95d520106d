mod chart_view;
mod map_view;

pub use chart_view::show_chart;
pub use map_view::{MapResponse, show_map};
