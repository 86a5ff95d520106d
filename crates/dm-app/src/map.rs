//! Map projection and click hit-testing.
//!
//! The map is drawn in a flat plot space: plain equirectangular projection
//! with the x axis compressed by the cosine of the mid-latitude so
//! distances look right at Turkey's latitudes. The projection is pure and
//! invertible; a click goes screen -> plot -> lon/lat -> point-in-polygon.

use dm_data::ProvinceBoundary;
use geo::{Contains, Point, Rect};

/// Longitude compression must stay invertible even for degenerate
/// bounding boxes near the poles.
const MIN_COS_LAT: f64 = 0.05;

/// Equirectangular lon/lat <-> plot-space mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    cos_lat: f64,
}

impl MapProjection {
    /// Projection centered on a lon/lat bounding box.
    pub fn for_bounds(bounds: Rect<f64>) -> Self {
        let mid_lat_rad = bounds.center().y.to_radians();
        Self {
            cos_lat: mid_lat_rad.cos().abs().max(MIN_COS_LAT),
        }
    }

    /// Lon/lat to plot coordinates.
    pub fn to_plot(&self, lon: f64, lat: f64) -> [f64; 2] {
        [lon * self.cos_lat, lat]
    }

    /// Plot coordinates back to lon/lat.
    pub fn to_lon_lat(&self, plot: [f64; 2]) -> (f64, f64) {
        (plot[0] / self.cos_lat, plot[1])
    }
}

/// The province containing the lon/lat point, if any. Linear scan; the
/// boundary list is small and clicks are rare.
pub fn hit_test(boundaries: &[ProvinceBoundary], lon: f64, lat: f64) -> Option<&ProvinceBoundary> {
    let point = Point::new(lon, lat);
    boundaries
        .iter()
        .find(|boundary| boundary.geometry.contains(&point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_dataset;
    use geo::coord;
    use proptest::prelude::*;

    fn turkey_bounds() -> Rect<f64> {
        Rect::new(coord! { x: 26.0, y: 36.0 }, coord! { x: 45.0, y: 42.0 })
    }

    #[test]
    fn projection_round_trips() {
        let projection = MapProjection::for_bounds(turkey_bounds());
        let plot = projection.to_plot(32.85, 39.92);
        let (lon, lat) = projection.to_lon_lat(plot);
        assert!((lon - 32.85).abs() < 1e-9);
        assert!((lat - 39.92).abs() < 1e-9);
    }

    #[test]
    fn x_axis_is_compressed() {
        let projection = MapProjection::for_bounds(turkey_bounds());
        let [x, y] = projection.to_plot(40.0, 40.0);
        assert!(x < 40.0);
        assert_eq!(y, 40.0);
    }

    #[test]
    fn hit_test_finds_the_clicked_province() {
        let dataset = sample_dataset();
        // sample squares: Ankara at (32..34, 39..41), İzmir at (26..28, 38..40)
        let hit = hit_test(&dataset.boundaries, 33.0, 40.0).unwrap();
        assert_eq!(hit.name, "Ankara");
        let hit = hit_test(&dataset.boundaries, 27.0, 38.5).unwrap();
        assert_eq!(hit.name, "İzmir");
        assert!(hit_test(&dataset.boundaries, 0.0, 0.0).is_none());
    }

    proptest! {
        #[test]
        fn round_trip_anywhere_on_the_map(lon in -180.0f64..180.0, lat in 30.0f64..50.0) {
            let projection = MapProjection::for_bounds(turkey_bounds());
            let (lon2, lat2) = projection.to_lon_lat(projection.to_plot(lon, lat));
            prop_assert!((lon - lon2).abs() < 1e-9);
            prop_assert!((lat - lat2).abs() < 1e-9);
        }
    }
}
