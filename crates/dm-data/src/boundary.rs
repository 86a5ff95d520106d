//! Province boundary geometry from the GeoJSON file.

use std::path::Path;

use geo::{BoundingRect, MultiPolygon, Rect};
use geojson::{FeatureCollection, GeoJson};
use tracing::debug;

use dm_core::ProvinceKey;

use crate::error::{DataLoadError, DataResult};

/// Property carrying the province name in the boundary file.
const NAME_PROPERTY: &str = "shapeName";

/// One clickable province region.
#[derive(Debug, Clone)]
pub struct ProvinceBoundary {
    /// Display name from the boundary file.
    pub name: String,
    /// Join key towards the demand tables.
    pub key: ProvinceKey,
    /// Outline in lon/lat (WGS84) coordinates.
    pub geometry: MultiPolygon<f64>,
}

/// Load the feature collection, one feature per province. Features must
/// carry a `shapeName` property and Polygon or MultiPolygon geometry.
pub fn load_boundaries(path: &Path) -> DataResult<Vec<ProvinceBoundary>> {
    let content = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let geojson: GeoJson = content.parse().map_err(|source| DataLoadError::GeoJson {
        path: path.to_path_buf(),
        source,
    })?;
    let collection =
        FeatureCollection::try_from(geojson).map_err(|source| DataLoadError::GeoJson {
            path: path.to_path_buf(),
            source,
        })?;

    let mut boundaries = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let name = feature
            .properties
            .as_ref()
            .and_then(|properties| properties.get(NAME_PROPERTY))
            .and_then(|value| value.as_str())
            .ok_or(DataLoadError::MissingProperty {
                path: path.to_path_buf(),
                index,
                property: NAME_PROPERTY,
            })?
            .to_string();

        let geometry = feature
            .geometry
            .as_ref()
            .and_then(|geometry| multi_polygon_from(&geometry.value))
            .ok_or_else(|| DataLoadError::BadGeometry {
                path: path.to_path_buf(),
                index,
                name: name.clone(),
            })?;

        boundaries.push(ProvinceBoundary {
            key: ProvinceKey::new(&name),
            name,
            geometry,
        });
    }

    if boundaries.is_empty() {
        return Err(DataLoadError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), provinces = boundaries.len(), "loaded boundary file");
    Ok(boundaries)
}

fn multi_polygon_from(value: &geojson::Value) -> Option<MultiPolygon<f64>> {
    match geo::Geometry::<f64>::try_from(value.clone()).ok()? {
        geo::Geometry::Polygon(polygon) => Some(MultiPolygon(vec![polygon])),
        geo::Geometry::MultiPolygon(multi) => Some(multi),
        _ => None,
    }
}

/// Smallest lon/lat rectangle covering every boundary. None when the list
/// is empty.
pub fn bounding_rect(boundaries: &[ProvinceBoundary]) -> Option<Rect<f64>> {
    let mut merged: Option<Rect<f64>> = None;
    for boundary in boundaries {
        let rect = boundary.geometry.bounding_rect()?;
        merged = Some(match merged {
            None => rect,
            Some(acc) => Rect::new(
                geo::coord! {
                    x: acc.min().x.min(rect.min().x),
                    y: acc.min().y.min(rect.min().y),
                },
                geo::coord! {
                    x: acc.max().x.max(rect.max().x),
                    y: acc.max().y.max(rect.max().y),
                },
            ),
        });
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square(origin: (f64, f64), size: f64) -> MultiPolygon<f64> {
        let (x, y) = origin;
        MultiPolygon(vec![polygon![
            (x: x, y: y),
            (x: x + size, y: y),
            (x: x + size, y: y + size),
            (x: x, y: y + size),
        ]])
    }

    #[test]
    fn bounding_rect_covers_every_boundary() {
        let boundaries = vec![
            ProvinceBoundary {
                name: "A".to_string(),
                key: ProvinceKey::new("A"),
                geometry: square((26.0, 36.0), 2.0),
            },
            ProvinceBoundary {
                name: "B".to_string(),
                key: ProvinceKey::new("B"),
                geometry: square((40.0, 40.0), 3.0),
            },
        ];
        let rect = bounding_rect(&boundaries).unwrap();
        assert_eq!(rect.min().x, 26.0);
        assert_eq!(rect.min().y, 36.0);
        assert_eq!(rect.max().x, 43.0);
        assert_eq!(rect.max().y, 43.0);
    }

    #[test]
    fn bounding_rect_of_nothing_is_none() {
        assert!(bounding_rect(&[]).is_none());
    }
}
