use geo_types::{coord, Point, Rect};

use crate::entities::Coordinates;

/// A named, axis-aligned box standing in for a landmass.
///
/// The box is stored as a `Rect` with longitude on `x` and latitude on `y`.
/// Edges are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct LandRegion {
    pub name: &'static str,
    pub bounds: Rect<f64>,
}

impl LandRegion {
    pub fn new(
        name: &'static str,
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    ) -> Self {
        Self {
            name,
            bounds: Rect::new(
                coord! { x: min_lng, y: min_lat },
                coord! { x: max_lng, y: max_lat },
            ),
        }
    }

    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        let point: Point<f64> = (*coordinates).into();
        let (min, max) = (self.bounds.min(), self.bounds.max());

        point.x() >= min.x && point.x() <= max.x && point.y() >= min.y && point.y() <= max.y
    }

    /// The rough East Asian coastline the route heuristics were tuned for.
    pub fn east_asia() -> Vec<LandRegion> {
        vec![
            LandRegion::new("korean_peninsula", 34.3, 38.6, 126.8, 128.9),
            LandRegion::new("china_north", 30.5, 40.0, 100.0, 120.5),
            LandRegion::new("china_south", 22.6, 30.5, 100.0, 118.5),
            LandRegion::new("taiwan", 21.9, 25.3, 120.3, 122.0),
            LandRegion::new("kyushu", 31.2, 33.9, 129.7, 131.9),
            LandRegion::new("shikoku", 32.8, 34.3, 132.0, 134.7),
            LandRegion::new("honshu", 34.0, 41.5, 131.0, 139.2),
        ]
    }
}
