use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Values outside `[-90, 90]` / `[-180, 180]` are carried as-is; nothing in the
/// crate sanitizes them. All arithmetic treats the pair as a point on a flat
/// plane, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lng", alias = "longitude")]
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn midpoint(&self, other: &Coordinates) -> Coordinates {
        Coordinates::new(
            (self.latitude + other.latitude) / 2.0,
            (self.longitude + other.longitude) / 2.0,
        )
    }

    /// Linear interpolation towards `other`; `fraction` is not clamped.
    pub fn lerp(&self, other: &Coordinates, fraction: f64) -> Coordinates {
        Coordinates::new(
            self.latitude + (other.latitude - self.latitude) * fraction,
            self.longitude + (other.longitude - self.longitude) * fraction,
        )
    }

    /// Planar Euclidean distance in degrees.
    pub fn distance(&self, other: &Coordinates) -> f64 {
        let d_lat = other.latitude - self.latitude;
        let d_lng = other.longitude - self.longitude;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Coordinates::new(point.y(), point.x())
    }
}
