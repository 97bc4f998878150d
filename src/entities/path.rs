use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::entities::Coordinates;
use crate::error::{empty_path_error, Error};

/// An ordered, non-empty polyline from origin to destination.
///
/// Emptiness is rejected at construction, so every `Path` has a first and a
/// last point. A single point is a legal (degenerate) path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinates>", into = "Vec<Coordinates>")]
pub struct Path(Vec<Coordinates>);

impl Path {
    pub fn new(points: Vec<Coordinates>) -> Result<Self, Error> {
        if points.is_empty() {
            return Err(empty_path_error());
        }

        Ok(Self(points))
    }

    pub fn single(point: Coordinates) -> Self {
        Self(vec![point])
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Coordinates {
        self.0[0]
    }

    pub fn last(&self) -> Coordinates {
        self.0[self.0.len() - 1]
    }

    pub fn push(&mut self, point: Coordinates) {
        self.0.push(point);
    }

    /// Drops this path's final point and continues with `next`, for joining
    /// legs that share an endpoint.
    pub fn chain(mut self, next: Path) -> Path {
        self.0.pop();
        self.0.extend(next.0);
        self
    }

    /// The same points in the opposite direction.
    pub fn reversed(&self) -> Path {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Planar length of the polyline, in degrees.
    pub fn length(&self) -> f64 {
        self.0
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }

    pub fn into_points(self) -> Vec<Coordinates> {
        self.0
    }
}

impl TryFrom<Vec<Coordinates>> for Path {
    type Error = Error;

    fn try_from(points: Vec<Coordinates>) -> Result<Self, Self::Error> {
        Path::new(points)
    }
}

impl From<Path> for Vec<Coordinates> {
    fn from(path: Path) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_points() {
        assert_eq!(Path::new(vec![]), Err(empty_path_error()));
        assert!(serde_json::from_str::<Path>("[]").is_err());
        assert_eq!(Path::single(Coordinates::new(1.0, 2.0)).len(), 1);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let path = Path::new(vec![
            Coordinates::new(0.0, 0.0),
            Coordinates::new(1.0, 1.0),
            Coordinates::new(2.0, 0.0),
        ])
        .unwrap();

        let reversed = path.reversed();

        assert_eq!(reversed.first(), path.last());
        assert_eq!(reversed.last(), path.first());
        assert_eq!(reversed.reversed(), path);
    }

    #[test]
    fn chain_drops_the_shared_endpoint() {
        let first = Path::new(vec![Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0)]).unwrap();
        let second =
            Path::new(vec![Coordinates::new(1.0, 1.0), Coordinates::new(2.0, 0.0)]).unwrap();

        let joined = first.chain(second);

        assert_eq!(
            joined.points(),
            &[
                Coordinates::new(0.0, 0.0),
                Coordinates::new(1.0, 1.0),
                Coordinates::new(2.0, 0.0)
            ]
        );
    }

    #[test]
    fn single_point_path_has_zero_length() {
        let path = Path::single(Coordinates::new(4.0, 2.0));
        assert_eq!(path.len(), 1);
        assert_eq!(path.first(), path.last());
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn serializes_as_plain_array() {
        let path = Path::new(vec![Coordinates::new(1.0, 2.0)]).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"lat":1.0,"lng":2.0}]"#);
    }
}
