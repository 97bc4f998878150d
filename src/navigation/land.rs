use crate::entities::{Coordinates, LandRegion, Path};

/// Number of intervals used when probing a straight segment for land.
pub const DEFAULT_SEGMENT_SAMPLES: usize = 20;

/// Point-in-box test against a fixed table of landmass approximations.
///
/// The table is handed in at construction; an empty table makes every
/// coordinate sea.
#[derive(Debug, Clone)]
pub struct LandOracle {
    regions: Vec<LandRegion>,
}

impl LandOracle {
    pub fn new(regions: Vec<LandRegion>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[LandRegion] {
        &self.regions
    }

    /// First region containing `coordinates`, in table order.
    pub fn region_at(&self, coordinates: &Coordinates) -> Option<&LandRegion> {
        self.regions
            .iter()
            .find(|region| region.contains(coordinates))
    }

    pub fn is_on_land(&self, coordinates: &Coordinates) -> bool {
        self.region_at(coordinates).is_some()
    }

    /// Probes the `samples - 1` interior points of the straight segment
    /// `from -> to`. Endpoints are not tested, and land thinner than one
    /// sampling step can be missed.
    pub fn has_land_between(&self, from: &Coordinates, to: &Coordinates, samples: usize) -> bool {
        self.landfall_between(from, to, samples).is_some()
    }

    /// First region hit by `path`: its vertices are tested first, then
    /// `DEFAULT_SEGMENT_SAMPLES` points along every segment.
    pub fn first_landfall(&self, path: &Path) -> Option<&LandRegion> {
        let points = path.points();

        points
            .iter()
            .find_map(|point| self.region_at(point))
            .or_else(|| {
                points.windows(2).find_map(|pair| {
                    self.landfall_between(&pair[0], &pair[1], DEFAULT_SEGMENT_SAMPLES)
                })
            })
    }

    pub fn path_crosses_land(&self, path: &Path) -> bool {
        self.first_landfall(path).is_some()
    }

    fn landfall_between(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        samples: usize,
    ) -> Option<&LandRegion> {
        (1..samples).find_map(|i| {
            let fraction = i as f64 / samples as f64;
            self.region_at(&from.lerp(to, fraction))
        })
    }
}

impl Default for LandOracle {
    fn default() -> Self {
        LandOracle::new(LandRegion::east_asia())
    }
}
