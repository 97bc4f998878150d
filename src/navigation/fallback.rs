use crate::entities::{Coordinates, Path};
use crate::navigation::synthesis::{bowed_curve, sea_heading, SeaHeading, SynthesisConfig};

/// Two-leg detour through a single waypoint pushed out to sea.
///
/// Each leg is one Bezier sample with a fixed offset. Neither leg is checked
/// against the land oracle and nothing here recurses, so the detour always
/// terminates.
#[derive(Debug, Clone)]
pub struct WaypointFallback {
    lat_reach: f64,
    lng_reach: f64,
    leg_offset: f64,
    curve_intervals: usize,
}

impl WaypointFallback {
    pub fn new(config: SynthesisConfig) -> Self {
        Self {
            lat_reach: config.fallback_lat_reach,
            lng_reach: config.fallback_lng_reach,
            leg_offset: config.fallback_leg_offset,
            curve_intervals: config.curve_intervals,
        }
    }

    pub fn waypoint(&self, from: &Coordinates, to: &Coordinates, heading: SeaHeading) -> Coordinates {
        heading.displace(&from.midpoint(to), self.lat_reach, self.lng_reach)
    }

    pub fn route(&self, from: &Coordinates, to: &Coordinates, heading: SeaHeading) -> Path {
        let waypoint = self.waypoint(from, to, heading);
        tracing::debug!(?waypoint, "routing via waypoint");

        let first = self.leg(from, &waypoint);
        let second = self.leg(&waypoint, to);

        first.chain(second)
    }

    fn leg(&self, from: &Coordinates, to: &Coordinates) -> Path {
        let heading = sea_heading(&from.midpoint(to));
        bowed_curve(from, to, heading, self.leg_offset, self.curve_intervals)
    }
}
