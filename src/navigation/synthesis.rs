use std::ops::RangeInclusive;

use crate::entities::{Coordinates, Path, RouteSource};
use crate::navigation::{LandOracle, WaypointFallback};

/// Tuning for curve generation and its fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisConfig {
    pub max_attempts: usize,
    /// Control point displacement on the first attempt, in degrees.
    pub initial_offset: f64,
    /// Added to the displacement after every rejected attempt.
    pub offset_step: f64,
    /// Intervals per Bezier curve; a curve has `curve_intervals + 1` points.
    pub curve_intervals: usize,
    /// Waypoint displacement along the heading's latitude component.
    pub fallback_lat_reach: f64,
    /// Waypoint displacement along the heading's longitude component.
    pub fallback_lng_reach: f64,
    /// Fixed control displacement for each fallback leg.
    pub fallback_leg_offset: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_offset: 3.0,
            offset_step: 2.0,
            curve_intervals: 30,
            fallback_lat_reach: 8.0,
            fallback_lng_reach: 4.0,
            fallback_leg_offset: 3.0,
        }
    }
}

impl SynthesisConfig {
    pub fn offset_for_attempt(&self, attempt: usize) -> f64 {
        self.initial_offset + self.offset_step * attempt as f64
    }
}

/// Direction, in degrees of latitude and longitude, towards open water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaHeading {
    pub d_lat: f64,
    pub d_lng: f64,
}

impl SeaHeading {
    pub const SOUTH: SeaHeading = SeaHeading::new(-1.0, 0.0);
    pub const EAST: SeaHeading = SeaHeading::new(0.0, 1.0);

    pub const fn new(d_lat: f64, d_lng: f64) -> Self {
        Self { d_lat, d_lng }
    }

    /// Moves `origin` by `lat_scale` along the latitude component and
    /// `lng_scale` along the longitude component.
    pub fn displace(&self, origin: &Coordinates, lat_scale: f64, lng_scale: f64) -> Coordinates {
        Coordinates::new(
            origin.latitude + self.d_lat * lat_scale,
            origin.longitude + self.d_lng * lng_scale,
        )
    }
}

struct SeaBand {
    latitude: RangeInclusive<f64>,
    longitude: RangeInclusive<f64>,
    heading: SeaHeading,
}

// First match wins.
const SEA_BANDS: [SeaBand; 7] = [
    // Pacific, east of Japan
    SeaBand {
        latitude: -90.0..=90.0,
        longitude: 140.0..=180.0,
        heading: SeaHeading::EAST,
    },
    // South of Kyushu: swing west around Cape Sata
    SeaBand {
        latitude: 28.0..=33.0,
        longitude: 127.0..=134.0,
        heading: SeaHeading::new(-1.0, -1.0),
    },
    // Pacific coast of Honshu
    SeaBand {
        latitude: 28.0..=34.0,
        longitude: 134.0..=140.0,
        heading: SeaHeading::new(-1.0, 1.0),
    },
    // Sea of Japan and Korea Strait
    SeaBand {
        latitude: 33.5..=90.0,
        longitude: 125.0..=140.0,
        heading: SeaHeading::SOUTH,
    },
    // East China Sea
    SeaBand {
        latitude: 28.0..=33.5,
        longitude: 125.0..=140.0,
        heading: SeaHeading::new(-1.0, 1.0),
    },
    // Yellow Sea
    SeaBand {
        latitude: 30.0..=90.0,
        longitude: 118.0..=125.0,
        heading: SeaHeading::EAST,
    },
    // Taiwan Strait and the South China Sea
    SeaBand {
        latitude: -90.0..=30.0,
        longitude: 110.0..=125.0,
        heading: SeaHeading::new(-1.0, 1.0),
    },
];

/// Rough direction of open water around `midpoint`, south when no band
/// matches.
pub fn sea_heading(midpoint: &Coordinates) -> SeaHeading {
    SEA_BANDS
        .iter()
        .find(|band| {
            band.latitude.contains(&midpoint.latitude)
                && band.longitude.contains(&midpoint.longitude)
        })
        .map(|band| band.heading)
        .unwrap_or(SeaHeading::SOUTH)
}

/// Samples the quadratic Bezier `from -> control -> to` at `intervals + 1`
/// evenly spaced parameter values. The endpoints are reproduced exactly.
pub fn quadratic_bezier(
    from: &Coordinates,
    control: &Coordinates,
    to: &Coordinates,
    intervals: usize,
) -> Path {
    let intervals = intervals.max(1);

    let mut path = Path::single(*from);

    for i in 1..=intervals {
        let t = i as f64 / intervals as f64;
        let u = 1.0 - t;
        let (a, b, c) = (u * u, 2.0 * u * t, t * t);

        path.push(Coordinates::new(
            a * from.latitude + b * control.latitude + c * to.latitude,
            a * from.longitude + b * control.longitude + c * to.longitude,
        ));
    }

    path
}

/// A curve bowing from the chord's midpoint along `heading` by `offset`
/// degrees.
pub fn bowed_curve(
    from: &Coordinates,
    to: &Coordinates,
    heading: SeaHeading,
    offset: f64,
    intervals: usize,
) -> Path {
    let control = heading.displace(&from.midpoint(to), offset, offset);
    quadratic_bezier(from, &control, to, intervals)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Synthesis {
    Found { path: Path, attempt: usize },
    Exhausted { heading: SeaHeading },
}

/// Bounded search for a single-arc curve that clears the land oracle.
#[derive(Debug, Clone)]
pub struct CurveSynthesizer {
    oracle: LandOracle,
    config: SynthesisConfig,
    fallback: WaypointFallback,
}

impl CurveSynthesizer {
    pub fn new(oracle: LandOracle, config: SynthesisConfig) -> Self {
        Self {
            oracle,
            config,
            fallback: WaypointFallback::new(config),
        }
    }

    pub fn oracle(&self) -> &LandOracle {
        &self.oracle
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Tries offsets `initial, initial + step, ...` for `max_attempts`
    /// attempts and reports the first candidate whose vertices and segments
    /// all clear land.
    pub fn search(&self, from: &Coordinates, to: &Coordinates) -> Synthesis {
        if from == to {
            return Synthesis::Found {
                path: Path::single(*from),
                attempt: 0,
            };
        }

        let heading = sea_heading(&from.midpoint(to));

        for attempt in 0..self.config.max_attempts {
            let offset = self.config.offset_for_attempt(attempt);
            let candidate = bowed_curve(from, to, heading, offset, self.config.curve_intervals);

            match self.oracle.first_landfall(&candidate) {
                None => {
                    tracing::debug!(attempt, offset, "curve clears land");
                    return Synthesis::Found {
                        path: candidate,
                        attempt,
                    };
                }
                Some(region) => {
                    tracing::debug!(attempt, offset, region = region.name, "curve crosses land");
                }
            }
        }

        Synthesis::Exhausted { heading }
    }

    /// Never fails: exhausting the attempt budget hands over to the waypoint
    /// fallback.
    #[tracing::instrument(skip(self))]
    pub fn synthesize(&self, from: &Coordinates, to: &Coordinates) -> (Path, RouteSource) {
        match self.search(from, to) {
            Synthesis::Found { path, attempt } => (path, RouteSource::Curve { attempt }),
            Synthesis::Exhausted { heading } => {
                tracing::info!(
                    attempts = self.config.max_attempts,
                    "curve search exhausted, routing via waypoint"
                );

                let path = self.fallback.route(from, to, heading);
                if self.oracle.path_crosses_land(&path) {
                    tracing::warn!("waypoint route still crosses land");
                }

                (path, RouteSource::Waypoint)
            }
        }
    }
}

impl Default for CurveSynthesizer {
    fn default() -> Self {
        CurveSynthesizer::new(LandOracle::default(), SynthesisConfig::default())
    }
}
