//! Route geometry: land checks, curve synthesis with its waypoint fallback,
//! and arc-length sampling of the resulting paths.

pub mod fallback;
pub mod land;
pub mod sampler;
pub mod synthesis;

pub use fallback::WaypointFallback;
pub use land::LandOracle;
pub use sampler::PathSampler;
pub use synthesis::{CurveSynthesizer, SeaHeading, Synthesis, SynthesisConfig};
