use super::Engine;

use crate::{
    api::TrackingAPI,
    entities::{Coordinates, Path},
};

impl TrackingAPI for Engine {
    fn sample_at(&self, path: &Path, progress: f64) -> Coordinates {
        self.sampler.sample_at(path, progress)
    }

    fn prefix_up_to(&self, path: &Path, progress: f64) -> Path {
        self.sampler.prefix_up_to(path, progress)
    }
}
