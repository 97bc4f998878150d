use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, Path};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    /// Resolves a path between two ports, loading the precomputed dataset on
    /// first use.
    async fn get_route(&self, origin_id: &str, destination_id: &str) -> Result<Path, Error>;

    /// Like `get_route` but never performs I/O; whatever dataset is already
    /// loaded is used, otherwise the route is synthesized.
    fn get_route_sync(&self, origin_id: &str, destination_id: &str) -> Result<Path, Error>;
}

pub trait TrackingAPI {
    fn sample_at(&self, path: &Path, progress: f64) -> Coordinates;
    fn prefix_up_to(&self, path: &Path, progress: f64) -> Path;
}

pub trait API: RouteAPI + TrackingAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
