use super::Engine;

use async_trait::async_trait;

use crate::{api::RouteAPI, entities::Path, error::Error};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn get_route(&self, origin_id: &str, destination_id: &str) -> Result<Path, Error> {
        let route = self.resolve(origin_id, destination_id).await?;

        Ok(route.path)
    }

    #[tracing::instrument(skip(self))]
    fn get_route_sync(&self, origin_id: &str, destination_id: &str) -> Result<Path, Error> {
        let route = self.resolve_sync(origin_id, destination_id)?;

        Ok(route.path)
    }
}
