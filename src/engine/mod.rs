mod route_api;
mod tracking_api;

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use futures::future::join_all;
use tokio::sync::OnceCell;

use crate::{
    api::API,
    entities::{Path, PortCatalogue, Route, RouteKey, RouteSource},
    error::Error,
    external::dataset::{DynDatasetSource, RouteDataset},
    navigation::{CurveSynthesizer, PathSampler},
};

/// Route repository: memo cache, precomputed dataset, then synthesis.
///
/// The dataset is fetched at most once per engine. The first caller to need
/// it starts the fetch; concurrent callers wait on the same cell, and the
/// outcome (an empty dataset on failure) is kept for the engine's lifetime.
pub struct Engine {
    ports: PortCatalogue,
    synthesizer: CurveSynthesizer,
    sampler: PathSampler,
    source: DynDatasetSource,
    dataset: OnceCell<RouteDataset>,
    memo: RwLock<HashMap<RouteKey, Path>>,
}

impl Engine {
    pub fn new(ports: PortCatalogue, synthesizer: CurveSynthesizer, source: DynDatasetSource) -> Self {
        Self {
            ports,
            synthesizer,
            sampler: PathSampler::new(),
            source,
            dataset: OnceCell::new(),
            memo: RwLock::new(HashMap::new()),
        }
    }

    pub fn ports(&self) -> &PortCatalogue {
        &self.ports
    }

    /// Loads the dataset if no fetch has completed yet. Fetch failures are
    /// logged and leave the dataset empty for good.
    #[tracing::instrument(name = "Engine::load_dataset", skip(self))]
    pub async fn load_dataset(&self) -> &RouteDataset {
        self.dataset
            .get_or_init(|| async {
                match self.source.fetch().await {
                    Ok(dataset) => {
                        tracing::info!(routes = dataset.len(), "loaded route dataset");
                        dataset
                    }
                    Err(err) => {
                        tracing::warn!(%err, "route dataset unavailable, falling back to synthesis");
                        RouteDataset::default()
                    }
                }
            })
            .await
    }

    pub fn is_dataset_loaded(&self) -> bool {
        self.dataset.initialized()
    }

    pub fn cached_routes(&self) -> usize {
        self.memo
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, origin_id: &str, destination_id: &str) -> Result<Route, Error> {
        let key = self.validated_key(origin_id, destination_id)?;

        if let Some(route) = self.recall(&key) {
            return Ok(route);
        }

        let dataset = self.load_dataset().await;
        self.resolve_uncached(key, Some(dataset))
    }

    #[tracing::instrument(skip(self))]
    pub fn resolve_sync(&self, origin_id: &str, destination_id: &str) -> Result<Route, Error> {
        let key = self.validated_key(origin_id, destination_id)?;

        if let Some(route) = self.recall(&key) {
            return Ok(route);
        }

        self.resolve_uncached(key, self.dataset.get())
    }

    /// Resolves every key concurrently, e.g. to fill the cache at start-up.
    #[tracing::instrument(skip_all, fields(routes = keys.len()))]
    pub async fn warm(&self, keys: &[RouteKey]) -> Vec<Result<Route, Error>> {
        join_all(
            keys.iter()
                .map(|key| self.resolve(&key.origin, &key.destination)),
        )
        .await
    }

    fn validated_key(&self, origin_id: &str, destination_id: &str) -> Result<RouteKey, Error> {
        self.ports.find(origin_id)?;
        self.ports.find(destination_id)?;

        Ok(RouteKey::new(origin_id, destination_id))
    }

    /// Memo lookup under the exact key, then under the reverse key. A reverse
    /// hit is stored under the forward key as well.
    fn recall(&self, key: &RouteKey) -> Option<Route> {
        let (path, reversed) = {
            let memo = self.memo.read().unwrap_or_else(PoisonError::into_inner);

            if let Some(path) = memo.get(key) {
                (path.clone(), false)
            } else {
                (memo.get(&key.reversed())?.reversed(), true)
            }
        };

        if reversed {
            self.remember(key, &path);
        }

        tracing::debug!(%key, reversed, "memo hit");
        Some(Route::new(key.clone(), path, RouteSource::Memo))
    }

    fn resolve_uncached(&self, key: RouteKey, dataset: Option<&RouteDataset>) -> Result<Route, Error> {
        let precomputed = dataset.and_then(|dataset| {
            dataset
                .get(&key)
                .cloned()
                .or_else(|| dataset.get(&key.reversed()).map(Path::reversed))
        });

        let route = match precomputed {
            Some(path) => Route::new(key, path, RouteSource::Dataset),
            None => {
                let from = self.ports.coordinates(&key.origin)?;
                let to = self.ports.coordinates(&key.destination)?;
                let (path, source) = self.synthesizer.synthesize(&from, &to);

                Route::new(key, path, source)
            }
        };

        self.remember(&route.key, &route.path);
        tracing::info!(key = %route.key, source = ?route.source, points = route.path.len(), "resolved route");

        Ok(route)
    }

    fn remember(&self, key: &RouteKey, path: &Path) {
        self.memo
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), path.clone());
    }
}

impl API for Engine {}
