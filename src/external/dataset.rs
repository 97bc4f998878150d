use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;

use crate::{
    entities::{Coordinates, Path, RouteKey},
    error::{upstream_error, Error},
};

/// Precomputed paths keyed by ordered port pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteDataset {
    routes: HashMap<RouteKey, Path>,
}

impl RouteDataset {
    pub fn new(routes: HashMap<RouteKey, Path>) -> Self {
        Self { routes }
    }

    pub fn get(&self, key: &RouteKey) -> Option<&Path> {
        self.routes.get(key)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Decodes `{"origin->destination": [{"lat": .., "lng": ..}, ..], ..}`.
///
/// A body that is not such an object is an error. Individual entries with a
/// malformed key or no points are skipped.
pub fn decode(body: &[u8]) -> Result<RouteDataset, Error> {
    let raw: HashMap<String, Vec<Coordinates>> = serde_json::from_slice(body)?;

    let mut routes = HashMap::with_capacity(raw.len());
    for (key, points) in raw {
        let route_key: RouteKey = match key.parse() {
            Ok(route_key) => route_key,
            Err(_) => {
                tracing::warn!(%key, "skipping dataset entry with malformed key");
                continue;
            }
        };

        match Path::new(points) {
            Ok(path) => {
                routes.insert(route_key, path);
            }
            Err(_) => tracing::warn!(%key, "skipping dataset entry without points"),
        }
    }

    Ok(RouteDataset::new(routes))
}

#[async_trait]
pub trait DatasetSource {
    async fn fetch(&self) -> Result<RouteDataset, Error>;
}

pub type DynDatasetSource = Box<dyn DatasetSource + Send + Sync>;

/// Fetches the dataset as a static resource over HTTP.
pub struct HttpDatasetSource {
    client: Client,
    url: String,
}

impl HttpDatasetSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<RouteDataset, Error> {
        let res = self.client.get(&self.url).send().await?;

        let status = res.status();

        if status != StatusCode::OK {
            tracing::warn!(%status, "dataset host refused the request");
            return Err(upstream_error());
        }

        let body = res.bytes().await?;

        decode(&body)
    }
}

/// Reads the dataset from a local JSON file.
pub struct FileDatasetSource {
    path: std::path::PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<RouteDataset, Error> {
        let body = tokio::fs::read(&self.path).await?;

        decode(&body)
    }
}

/// No precomputed routes; every miss goes to synthesis.
pub struct NoDataset;

#[async_trait]
impl DatasetSource for NoDataset {
    async fn fetch(&self) -> Result<RouteDataset, Error> {
        Ok(RouteDataset::default())
    }
}

/// Picks a source for `location`: `http(s)://` URLs are fetched, anything
/// else is read from disk.
pub fn source_for(location: Option<&str>, timeout: Duration) -> Result<DynDatasetSource, Error> {
    match location {
        None => Ok(Box::new(NoDataset)),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            Ok(Box::new(HttpDatasetSource::new(url, timeout)?))
        }
        Some(path) => Ok(Box::new(FileDatasetSource::new(path))),
    }
}
