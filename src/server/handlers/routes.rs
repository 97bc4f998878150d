use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{self, Coordinates};
use crate::error::Error;
use crate::navigation::sampler::progress_fraction;

#[derive(Debug, Deserialize)]
pub struct RouteParams {
    origin: String,
    destination: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteBody {
    origin: String,
    destination: String,
    path: entities::Path,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(params): Path<RouteParams>,
) -> Result<Json<RouteBody>, Error> {
    let path = api.get_route(&params.origin, &params.destination).await?;

    Ok(Json(RouteBody {
        origin: params.origin,
        destination: params.destination,
        path,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PositionQuery {
    #[serde(default)]
    progress: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PositionBody {
    progress: f64,
    position: Coordinates,
    traveled: entities::Path,
}

pub async fn position(
    Extension(api): Extension<DynAPI>,
    Path(params): Path<RouteParams>,
    Query(query): Query<PositionQuery>,
) -> Result<Json<PositionBody>, Error> {
    let path = api.get_route(&params.origin, &params.destination).await?;

    Ok(Json(PositionBody {
        progress: progress_fraction(query.progress) * 100.0,
        position: api.sample_at(&path, query.progress),
        traveled: api.prefix_up_to(&path, query.progress),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::entities::PortCatalogue;
    use crate::external::dataset::NoDataset;
    use crate::navigation::CurveSynthesizer;
    use std::sync::Arc;

    fn api() -> DynAPI {
        Arc::new(Engine::new(
            PortCatalogue::east_asia(),
            CurveSynthesizer::default(),
            Box::new(NoDataset),
        ))
    }

    fn params(origin: &str, destination: &str) -> Path<RouteParams> {
        Path(RouteParams {
            origin: origin.into(),
            destination: destination.into(),
        })
    }

    #[tokio::test]
    async fn find_returns_the_resolved_path() {
        let Json(body) = find(Extension(api()), params("shanghai", "incheon"))
            .await
            .unwrap();

        assert_eq!(body.origin, "shanghai");
        assert_eq!(body.destination, "incheon");
        assert_eq!(body.path.len(), 31);
        assert_eq!(body.path.first(), Coordinates::new(31.23, 121.47));
    }

    #[tokio::test]
    async fn find_rejects_unknown_ports() {
        let err = find(Extension(api()), params("busan", "atlantis"))
            .await
            .unwrap_err();

        assert_eq!(err.code, 102);
    }

    #[tokio::test]
    async fn position_clamps_progress() {
        let Json(body) = position(
            Extension(api()),
            params("busan", "tokyo"),
            Query(PositionQuery { progress: 250.0 }),
        )
        .await
        .unwrap();

        assert_eq!(body.progress, 100.0);
        assert_eq!(body.position, Coordinates::new(35.68, 139.65));
        assert_eq!(body.traveled.len(), 61);
    }

    #[tokio::test]
    async fn position_at_start_is_the_origin() {
        let Json(body) = position(
            Extension(api()),
            params("busan", "tokyo"),
            Query(PositionQuery { progress: 0.0 }),
        )
        .await
        .unwrap();

        assert_eq!(body.position, Coordinates::new(35.18, 129.08));
        assert_eq!(body.traveled.len(), 1);
    }
}
