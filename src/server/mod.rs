mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use crate::api::{DynAPI, API};
use crate::error::{server_error, Error};
use crate::server::handlers::routes;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/routes/:origin/:destination", get(routes::find))
        .route("/routes/:origin/:destination/position", get(routes::position))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: Arc<T>, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api as DynAPI);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
