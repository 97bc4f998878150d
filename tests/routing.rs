use std::io::Write;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

use seaway::api::{DynAPI, RouteAPI, TrackingAPI};
use seaway::engine::Engine;
use seaway::entities::{Coordinates, PortCatalogue, RouteKey, RouteSource};
use seaway::external::dataset::{source_for, NoDataset};
use seaway::navigation::{CurveSynthesizer, LandOracle};
use seaway::progress::{ProgressDriver, Voyage};

fn engine() -> Engine {
    Engine::new(
        PortCatalogue::east_asia(),
        CurveSynthesizer::default(),
        Box::new(NoDataset),
    )
}

#[tokio::test]
async fn every_port_pair_stays_at_sea() {
    let api = Arc::new(engine()) as DynAPI;
    let oracle = LandOracle::default();
    let ports = PortCatalogue::east_asia();

    for origin in ports.iter() {
        for destination in ports.iter().filter(|port| port.id != origin.id) {
            let path = api.get_route(&origin.id, &destination.id).await.unwrap();

            assert!(
                !oracle.path_crosses_land(&path),
                "{}->{}",
                origin.id,
                destination.id
            );
        }
    }
}

#[tokio::test]
async fn routes_are_symmetric_across_directions() {
    let engine = engine();

    let forward = engine.get_route("busan", "tokyo").await.unwrap();
    let backward = engine.get_route_sync("tokyo", "busan").unwrap();

    assert_eq!(backward, forward.reversed());
    assert_eq!(engine.cached_routes(), 2);
}

#[tokio::test]
async fn dataset_file_is_fetched_once_and_preferred() {
    let file = std::env::temp_dir().join(format!("seaway-it-{}.json", uuid::Uuid::new_v4()));
    std::fs::File::create(&file)
        .unwrap()
        .write_all(br#"{"busan->nagasaki": [{"lat": 35.18, "lng": 129.08}, {"lat": 34.0, "lng": 129.3}, {"lat": 32.75, "lng": 129.6}]}"#)
        .unwrap();

    let source = source_for(file.to_str(), Duration::from_secs(1)).unwrap();
    let engine = Engine::new(PortCatalogue::east_asia(), CurveSynthesizer::default(), source);

    let keys = vec![
        RouteKey::new("busan", "nagasaki"),
        RouteKey::new("nagasaki", "busan"),
        RouteKey::new("shanghai", "incheon"),
    ];
    let results = engine.warm(&keys).await;
    std::fs::remove_file(&file).unwrap();

    let paths: Vec<_> = results.into_iter().map(|result| result.unwrap().path).collect();
    assert_eq!(paths[0].len(), 3);
    assert_eq!(paths[1], paths[0].reversed());
    assert_eq!(paths[2].len(), 31);
    assert!(engine.is_dataset_loaded());
}

/// Hosts one dataset response at `/routes.json`, counting requests.
fn spawn_dataset_host<R>(response: R) -> (String, Arc<AtomicUsize>)
where
    R: IntoResponse + Clone + Send + Sync + 'static,
{
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/routes.json",
        get(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let response = response.clone();
            async move { response }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service()),
    );

    (format!("http://{}/routes.json", addr), hits)
}

async fn resolve_all_via(url: &str) -> Vec<RouteSource> {
    let source = source_for(Some(url), Duration::from_secs(5)).unwrap();
    let engine = Engine::new(PortCatalogue::east_asia(), CurveSynthesizer::default(), source);

    let keys = vec![
        RouteKey::new("busan", "nagasaki"),
        RouteKey::new("busan", "tokyo"),
        RouteKey::new("shanghai", "incheon"),
    ];
    let mut sources = vec![];
    for result in engine.warm(&keys).await {
        sources.push(result.unwrap().source);
    }
    // later lookups reuse the loaded dataset
    engine.resolve("tokyo", "shanghai").await.unwrap();

    sources
}

#[tokio::test]
async fn http_dataset_is_fetched_once_and_preferred() {
    let body = r#"{"busan->nagasaki": [{"lat": 35.18, "lng": 129.08}, {"lat": 32.75, "lng": 129.6}]}"#;
    let (url, hits) = spawn_dataset_host(body);

    let sources = resolve_all_via(&url).await;

    assert_eq!(
        sources,
        vec![
            RouteSource::Dataset,
            RouteSource::Waypoint,
            RouteSource::Curve { attempt: 0 }
        ]
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failing_http_dataset_degrades_to_synthesis() {
    let (url, hits) = spawn_dataset_host((StatusCode::INTERNAL_SERVER_ERROR, "boom"));

    let sources = resolve_all_via(&url).await;

    assert_eq!(sources[0], RouteSource::Curve { attempt: 0 });
    assert_eq!(sources[1], RouteSource::Waypoint);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn malformed_http_dataset_degrades_to_synthesis() {
    let (url, hits) = spawn_dataset_host("{ not json");

    let sources = resolve_all_via(&url).await;

    assert!(sources.iter().all(|source| *source != RouteSource::Dataset));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn sampling_walks_the_path_in_order() {
    let engine = engine();
    let path = engine.get_route("busan", "tokyo").await.unwrap();

    assert_eq!(engine.sample_at(&path, 0.0), Coordinates::new(35.18, 129.08));
    assert_eq!(engine.sample_at(&path, 100.0), Coordinates::new(35.68, 139.65));

    let mut traveled = 0.0;
    for step in 1..=20 {
        let prefix = engine.prefix_up_to(&path, step as f64 * 5.0);

        assert_eq!(prefix.last(), engine.sample_at(&path, step as f64 * 5.0));
        assert!(prefix.length() >= traveled);
        traveled = prefix.length();
    }
    assert!((traveled - path.length()).abs() < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn driver_reports_the_voyage_until_arrival() {
    let engine = engine();
    let path = engine.get_route("shanghai", "incheon").await.unwrap();
    let voyage = Voyage::new(
        RouteKey::new("shanghai", "incheon"),
        path.clone(),
        Duration::from_secs(10),
    );
    let (tx, rx) = async_channel::unbounded();

    let sent = ProgressDriver::default().run(&engine, &voyage, tx).await;

    let fixes: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    assert_eq!(sent, 11);
    assert_eq!(fixes.len(), 11);
    assert_eq!(fixes[0].position, path.first());
    assert!(fixes.last().unwrap().has_arrived());
    assert_eq!(fixes.last().unwrap().traveled, path);
}
