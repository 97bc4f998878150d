use std::sync::Arc;

use seaway::config::Config;
use seaway::engine::Engine;
use seaway::entities::PortCatalogue;
use seaway::error::Error;
use seaway::external::dataset::source_for;
use seaway::navigation::{CurveSynthesizer, LandOracle, SynthesisConfig};
use seaway::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let source = source_for(config.dataset.as_deref(), config.dataset_timeout)?;
    let synthesizer = CurveSynthesizer::new(
        LandOracle::default(),
        SynthesisConfig {
            max_attempts: config.max_attempts,
            ..SynthesisConfig::default()
        },
    );
    let engine = Arc::new(Engine::new(PortCatalogue::east_asia(), synthesizer, source));

    engine.load_dataset().await;

    for result in engine.warm(&config.warm_routes).await {
        if let Err(err) = result {
            tracing::warn!(%err, "could not warm route");
        }
    }

    serve(engine, config.bind_addr).await
}
