use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use departures_server::config::AppConfig;
use departures_server::geocoding::{
    CachedGeocoder, GeocodeCacheConfig, Geocoder, GeocodingClient, GeocodingConfig,
};
use departures_server::pipeline::{Aggregator, PipelineConfig};
use departures_server::routing::{RoutingClient, RoutingConfig};
use departures_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "departures_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let timeout_secs = config.upstream_timeout.as_secs();

    let geocoding = GeocodingClient::new(
        GeocodingConfig::new(&config.api_key)
            .with_base_url(&config.geocoding_url)
            .with_timeout(timeout_secs),
    )?;
    let geocoder: Arc<dyn Geocoder> = if config.geocode_cache_ttl.is_zero() {
        Arc::new(geocoding)
    } else {
        let cache_config = GeocodeCacheConfig {
            ttl: config.geocode_cache_ttl,
            ..GeocodeCacheConfig::default()
        };
        Arc::new(CachedGeocoder::new(geocoding, &cache_config))
    };

    let routing = RoutingClient::new(
        RoutingConfig::new(&config.api_key)
            .with_base_url(&config.routing_url)
            .with_timeout(timeout_secs),
    )?;

    let pipeline_config = PipelineConfig::default();
    info!(
        lines = ?pipeline_config.allowed_lines.iter().collect::<Vec<_>>(),
        "Reporting allow-listed lines"
    );

    let aggregator = Aggregator::new(geocoder, Arc::new(routing), pipeline_config);
    let app = create_router(AppState::new(aggregator), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running on http://{}", config.bind_addr);
    info!("  GET /api/next?address=&radius=&n=  - departures as JSON");
    info!("  GET /                              - departures page");
    info!("  GET /health                        - health check");

    axum::serve(listener, app).await?;
    Ok(())
}
