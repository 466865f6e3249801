use tracing::info;
use tracing_subscriber::EnvFilter;

use tube_server::catalog::SymbolCatalog;
use tube_server::config::ServerConfig;
use tube_server::map::TubeMap;
use tube_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;

    // Load the map and listings (fail fast if unavailable)
    let map = TubeMap::load(&config.map_path)?;
    let (height, width) = map.dimensions();
    info!(path = %config.map_path.display(), height, width, "loaded map");

    let catalog = SymbolCatalog::load(&config.stations_path, &config.lines_path)?;
    info!(
        stations = catalog.stations().len(),
        lines = catalog.lines().len(),
        "loaded listings"
    );

    if config.validator.require_station_endpoint {
        info!("routes must end on a station");
    }

    let state = AppState::new(map, catalog, config.validator.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Tube route validator listening");
    info!("  GET  /health          - Health check");
    info!("  GET  /map             - Map with rulers");
    info!("  GET  /api/symbol      - Symbol for a station or line name");
    info!("  POST /route/validate  - Validate a route");

    axum::serve(listener, app).await?;
    Ok(())
}
