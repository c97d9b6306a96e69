use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use climate_server::config::ServerConfig;
use climate_server::store::ClimateStore;
use climate_server::web::{API_ROUTES, AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "climate_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    // Open the dataset (fail fast if it is missing or lacks the expected tables)
    info!(path = %config.store.path.display(), "Opening climate dataset");
    let store = ClimateStore::open(&config.store)
        .await
        .expect("Failed to open climate dataset");
    let summary = store
        .session()
        .await
        .expect("Failed to acquire dataset session")
        .dataset_summary()
        .await
        .expect("Dataset is missing the measurement or station table");
    info!(
        "Loaded {} stations and {} measurements",
        summary.stations, summary.measurements
    );

    // Build app state and router
    let state = AppState::new(store);
    let app = create_router(state.clone());

    // Bind and serve
    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    info!("Climate API listening on http://{addr}");
    info!("  GET  /health");
    for route in API_ROUTES {
        info!("  GET  {}", route.path);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    state.store.close().await;
    info!("Shut down");
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
