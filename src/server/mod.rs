//! Web server publishing the location map.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use log::{info, warn};
use tokio::net::TcpListener;

use crate::{
    core::config::{AppConfig, MapConfig},
    storage::location_db::LocationDb,
    Result,
};

pub use error::{ServerError, ServerResult};

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: LocationDb,
    pub map: Arc<MapConfig>,
}

impl AppState {
    pub fn new(db: LocationDb, map: MapConfig) -> Self {
        Self {
            db,
            map: Arc::new(map),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/locations", get(routes::locations))
        .with_state(state)
}

/// Opens the database and serves the map until Ctrl-C.
pub async fn serve(config: AppConfig) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let db = LocationDb::from_config(&config.database).await?;
    let app = router(AppState::new(db.clone(), config.map));

    let listener = TcpListener::bind(addr).await?;
    info!("Serving map on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => warn!("Unable to listen for shutdown signal: {}", e),
    }
}
