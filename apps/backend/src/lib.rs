pub mod error;
pub mod loader;
pub mod models;
pub mod routes;

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::VocabularyCatalog;

/// Shared application state
///
/// The catalog lives behind `RwLock<Arc<..>>` so a reload swaps the whole
/// Arc at once; handlers clone the Arc up front and read a consistent
/// catalog for the rest of the request.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<RwLock<Arc<VocabularyCatalog>>>,
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: VocabularyCatalog, data_dir: PathBuf) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
            data_dir,
        }
    }

    /// Snapshot of the current catalog.
    pub fn catalog(&self) -> Arc<VocabularyCatalog> {
        self.catalog
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the catalog atomically.
    pub fn swap_catalog(&self, catalog: Arc<VocabularyCatalog>) {
        *self
            .catalog
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = catalog;
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/levels", get(routes::levels::list))
        .route("/api/words/{level_id}", get(routes::words::fetch))
        .route("/api/check", post(routes::check::check))
        .route("/api/reload", post(routes::admin::reload))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

    tracing::info!("Loading word bank from {}...", data_dir.display());
    let catalog = loader::load_catalog(&data_dir)?;

    let state = AppState::new(catalog, data_dir);

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
