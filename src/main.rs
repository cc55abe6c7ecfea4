//! Dogs Gallery Backend
//!
//! A REST backend that fetches random dog image URLs from dog.ceo and persists
//! them to SQLite for a list/detail gallery frontend.

mod api;
mod config;
mod db;
mod errors;
mod http;
mod models;
mod service;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use http::HttpClient;
use service::ItemService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ItemService>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dogs Gallery Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Image API: {}", config.image_api_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // One outbound client for the process, injected into the workflow
    let client = HttpClient::new()?;

    let service = Arc::new(ItemService::new(
        repo,
        client,
        config.image_api_url.clone(),
        config.fetch_count,
    ));

    // Create application state
    let state = AppState { service };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        .route("/items", get(api::list_items))
        .route("/items", delete(api::delete_all_items))
        .route("/items/fetch", post(api::fetch_items))
        .route("/items/delete", post(api::delete_items));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
