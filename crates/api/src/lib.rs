//! # Slotbook API
//!
//! The HTTP surface of the slot-booking engine. It defines the two
//! scheduling endpoints (day availability and slot booking) plus health
//! probes, and wires them to the in-memory booking store.
//!
//! ## Architecture
//!
//! This crate follows a layered structure:
//!
//! - **Routes**: endpoint definitions and URL structure
//! - **Handlers**: request processing against the core and store crates
//! - **Middleware**: error-to-response mapping
//! - **Config**: environment-based configuration
//!
//! The engine itself never suspends; handlers validate input, perform one
//! synchronous store operation, and return.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the endpoint logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use eyre::{Result, WrapErr};
use slotbook_core::grid::OperatingWindow;
use slotbook_store::BookingStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state available to all request handlers.
///
/// The booking store is owned here and injected through axum state rather
/// than living in a global; the operating window is fixed for the process
/// lifetime.
pub struct ApiState {
    /// Daily scheduling window and slot interval
    pub window: OperatingWindow,
    /// Booking state for every (doctor, day, slot) key
    pub store: BookingStore,
}

/// Builds the application router over the given state.
///
/// Exposed separately from [`start_server`] so tests can drive the full
/// router without binding a socket.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Scheduling endpoints
        .merge(routes::schedule::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and booking store.
///
/// Initializes logging, assembles the router with CORS and timeout layers,
/// binds the configured address, and serves until shutdown.
pub async fn start_server(config: config::ApiConfig, store: BookingStore) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        window: config.window,
        store,
    });

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let mut allowed = Vec::with_capacity(origins.len());
        for origin in origins {
            let value: HeaderValue = origin
                .parse()
                .wrap_err_with(|| format!("Invalid CORS origin: {origin}"))?;
            allowed.push(value);
        }
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Add request logging and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::timeout::TimeoutLayer::new(Duration::from_secs(
                config.request_timeout,
            ))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!(
        "Operating window {}-{} at {} minute slots",
        config.window.open(),
        config.window.close(),
        config.window.interval_minutes()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
