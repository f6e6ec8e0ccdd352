//! HTTP API for the bowling server.
//!
//! This module provides the REST API for tracking and scoring games, one
//! independent game per player.
//!
//! # Modules
//!
//! - [`players`]: player lifecycle and roll recording
//! - [`request_id`]: request ID propagation for log correlation
//!
//! # Endpoints Overview
//!
//! ## API v1
//! - `POST /api/v1/players` - Create a player with a fresh game
//! - `GET /api/v1/players` - List all players
//! - `GET /api/v1/players/{name}` - Get a player
//! - `PUT /api/v1/players/{name}` - Record a roll
//! - `POST /api/v1/players/{name}/reset` - Reset a player's game
//! - `DELETE /api/v1/players/{name}` - Delete a player
//!
//! ## Legacy Routes
//! The original unversioned surface is kept as aliases:
//! `POST/GET /api` and `GET/PUT/DELETE /api/{name}`.
//!
//! ## Health Check
//! - `GET /health` - Server health status
//!
//! # CORS
//!
//! CORS is configured permissively for development. In production, configure
//! appropriate origins, methods, and headers.

pub mod players;
pub mod request_id;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use ten_pin::PlayerStore;

use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request (cheap due to the Arc wrapper).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlayerStore>,
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use ten_pin::PlayerStore;
/// use tp_server::api::{AppState, create_router};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let state = AppState {
///     store: Arc::new(PlayerStore::new()),
/// };
/// let app = create_router(state);
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn create_router(state: AppState) -> Router {
    // API v1 routes (versioned for future evolution)
    let v1_routes = create_v1_router();

    // Root routes (health check, not versioned)
    let root_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(root_routes)
        .nest("/api/v1", v1_routes)
        // Legacy routes matching the original API surface
        .route(
            "/api",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/api/{name}",
            get(players::get_player)
                .put(players::record_roll)
                .delete(players::delete_player),
        )
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create API v1 router with all versioned endpoints.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/players",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/players/{name}",
            get(players::get_player)
                .put(players::record_roll)
                .delete(players::delete_player),
        )
        .route("/players/{name}/reset", axum::routing::post(players::reset_player))
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/health
/// # {"status":"healthy","players":0,"timestamp":"2025-11-22T10:30:00Z",...}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let player_count = state.store.player_count().await;

    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "players": player_count,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
