//! Player API handlers.
//!
//! HTTP REST endpoints for the bowling service:
//! - Creating a player, which starts a fresh game
//! - Listing and fetching players with their frame-by-frame scores
//! - Recording rolls one at a time
//! - Resetting a player's game
//! - Deleting players
//!
//! For a roll, the handler follows the engine's two-step contract inside a
//! single store update: check the game is live, validate the roll, apply it,
//! and return the persisted record.
//!
//! # Examples
//!
//! Create a player:
//! ```bash
//! curl -X POST http://localhost:3000/api/v1/players \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Jane Doe"}'
//! ```
//!
//! Record a strike:
//! ```bash
//! curl -X PUT http://localhost:3000/api/v1/players/Jane%20Doe \
//!   -H "Content-Type: application/json" \
//!   -d '{"roll": 10}'
//! ```

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use ten_pin::{Player, RollError};
use tracing::debug;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordRollRequest {
    /// Accepted wide so out-of-range values produce a clean 400 rather
    /// than a deserialization failure.
    pub roll: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Create a player with a fresh, empty game.
///
/// # Response
///
/// Returns `201 Created` with the new record:
/// ```json
/// {"id": 1, "name": "Jane Doe", "score": 0, "frames": [], "onFrame": 1, "gameOver": false}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing or empty name, duplicate player, or player
///   limit reached
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "name parameter required"));
    }

    match state.store.create(name).await {
        Ok(player) => Ok((StatusCode::CREATED, Json(player))),
        Err(e) => Err(api_error(StatusCode::BAD_REQUEST, e.to_string())),
    }
}

/// List all players with their current games.
pub async fn list_players(State(state): State<AppState>) -> Json<Vec<Player>> {
    Json(state.store.list().await)
}

/// Get a single player by name.
///
/// # Errors
///
/// - `404 Not Found`: no such player
pub async fn get_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Player>, ApiError> {
    state
        .store
        .get(&name)
        .await
        .map(Json)
        .map_err(|e| api_error(StatusCode::NOT_FOUND, e.to_string()))
}

/// Record one roll for a player and return the updated record.
///
/// # Request Body
///
/// ```json
/// {"roll": 7}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: roll outside 0-10, or more pins than the frame has
///   standing
/// - `404 Not Found`: no such player
/// - `409 Conflict`: the game is already over
pub async fn record_roll(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<RecordRollRequest>,
) -> Result<Json<Player>, ApiError> {
    let roll = match u8::try_from(request.roll) {
        Ok(roll) if roll <= 10 => roll,
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "roll must be a number between 0 and 10",
            ));
        }
    };

    let outcome = state
        .store
        .update(&name, |player| {
            if player.game.is_over() {
                return Err(RollError::GameAlreadyOver);
            }
            if !player.game.validate_roll(roll) {
                return Err(RollError::InvalidRoll);
            }
            player.game.apply_roll(roll)?;
            Ok(player.clone())
        })
        .await;

    match outcome {
        Ok(Ok(player)) => {
            debug!(
                player = %player.name,
                roll,
                score = player.game.total_score(),
                "recorded roll"
            );
            Ok(Json(player))
        }
        Ok(Err(RollError::GameAlreadyOver)) => Err(api_error(
            StatusCode::CONFLICT,
            RollError::GameAlreadyOver.to_string(),
        )),
        Ok(Err(e)) => Err(api_error(StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => Err(api_error(StatusCode::NOT_FOUND, e.to_string())),
    }
}

/// Reset a player's game to the empty starting state.
///
/// # Errors
///
/// - `404 Not Found`: no such player
pub async fn reset_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Player>, ApiError> {
    state
        .store
        .update(&name, |player| {
            player.game.reset();
            player.clone()
        })
        .await
        .map(Json)
        .map_err(|e| api_error(StatusCode::NOT_FOUND, e.to_string()))
}

/// Delete a player by name.
///
/// # Errors
///
/// - `404 Not Found`: no such player
pub async fn delete_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete(&name)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|e| api_error(StatusCode::NOT_FOUND, e.to_string()))
}
