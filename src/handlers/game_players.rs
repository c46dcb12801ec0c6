use axum::{extract::Path, http::StatusCode, response::Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::game_player::{CreateGamePlayer, GamePlayer, GamePlayerPatch};
use crate::database::repos::game_players;
use crate::error::ApiError;

/// GET /api/game-players - List all players across games
pub async fn list() -> Result<Json<Vec<GamePlayer>>, ApiError> {
    Ok(Json(game_players::list().await?))
}

/// GET /api/game-players/:id
pub async fn get_by_id(Path(id): Path<Uuid>) -> Result<Json<GamePlayer>, ApiError> {
    Ok(Json(game_players::get(id).await?))
}

/// POST /api/game-players - game_id and player_number are required
pub async fn create(
    Json(payload): Json<CreateGamePlayer>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = game_players::create(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/game-players/:id - Partial update
pub async fn update(
    Path(id): Path<Uuid>,
    Json(payload): Json<GamePlayerPatch>,
) -> Result<Json<Value>, ApiError> {
    game_players::update(id, payload).await?;
    Ok(Json(json!({ "message": "GamePlayer updated successfully" })))
}

/// DELETE /api/game-players/:id
pub async fn delete(Path(id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    game_players::delete(id).await?;
    Ok(Json(json!({ "message": "GamePlayer deleted successfully" })))
}
