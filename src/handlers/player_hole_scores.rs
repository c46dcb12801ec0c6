use axum::{extract::Path, http::StatusCode, response::Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::player_hole_score::{
    CreatePlayerHoleScore, PlayerHoleScore, PlayerHoleScorePatch,
};
use crate::database::repos::player_hole_scores;
use crate::error::ApiError;

/// GET /api/player-hole-scores - List per-hole results across games
pub async fn list() -> Result<Json<Vec<PlayerHoleScore>>, ApiError> {
    Ok(Json(player_hole_scores::list().await?))
}

/// GET /api/player-hole-scores/:id
pub async fn get_by_id(Path(id): Path<Uuid>) -> Result<Json<PlayerHoleScore>, ApiError> {
    Ok(Json(player_hole_scores::get(id).await?))
}

/// POST /api/player-hole-scores - game_id, player_number and hole_number are required
pub async fn create(
    Json(payload): Json<CreatePlayerHoleScore>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = player_hole_scores::create(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/player-hole-scores/:id - Partial update (score corrections)
pub async fn update(
    Path(id): Path<Uuid>,
    Json(payload): Json<PlayerHoleScorePatch>,
) -> Result<Json<Value>, ApiError> {
    player_hole_scores::update(id, payload).await?;
    Ok(Json(json!({ "message": "PlayerHoleScore updated successfully" })))
}

/// DELETE /api/player-hole-scores/:id
pub async fn delete(Path(id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    player_hole_scores::delete(id).await?;
    Ok(Json(json!({ "message": "PlayerHoleScore deleted successfully" })))
}
