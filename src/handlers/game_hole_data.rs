use axum::{extract::Path, http::StatusCode, response::Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::game_hole_data::{
    CreateGameHoleData, GameHoleData, GameHoleDataPatch,
};
use crate::database::repos::game_hole_data;
use crate::error::ApiError;

/// GET /api/game-hole-data - List hole configuration across games
pub async fn list() -> Result<Json<Vec<GameHoleData>>, ApiError> {
    Ok(Json(game_hole_data::list().await?))
}

/// GET /api/game-hole-data/:id
pub async fn get_by_id(Path(id): Path<Uuid>) -> Result<Json<GameHoleData>, ApiError> {
    Ok(Json(game_hole_data::get(id).await?))
}

/// POST /api/game-hole-data - game_id and hole_number are required
pub async fn create(
    Json(payload): Json<CreateGameHoleData>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = game_hole_data::create(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/game-hole-data/:id - Partial update
pub async fn update(
    Path(id): Path<Uuid>,
    Json(payload): Json<GameHoleDataPatch>,
) -> Result<Json<Value>, ApiError> {
    game_hole_data::update(id, payload).await?;
    Ok(Json(json!({ "message": "GameHoleData updated successfully" })))
}

/// DELETE /api/game-hole-data/:id
pub async fn delete(Path(id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    game_hole_data::delete(id).await?;
    Ok(Json(json!({ "message": "GameHoleData deleted successfully" })))
}
