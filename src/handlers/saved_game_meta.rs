use axum::{extract::Path, http::StatusCode, response::Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::saved_game_meta::{
    CreateSavedGameMeta, SavedGameMeta, SavedGameMetaPatch,
};
use crate::database::repos::saved_game_meta;
use crate::error::ApiError;

/// GET /api/saved-game-meta - List saved-game bookmarks
pub async fn list() -> Result<Json<Vec<SavedGameMeta>>, ApiError> {
    Ok(Json(saved_game_meta::list().await?))
}

/// GET /api/saved-game-meta/:id
pub async fn get_by_id(Path(id): Path<Uuid>) -> Result<Json<SavedGameMeta>, ApiError> {
    Ok(Json(saved_game_meta::get(id).await?))
}

/// POST /api/saved-game-meta - The client supplies the id (an existing
/// game's id) and all three other fields; nothing is defaulted.
pub async fn create(
    Json(payload): Json<CreateSavedGameMeta>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = saved_game_meta::create(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/saved-game-meta/:id - Partial update
pub async fn update(
    Path(id): Path<Uuid>,
    Json(payload): Json<SavedGameMetaPatch>,
) -> Result<Json<Value>, ApiError> {
    saved_game_meta::update(id, payload).await?;
    Ok(Json(json!({ "message": "SavedGameMeta updated successfully" })))
}

/// DELETE /api/saved-game-meta/:id
pub async fn delete(Path(id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    saved_game_meta::delete(id).await?;
    Ok(Json(json!({ "message": "SavedGameMeta deleted successfully" })))
}
