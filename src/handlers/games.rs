use axum::{extract::Path, http::StatusCode, response::Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::game::{CreateGame, Game, GamePatch};
use crate::database::repos::games;
use crate::error::ApiError;

/// GET /api/games - List all games
pub async fn list() -> Result<Json<Vec<Game>>, ApiError> {
    Ok(Json(games::list().await?))
}

/// GET /api/games/:id - Get a single game
pub async fn get_by_id(Path(id): Path<Uuid>) -> Result<Json<Game>, ApiError> {
    Ok(Json(games::get(id).await?))
}

/// POST /api/games - Create a game, defaulting omitted fields
pub async fn create(
    Json(payload): Json<CreateGame>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = games::create(payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/games/:id - Partial update
pub async fn update(
    Path(id): Path<Uuid>,
    Json(payload): Json<GamePatch>,
) -> Result<Json<Value>, ApiError> {
    games::update(id, payload).await?;
    Ok(Json(json!({ "message": "Game updated successfully" })))
}

/// DELETE /api/games/:id - Delete the game and everything it owns
pub async fn delete(Path(id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    games::delete(id).await?;
    Ok(Json(json!({ "message": "Game deleted successfully" })))
}
