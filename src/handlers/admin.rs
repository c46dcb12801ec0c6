//! JSON console over the six entity tables, behind the same auth gate as
//! the resource endpoints. A thin read/write layer over the repositories;
//! it adds no business logic of its own.

use axum::{extract::Path, response::Json};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::user::UserPatch;
use crate::database::repos::{game_hole_data, game_players, games, player_hole_scores, saved_game_meta};
use crate::database::service;
use crate::error::ApiError;

/// GET /admin - Table index with row counts
pub async fn index() -> Result<Json<Value>, ApiError> {
    Ok(Json(json!({
        "tables": {
            "games": games::count().await?,
            "saved-game-meta": saved_game_meta::count().await?,
            "game-hole-data": game_hole_data::count().await?,
            "game-players": game_players::count().await?,
            "player-hole-scores": player_hole_scores::count().await?,
            "users": service::count_users().await?,
            "roles": service::count_roles().await?,
        }
    })))
}

/// GET /admin/:table - List every row of one table
pub async fn list_table(Path(table): Path<String>) -> Result<Json<Value>, ApiError> {
    match table.as_str() {
        "games" => rows_to_json(games::list().await?),
        "saved-game-meta" => rows_to_json(saved_game_meta::list().await?),
        "game-hole-data" => rows_to_json(game_hole_data::list().await?),
        "game-players" => rows_to_json(game_players::list().await?),
        "player-hole-scores" => rows_to_json(player_hole_scores::list().await?),
        "users" => rows_to_json(service::list_users().await?),
        "roles" => rows_to_json(service::list_roles().await?),
        _ => Err(ApiError::not_found(format!("Unknown table: {}", table))),
    }
}

/// PUT /admin/:table/:id - Edit one row through the entity's patch type
pub async fn update_row(
    Path((table, id)): Path<(String, Uuid)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    match table.as_str() {
        "games" => games::update(id, parse_patch(body)?).await?,
        "saved-game-meta" => saved_game_meta::update(id, parse_patch(body)?).await?,
        "game-hole-data" => game_hole_data::update(id, parse_patch(body)?).await?,
        "game-players" => game_players::update(id, parse_patch(body)?).await?,
        "player-hole-scores" => player_hole_scores::update(id, parse_patch(body)?).await?,
        "users" => service::update_user(id, parse_patch::<UserPatch>(body)?).await?,
        "roles" => return Err(ApiError::bad_request("Table is read-only in the console")),
        _ => return Err(ApiError::not_found(format!("Unknown table: {}", table))),
    }
    Ok(Json(json!({ "message": "Row updated successfully" })))
}

/// DELETE /admin/:table/:id - Remove one row (game-domain tables only)
pub async fn delete_row(Path((table, id)): Path<(String, Uuid)>) -> Result<Json<Value>, ApiError> {
    match table.as_str() {
        "games" => games::delete(id).await?,
        "saved-game-meta" => saved_game_meta::delete(id).await?,
        "game-hole-data" => game_hole_data::delete(id).await?,
        "game-players" => game_players::delete(id).await?,
        "player-hole-scores" => player_hole_scores::delete(id).await?,
        "users" | "roles" => {
            return Err(ApiError::bad_request("Table is read-only in the console"))
        }
        _ => return Err(ApiError::not_found(format!("Unknown table: {}", table))),
    }
    Ok(Json(json!({ "message": "Row deleted successfully" })))
}

fn rows_to_json<T: Serialize>(rows: Vec<T>) -> Result<Json<Value>, ApiError> {
    serde_json::to_value(rows).map(Json).map_err(|e| {
        tracing::error!("Failed to serialize admin rows: {}", e);
        ApiError::internal_server_error("Failed to format response")
    })
}

fn parse_patch<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid patch payload: {}", e)))
}
