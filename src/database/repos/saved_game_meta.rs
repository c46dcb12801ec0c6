use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::saved_game_meta::{
    CreateSavedGameMeta, SavedGameMeta, SavedGameMetaPatch,
};

pub async fn list() -> Result<Vec<SavedGameMeta>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let metas =
        sqlx::query_as::<_, SavedGameMeta>("SELECT id, name, saved_at, hole FROM saved_game_meta")
            .fetch_all(&pool)
            .await?;

    Ok(metas)
}

pub async fn get(id: Uuid) -> Result<SavedGameMeta, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query_as::<_, SavedGameMeta>(
        "SELECT id, name, saved_at, hole FROM saved_game_meta WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("SavedGameMeta {} not found", id)))
}

/// The client supplies the id; it must be an existing game's id. A dangling
/// id or a second meta row for the same game surfaces as the store's
/// constraint error.
pub async fn create(create: CreateSavedGameMeta) -> Result<Uuid, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query("INSERT INTO saved_game_meta (id, name, saved_at, hole) VALUES ($1, $2, $3, $4)")
        .bind(create.id)
        .bind(&create.name)
        .bind(create.saved_at)
        .bind(create.hole)
        .execute(&pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

    Ok(create.id)
}

pub async fn update(id: Uuid, patch: SavedGameMetaPatch) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let mut meta = sqlx::query_as::<_, SavedGameMeta>(
        "SELECT id, name, saved_at, hole FROM saved_game_meta WHERE id = $1 FOR UPDATE",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("SavedGameMeta {} not found", id)))?;

    patch.apply(&mut meta);

    sqlx::query("UPDATE saved_game_meta SET name = $2, saved_at = $3, hole = $4 WHERE id = $1")
        .bind(meta.id)
        .bind(&meta.name)
        .bind(meta.saved_at)
        .bind(meta.hole)
        .execute(&mut *tx)
        .await
        .map_err(DatabaseError::from_sqlx)?;

    tx.commit().await?;
    Ok(())
}

pub async fn delete(id: Uuid) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM saved_game_meta WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound(format!("SavedGameMeta {} not found", id)));
    }
    Ok(())
}

pub async fn count() -> Result<i64, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM saved_game_meta")
        .fetch_one(&pool)
        .await?;
    Ok(count)
}
