use chrono::Utc;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::game::{CreateGame, Game, GamePatch};

const GAME_COLUMNS: &str = "id, game_name, hole, last_saved, dollars, total_dollars, \
     is_continuing_game, pressed_button, wolf, wolf_birdie_points, wolf_eagle_points, \
     wolf_non_eagle_points, non_wolf_birdie_points, prox, created_at, updated_at";

pub async fn list() -> Result<Vec<Game>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let games = sqlx::query_as::<_, Game>(&format!("SELECT {} FROM games", GAME_COLUMNS))
        .fetch_all(&pool)
        .await?;

    Ok(games)
}

pub async fn get(id: Uuid) -> Result<Game, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query_as::<_, Game>(&format!("SELECT {} FROM games WHERE id = $1", GAME_COLUMNS))
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("Game {} not found", id)))
}

pub async fn create(create: CreateGame) -> Result<Uuid, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO games (id, game_name, hole, dollars, total_dollars, is_continuing_game, \
         pressed_button, wolf, wolf_birdie_points, wolf_eagle_points, wolf_non_eagle_points, \
         non_wolf_birdie_points, prox) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(id)
    .bind(&create.game_name)
    .bind(create.hole)
    .bind(create.dollars)
    .bind(create.total_dollars)
    .bind(create.is_continuing_game)
    .bind(create.pressed_button)
    .bind(create.wolf)
    .bind(create.wolf_birdie_points)
    .bind(create.wolf_eagle_points)
    .bind(create.wolf_non_eagle_points)
    .bind(create.non_wolf_birdie_points)
    .bind(create.prox)
    .execute(&pool)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    Ok(id)
}

/// Read-modify-write under a row lock. `updated_at` refreshes on every
/// successful update, even when the patch is empty.
pub async fn update(id: Uuid, patch: GamePatch) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let mut game = sqlx::query_as::<_, Game>(&format!(
        "SELECT {} FROM games WHERE id = $1 FOR UPDATE",
        GAME_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("Game {} not found", id)))?;

    patch.apply(&mut game);
    game.updated_at = Utc::now();

    sqlx::query(
        "UPDATE games SET game_name = $2, hole = $3, dollars = $4, total_dollars = $5, \
         is_continuing_game = $6, pressed_button = $7, wolf = $8, wolf_birdie_points = $9, \
         wolf_eagle_points = $10, wolf_non_eagle_points = $11, non_wolf_birdie_points = $12, \
         prox = $13, updated_at = $14 WHERE id = $1",
    )
    .bind(game.id)
    .bind(&game.game_name)
    .bind(game.hole)
    .bind(game.dollars)
    .bind(game.total_dollars)
    .bind(game.is_continuing_game)
    .bind(game.pressed_button)
    .bind(game.wolf)
    .bind(game.wolf_birdie_points)
    .bind(game.wolf_eagle_points)
    .bind(game.wolf_non_eagle_points)
    .bind(game.non_wolf_birdie_points)
    .bind(game.prox)
    .bind(game.updated_at)
    .execute(&mut *tx)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    tx.commit().await?;
    Ok(())
}

/// Deleting a game removes its dependents in one atomic unit. The fan-out is
/// issued explicitly, leaves first, so the guarantee holds on any store.
pub async fn delete(id: Uuid) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM player_hole_scores WHERE game_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM game_players WHERE game_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM game_hole_data WHERE game_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM saved_game_meta WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM games WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        // Dropping the transaction rolls back the dependent deletes
        return Err(DatabaseError::NotFound(format!("Game {} not found", id)));
    }

    tx.commit().await?;
    Ok(())
}

pub async fn count() -> Result<i64, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM games")
        .fetch_one(&pool)
        .await?;
    Ok(count)
}
