use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::player_hole_score::{
    validate_position, CreatePlayerHoleScore, PlayerHoleScore, PlayerHoleScorePatch,
};

const SCORE_COLUMNS: &str = "id, game_id, player_number, hole_number, player_score, net_score, \
     gross_score, player_money, wolf_score, prox_score";

pub async fn list() -> Result<Vec<PlayerHoleScore>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let scores = sqlx::query_as::<_, PlayerHoleScore>(&format!(
        "SELECT {} FROM player_hole_scores",
        SCORE_COLUMNS
    ))
    .fetch_all(&pool)
    .await?;

    Ok(scores)
}

pub async fn get(id: Uuid) -> Result<PlayerHoleScore, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query_as::<_, PlayerHoleScore>(&format!(
        "SELECT {} FROM player_hole_scores WHERE id = $1",
        SCORE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("PlayerHoleScore {} not found", id)))
}

pub async fn create(create: CreatePlayerHoleScore) -> Result<Uuid, DatabaseError> {
    validate_position(create.player_number, create.hole_number)?;

    let pool = DatabaseManager::pool().await?;
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO player_hole_scores (id, game_id, player_number, hole_number, player_score, \
         net_score, gross_score, player_money, wolf_score, prox_score) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(id)
    .bind(create.game_id)
    .bind(create.player_number)
    .bind(create.hole_number)
    .bind(create.player_score)
    .bind(create.net_score)
    .bind(create.gross_score)
    .bind(create.player_money)
    .bind(create.wolf_score)
    .bind(create.prox_score)
    .execute(&pool)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    Ok(id)
}

pub async fn update(id: Uuid, patch: PlayerHoleScorePatch) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let mut score = sqlx::query_as::<_, PlayerHoleScore>(&format!(
        "SELECT {} FROM player_hole_scores WHERE id = $1 FOR UPDATE",
        SCORE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("PlayerHoleScore {} not found", id)))?;

    patch.apply(&mut score);

    sqlx::query(
        "UPDATE player_hole_scores SET player_score = $2, net_score = $3, gross_score = $4, \
         player_money = $5, wolf_score = $6, prox_score = $7 WHERE id = $1",
    )
    .bind(score.id)
    .bind(score.player_score)
    .bind(score.net_score)
    .bind(score.gross_score)
    .bind(score.player_money)
    .bind(score.wolf_score)
    .bind(score.prox_score)
    .execute(&mut *tx)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    tx.commit().await?;
    Ok(())
}

pub async fn delete(id: Uuid) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM player_hole_scores WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound(format!("PlayerHoleScore {} not found", id)));
    }
    Ok(())
}

pub async fn count() -> Result<i64, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM player_hole_scores")
        .fetch_one(&pool)
        .await?;
    Ok(count)
}
