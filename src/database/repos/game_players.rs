use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::game_player::{
    validate_player_number, CreateGamePlayer, GamePlayer, GamePlayerPatch,
};

const PLAYER_COLUMNS: &str = "id, game_id, player_number, player_name, is_activated, handicap, \
     wolf_birdie_points, wolf_eagle_points, wolf_non_eagle_points, non_wolf_birdie_points";

pub async fn list() -> Result<Vec<GamePlayer>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let players =
        sqlx::query_as::<_, GamePlayer>(&format!("SELECT {} FROM game_players", PLAYER_COLUMNS))
            .fetch_all(&pool)
            .await?;

    Ok(players)
}

pub async fn get(id: Uuid) -> Result<GamePlayer, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query_as::<_, GamePlayer>(&format!(
        "SELECT {} FROM game_players WHERE id = $1",
        PLAYER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("GamePlayer {} not found", id)))
}

pub async fn create(create: CreateGamePlayer) -> Result<Uuid, DatabaseError> {
    validate_player_number(create.player_number)?;

    let pool = DatabaseManager::pool().await?;
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO game_players (id, game_id, player_number, player_name, is_activated, \
         handicap, wolf_birdie_points, wolf_eagle_points, wolf_non_eagle_points, \
         non_wolf_birdie_points) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(id)
    .bind(create.game_id)
    .bind(create.player_number)
    .bind(&create.player_name)
    .bind(create.is_activated)
    .bind(create.handicap)
    .bind(create.wolf_birdie_points)
    .bind(create.wolf_eagle_points)
    .bind(create.wolf_non_eagle_points)
    .bind(create.non_wolf_birdie_points)
    .execute(&pool)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    Ok(id)
}

pub async fn update(id: Uuid, patch: GamePlayerPatch) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let mut player = sqlx::query_as::<_, GamePlayer>(&format!(
        "SELECT {} FROM game_players WHERE id = $1 FOR UPDATE",
        PLAYER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("GamePlayer {} not found", id)))?;

    patch.apply(&mut player);

    sqlx::query(
        "UPDATE game_players SET player_name = $2, is_activated = $3, handicap = $4, \
         wolf_birdie_points = $5, wolf_eagle_points = $6, wolf_non_eagle_points = $7, \
         non_wolf_birdie_points = $8 WHERE id = $1",
    )
    .bind(player.id)
    .bind(&player.player_name)
    .bind(player.is_activated)
    .bind(player.handicap)
    .bind(player.wolf_birdie_points)
    .bind(player.wolf_eagle_points)
    .bind(player.wolf_non_eagle_points)
    .bind(player.non_wolf_birdie_points)
    .execute(&mut *tx)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    tx.commit().await?;
    Ok(())
}

pub async fn delete(id: Uuid) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM game_players WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound(format!("GamePlayer {} not found", id)));
    }
    Ok(())
}

pub async fn count() -> Result<i64, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM game_players")
        .fetch_one(&pool)
        .await?;
    Ok(count)
}
