use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::game_hole_data::{
    validate_hole_number, CreateGameHoleData, GameHoleData, GameHoleDataPatch,
};

const HOLE_DATA_COLUMNS: &str = "id, game_id, hole_number, hole_dollars, activated_dollars, \
     pressed_count, pressed_pushed_toggle, alone_pushed, roll_pushed, re_roll_pushed, \
     wolf_hole, hole_handicap, hole_par, prox_array";

pub async fn list() -> Result<Vec<GameHoleData>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let rows =
        sqlx::query_as::<_, GameHoleData>(&format!("SELECT {} FROM game_hole_data", HOLE_DATA_COLUMNS))
            .fetch_all(&pool)
            .await?;

    Ok(rows)
}

pub async fn get(id: Uuid) -> Result<GameHoleData, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query_as::<_, GameHoleData>(&format!(
        "SELECT {} FROM game_hole_data WHERE id = $1",
        HOLE_DATA_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("GameHoleData {} not found", id)))
}

/// Uniqueness of (game_id, hole_number) and the game foreign key are left to
/// the store's constraints; the range rule is checked before the insert.
pub async fn create(create: CreateGameHoleData) -> Result<Uuid, DatabaseError> {
    validate_hole_number(create.hole_number)?;

    let pool = DatabaseManager::pool().await?;
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO game_hole_data (id, game_id, hole_number, hole_dollars, activated_dollars, \
         pressed_count, pressed_pushed_toggle, alone_pushed, roll_pushed, re_roll_pushed, \
         wolf_hole, hole_handicap, hole_par, prox_array) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
    )
    .bind(id)
    .bind(create.game_id)
    .bind(create.hole_number)
    .bind(create.hole_dollars)
    .bind(create.activated_dollars)
    .bind(create.pressed_count)
    .bind(create.pressed_pushed_toggle)
    .bind(create.alone_pushed)
    .bind(create.roll_pushed)
    .bind(create.re_roll_pushed)
    .bind(create.wolf_hole)
    .bind(create.hole_handicap)
    .bind(create.hole_par)
    .bind(create.prox_array)
    .execute(&pool)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    Ok(id)
}

pub async fn update(id: Uuid, patch: GameHoleDataPatch) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let mut data = sqlx::query_as::<_, GameHoleData>(&format!(
        "SELECT {} FROM game_hole_data WHERE id = $1 FOR UPDATE",
        HOLE_DATA_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("GameHoleData {} not found", id)))?;

    patch.apply(&mut data);

    sqlx::query(
        "UPDATE game_hole_data SET hole_dollars = $2, activated_dollars = $3, pressed_count = $4, \
         pressed_pushed_toggle = $5, alone_pushed = $6, roll_pushed = $7, re_roll_pushed = $8, \
         wolf_hole = $9, hole_handicap = $10, hole_par = $11, prox_array = $12 WHERE id = $1",
    )
    .bind(data.id)
    .bind(data.hole_dollars)
    .bind(data.activated_dollars)
    .bind(data.pressed_count)
    .bind(data.pressed_pushed_toggle)
    .bind(data.alone_pushed)
    .bind(data.roll_pushed)
    .bind(data.re_roll_pushed)
    .bind(data.wolf_hole)
    .bind(data.hole_handicap)
    .bind(data.hole_par)
    .bind(data.prox_array)
    .execute(&mut *tx)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    tx.commit().await?;
    Ok(())
}

pub async fn delete(id: Uuid) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let result = sqlx::query("DELETE FROM game_hole_data WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound(format!("GameHoleData {} not found", id)));
    }
    Ok(())
}

pub async fn count() -> Result<i64, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM game_hole_data")
        .fetch_one(&pool)
        .await?;
    Ok(count)
}
