use chrono::Utc;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::user::{Role, User, UserPatch};

const USER_COLUMNS: &str = "id, email, username, password, last_login_at, current_login_at, \
     last_login_ip, current_login_ip, login_count, active, fs_uniquifier, confirmed_at";

/// Look up a user by email for credential checks
pub async fn find_user_by_email(email: &str) -> Result<Option<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE email = $1",
        USER_COLUMNS
    ))
    .bind(email)
    .fetch_optional(&pool)
    .await?;

    Ok(user)
}

/// Insert a new user with a pre-hashed password. Email uniqueness is the
/// store's constraint.
pub async fn create_user(email: &str, password_hash: &str) -> Result<Uuid, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO users (id, email, password, fs_uniquifier) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(Uuid::new_v4().simple().to_string())
    .execute(&pool)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    Ok(id)
}

/// Shift current login metadata to the "last" columns and record the new
/// login (trackable login bookkeeping).
pub async fn record_login(user_id: Uuid, ip: &str) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    sqlx::query(
        "UPDATE users SET last_login_at = current_login_at, last_login_ip = current_login_ip, \
         current_login_at = $2, current_login_ip = $3, login_count = login_count + 1 \
         WHERE id = $1",
    )
    .bind(user_id)
    .bind(Utc::now())
    .bind(ip)
    .execute(&pool)
    .await?;

    Ok(())
}

/// Primary role of a user (first assigned role name), if any
pub async fn find_user_role(user_id: Uuid) -> Result<Option<String>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let role = sqlx::query_scalar::<_, Option<String>>(
        "SELECT r.name FROM roles r JOIN roles_users ru ON ru.role_id = r.id \
         WHERE ru.user_id = $1 LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(&pool)
    .await?;

    Ok(role.flatten())
}

pub async fn list_users() -> Result<Vec<User>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let users = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users", USER_COLUMNS))
        .fetch_all(&pool)
        .await?;

    Ok(users)
}

pub async fn update_user(id: Uuid, patch: UserPatch) -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let mut user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE id = $1 FOR UPDATE",
        USER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| DatabaseError::NotFound(format!("User {} not found", id)))?;

    patch.apply(&mut user);

    sqlx::query("UPDATE users SET email = $2, username = $3, active = $4 WHERE id = $1")
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.username)
        .bind(user.active)
        .execute(&mut *tx)
        .await
        .map_err(DatabaseError::from_sqlx)?;

    tx.commit().await?;
    Ok(())
}

pub async fn list_roles() -> Result<Vec<Role>, DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let roles = sqlx::query_as::<_, Role>("SELECT id, name, description FROM roles")
        .fetch_all(&pool)
        .await?;

    Ok(roles)
}

pub async fn count_users() -> Result<i64, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM users")
        .fetch_one(&pool)
        .await?;
    Ok(count)
}

pub async fn count_roles() -> Result<i64, DatabaseError> {
    let pool = DatabaseManager::pool().await?;
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM roles")
        .fetch_one(&pool)
        .await?;
    Ok(count)
}
