use axum::{
    extract::{ConnectInfo, Extension},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::database::service;
use crate::error::ApiError;
use crate::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// GET /auth/login - Where unauthenticated visitors are redirected. The
/// form itself is client-side; this names the contract.
pub async fn login_form() -> Json<Value> {
    Json(json!({
        "message": "POST {\"email\", \"password\"} to /auth/login to receive a bearer token"
    }))
}

/// POST /auth/login - Verify credentials and issue a bearer token
pub async fn login(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = service::find_user_by_email(&payload.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    if !user.active {
        return Err(ApiError::forbidden("Account is disabled"));
    }

    let valid = bcrypt::verify(&payload.password, &user.password).map_err(|e| {
        tracing::error!("bcrypt verification failed: {}", e);
        ApiError::internal_server_error("Credential check failed")
    })?;
    if !valid {
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    service::record_login(user.id, &addr.ip().to_string()).await?;

    let role = service::find_user_role(user.id)
        .await?
        .unwrap_or_else(|| "user".to_string());

    let claims = Claims::new(user.id, user.email.clone(), role.clone());
    let token = generate_jwt(claims).map_err(|e| {
        tracing::error!("JWT generation failed: {}", e);
        ApiError::internal_server_error("Token generation failed")
    })?;

    tracing::info!("User {} logged in", user.email);

    Ok(Json(json!({
        "token": token,
        "user": {
            "id": user.id,
            "email": user.email,
            "role": role,
        },
        "expires_in": config::config().security.jwt_expiry_hours * 3600,
    })))
}

/// POST /auth/register - Create a credential record (when enabled)
pub async fn register(
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if !config::config().security.registerable {
        return Err(ApiError::forbidden("Registration is disabled"));
    }
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("bcrypt hashing failed: {}", e);
        ApiError::internal_server_error("Credential hashing failed")
    })?;

    let id = service::create_user(&payload.email, &hash).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// GET /api/auth/whoami - Claims of the authenticated user
pub async fn whoami(Extension(user): Extension<AuthUser>) -> Json<Value> {
    Json(json!({
        "id": user.user_id,
        "email": user.email,
        "role": user.role,
    }))
}

/// DELETE /api/auth/session - Logout acknowledgement; the bearer token is
/// discarded client-side.
pub async fn logout(Extension(user): Extension<AuthUser>) -> Json<Value> {
    tracing::info!("User {} logged out", user.email);
    Json(json!({ "message": "Logged out successfully" }))
}
