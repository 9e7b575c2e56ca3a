// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::Config,
    db,
    error::AppError,
    utils::{
        hash::{hash_password, verify_password},
        jwt::sign_jwt,
    },
    models::admin::LoginRequest,
};

/// Authenticates the site owner and returns a JWT token.
///
/// Unknown usernames and wrong passwords get the same answer.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let admin = db::admins::find_by_username(&pool, &payload.username)
        .await
        .map_err(|e| {
            tracing::error!("Login DB error: {:?}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::AuthError("Invalid credentials".to_string()))?;

    if !verify_password(&payload.password, &admin.password)? {
        tracing::warn!(username = %payload.username, "Rejected admin login");
        return Err(AppError::AuthError("Invalid credentials".to_string()));
    }

    let token = sign_jwt(
        admin.id,
        &admin.username,
        &config.jwt_secret,
        config.jwt_expiration,
    )?;

    Ok(Json(json!({
        "token": token,
        "type": "Bearer",
    })))
}

/// Creates the configured admin account if it does not exist yet.
/// Returns whether an account was created.
pub async fn seed_admin(pool: &SqlitePool, config: &Config) -> Result<bool, AppError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        return Ok(false);
    };

    if db::admins::find_by_username(pool, username).await?.is_some() {
        return Ok(false);
    }

    tracing::info!("Seeding admin user: {}", username);
    let hashed_password = hash_password(password)?;
    db::admins::insert(pool, username, &hashed_password)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                AppError::Conflict(format!("Admin '{}' already exists", username))
            } else {
                AppError::from(e)
            }
        })?;
    tracing::info!("Admin user created successfully.");
    Ok(true)
}
