// src/db/admins.rs

use sqlx::SqlitePool;

use crate::models::admin::Admin;

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>(
        "SELECT id, username, password, created_at FROM admins WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Inserts an admin with an already-hashed password.
pub async fn insert(pool: &SqlitePool, username: &str, password_hash: &str) -> Result<Admin, sqlx::Error> {
    sqlx::query_as::<_, Admin>(
        r#"
        INSERT INTO admins (username, password, created_at)
        VALUES (?, ?, ?)
        RETURNING id, username, password, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
}
