// src/db/profile.rs

use sqlx::SqlitePool;

use crate::models::profile::Profile;

const COLUMNS: &str = "name, bio, photo, resume, twitter, facebook, linkedin, instagram";

/// The stored profile, if the owner has saved one.
pub async fn get(pool: &SqlitePool) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(&format!("SELECT {} FROM profile WHERE id = 1", COLUMNS))
        .fetch_optional(pool)
        .await
}

/// The stored profile, or the built-in placeholder when none exists.
pub async fn get_or_default(pool: &SqlitePool) -> Result<Profile, sqlx::Error> {
    Ok(get(pool).await?.unwrap_or_else(Profile::placeholder))
}

/// Writes the singleton row, replacing whatever was there.
pub async fn upsert(pool: &SqlitePool, profile: &Profile) -> Result<Profile, sqlx::Error> {
    sqlx::query_as::<_, Profile>(&format!(
        r#"
        INSERT INTO profile (id, {cols}, updated_at)
        VALUES (1, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE SET
            name = excluded.name,
            bio = excluded.bio,
            photo = excluded.photo,
            resume = excluded.resume,
            twitter = excluded.twitter,
            facebook = excluded.facebook,
            linkedin = excluded.linkedin,
            instagram = excluded.instagram,
            updated_at = excluded.updated_at
        RETURNING {cols}
        "#,
        cols = COLUMNS
    ))
    .bind(&profile.name)
    .bind(&profile.bio)
    .bind(&profile.photo)
    .bind(&profile.resume)
    .bind(&profile.twitter)
    .bind(&profile.facebook)
    .bind(&profile.linkedin)
    .bind(&profile.instagram)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
}

/// Removes the stored profile. Returns whether a row existed.
pub async fn delete(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM profile WHERE id = 1")
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
