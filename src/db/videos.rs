// src/db/videos.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    db::{push_page, push_search},
    models::video::{NewVideo, Video, VideoListParams},
};

const SELECT: &str = "SELECT id, title, url, description, created_at FROM videos";

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(&format!("{} ORDER BY id", SELECT))
        .fetch_all(pool)
        .await
}

pub async fn search(pool: &SqlitePool, params: &VideoListParams) -> Result<Vec<Video>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT);
    builder.push(" WHERE 1 = 1");
    push_search(&mut builder, &["title", "url"], params.q.as_deref());

    if let Some(from) = params.created_from {
        builder.push(" AND created_at >= ");
        builder.push_bind(from);
    }
    if let Some(to) = params.created_to {
        builder.push(" AND created_at <= ");
        builder.push_bind(to);
    }

    builder.push(" ORDER BY created_at DESC, id DESC");
    push_page(&mut builder, params.limit, params.offset);

    builder.build_query_as::<Video>().fetch_all(pool).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(&format!("{} WHERE id = ?", SELECT))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &SqlitePool, new: &NewVideo) -> Result<Video, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        INSERT INTO videos (title, url, description, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, title, url, description, created_at
        "#,
    )
    .bind(&new.title)
    .bind(&new.url)
    .bind(&new.description)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
}

/// Replaces the editable columns; `created_at` is left untouched.
pub async fn update(pool: &SqlitePool, id: i64, new: &NewVideo) -> Result<Option<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        UPDATE videos
        SET title = ?, url = ?, description = ?
        WHERE id = ?
        RETURNING id, title, url, description, created_at
        "#,
    )
    .bind(&new.title)
    .bind(&new.url)
    .bind(&new.description)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM videos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
