// src/db/feedback.rs
//
// Feedback rows are insert-only; there is no update.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    db::{push_page, push_search},
    models::feedback::{Feedback, FeedbackListParams, NewFeedback},
};

const SELECT: &str = "SELECT id, name, email, whatsapp, message, created_at FROM feedback";

/// Stores a submission with a server-assigned timestamp.
pub async fn insert(pool: &SqlitePool, new: &NewFeedback) -> Result<Feedback, sqlx::Error> {
    sqlx::query_as::<_, Feedback>(
        r#"
        INSERT INTO feedback (name, email, whatsapp, message, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, name, email, whatsapp, message, created_at
        "#,
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.whatsapp)
    .bind(&new.message)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn search(pool: &SqlitePool, params: &FeedbackListParams) -> Result<Vec<Feedback>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT);
    builder.push(" WHERE 1 = 1");
    push_search(&mut builder, &["name", "email"], params.q.as_deref());

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

    builder.build_query_as::<Feedback>().fetch_all(pool).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Feedback>, sqlx::Error> {
    sqlx::query_as::<_, Feedback>(&format!("{} WHERE id = ?", SELECT))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM feedback")
        .fetch_one(pool)
        .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM feedback WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
