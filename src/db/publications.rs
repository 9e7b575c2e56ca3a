// src/db/publications.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    db::{push_page, push_search},
    models::publication::{NewPublication, Publication, PublicationListParams},
};

const SELECT: &str = "SELECT id, title, description, journal, date, link, image, tags FROM publications";

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Publication>, sqlx::Error> {
    sqlx::query_as::<_, Publication>(&format!("{} ORDER BY id", SELECT))
        .fetch_all(pool)
        .await
}

/// Admin listing: search on title/journal, optional date window, newest first.
pub async fn search(
    pool: &SqlitePool,
    params: &PublicationListParams,
) -> Result<Vec<Publication>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT);
    builder.push(" WHERE 1 = 1");
    push_search(&mut builder, &["title", "journal"], params.q.as_deref());

    if let Some(from) = params.date_from {
        builder.push(" AND date >= ");
        builder.push_bind(from);
    }
    if let Some(to) = params.date_to {
        builder.push(" AND date <= ");
        builder.push_bind(to);
    }

    builder.push(" ORDER BY date DESC, id DESC");
    push_page(&mut builder, params.limit, params.offset);

    builder
        .build_query_as::<Publication>()
        .fetch_all(pool)
        .await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Publication>, sqlx::Error> {
    sqlx::query_as::<_, Publication>(&format!("{} WHERE id = ?", SELECT))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &SqlitePool, new: &NewPublication) -> Result<Publication, sqlx::Error> {
    sqlx::query_as::<_, Publication>(
        r#"
        INSERT INTO publications (title, description, journal, date, link, image, tags)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, description, journal, date, link, image, tags
        "#,
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.journal)
    .bind(new.date)
    .bind(&new.link)
    .bind(&new.image)
    .bind(&new.tags)
    .fetch_one(pool)
    .await
}

/// Replaces every editable column. `None` when the id is unknown.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    new: &NewPublication,
) -> Result<Option<Publication>, sqlx::Error> {
    sqlx::query_as::<_, Publication>(
        r#"
        UPDATE publications
        SET title = ?, description = ?, journal = ?, date = ?, link = ?, image = ?, tags = ?
        WHERE id = ?
        RETURNING id, title, description, journal, date, link, image, tags
        "#,
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.journal)
    .bind(new.date)
    .bind(&new.link)
    .bind(&new.image)
    .bind(&new.tags)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM publications WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
