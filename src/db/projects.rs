// src/db/projects.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    db::{push_page, push_search},
    models::project::{NewProject, Project, ProjectListParams},
};

const SELECT: &str = "SELECT id, title, description, image, link, language FROM projects";

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(&format!("{} ORDER BY id", SELECT))
        .fetch_all(pool)
        .await
}

pub async fn search(pool: &SqlitePool, params: &ProjectListParams) -> Result<Vec<Project>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT);
    builder.push(" WHERE 1 = 1");
    push_search(&mut builder, &["title"], params.q.as_deref());
    builder.push(" ORDER BY id");
    push_page(&mut builder, params.limit, params.offset);

    builder.build_query_as::<Project>().fetch_all(pool).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(&format!("{} WHERE id = ?", SELECT))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &SqlitePool, new: &NewProject) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (title, description, image, link, language)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, description, image, link, language
        "#,
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.image)
    .bind(&new.link)
    .bind(&new.language)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &SqlitePool, id: i64, new: &NewProject) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET title = ?, description = ?, image = ?, link = ?, language = ?
        WHERE id = ?
        RETURNING id, title, description, image, link, language
        "#,
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.image)
    .bind(&new.link)
    .bind(&new.language)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
