// src/db/educations.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    db::{push_page, push_search},
    models::education::{Education, EducationListParams, NewEducation},
};

const SELECT: &str = "SELECT id, degree, institute, start_year, end_year FROM educations";

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Education>, sqlx::Error> {
    sqlx::query_as::<_, Education>(&format!("{} ORDER BY id", SELECT))
        .fetch_all(pool)
        .await
}

pub async fn search(
    pool: &SqlitePool,
    params: &EducationListParams,
) -> Result<Vec<Education>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT);
    builder.push(" WHERE 1 = 1");
    push_search(&mut builder, &["degree", "institute"], params.q.as_deref());

    if let Some(institute) = params.institute.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        builder.push(" AND institute = ");
        builder.push_bind(institute.to_string());
    }

    builder.push(" ORDER BY id");
    push_page(&mut builder, params.limit, params.offset);

    builder.build_query_as::<Education>().fetch_all(pool).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Education>, sqlx::Error> {
    sqlx::query_as::<_, Education>(&format!("{} WHERE id = ?", SELECT))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &SqlitePool, new: &NewEducation) -> Result<Education, sqlx::Error> {
    sqlx::query_as::<_, Education>(
        r#"
        INSERT INTO educations (degree, institute, start_year, end_year)
        VALUES (?, ?, ?, ?)
        RETURNING id, degree, institute, start_year, end_year
        "#,
    )
    .bind(&new.degree)
    .bind(&new.institute)
    .bind(new.start_year)
    .bind(new.end_year)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    new: &NewEducation,
) -> Result<Option<Education>, sqlx::Error> {
    sqlx::query_as::<_, Education>(
        r#"
        UPDATE educations
        SET degree = ?, institute = ?, start_year = ?, end_year = ?
        WHERE id = ?
        RETURNING id, degree, institute, start_year, end_year
        "#,
    )
    .bind(&new.degree)
    .bind(&new.institute)
    .bind(new.start_year)
    .bind(new.end_year)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM educations WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
