// src/db/skills.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    db::{push_page, push_search},
    models::skill::{Skill, SkillListParams},
};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>("SELECT id, name FROM skills ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn search(pool: &SqlitePool, params: &SkillListParams) -> Result<Vec<Skill>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT id, name FROM skills WHERE 1 = 1");
    push_search(&mut builder, &["name"], params.q.as_deref());
    builder.push(" ORDER BY id");
    push_page(&mut builder, params.limit, params.offset);

    builder.build_query_as::<Skill>().fetch_all(pool).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>("SELECT id, name FROM skills WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &SqlitePool, name: &str) -> Result<Skill, sqlx::Error> {
    sqlx::query_as::<_, Skill>("INSERT INTO skills (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await
}

pub async fn update(pool: &SqlitePool, id: i64, name: &str) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>("UPDATE skills SET name = ? WHERE id = ? RETURNING id, name")
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM skills WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
