// src/db/mod.rs
//
// Query layer. Every function takes the pool and issues plain
// parameterized statements; handlers never build SQL themselves.

pub mod admins;
pub mod educations;
pub mod feedback;
pub mod profile;
pub mod projects;
pub mod publications;
pub mod skills;
pub mod videos;

use sqlx::{QueryBuilder, Sqlite};

pub const DEFAULT_PAGE_SIZE: i64 = 100;
pub const MAX_PAGE_SIZE: i64 = 500;

/// Clamps list paging parameters to sane values.
pub fn page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}

/// `%keyword%` for LIKE matching, with LIKE wildcards in the keyword escaped.
pub fn like_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Appends `AND (col1 LIKE ? OR col2 LIKE ? ...)` for a non-blank keyword.
pub(crate) fn push_search(builder: &mut QueryBuilder<'_, Sqlite>, columns: &[&str], q: Option<&str>) {
    let Some(keyword) = q.map(str::trim).filter(|k| !k.is_empty()) else {
        return;
    };
    let pattern = like_pattern(keyword);

    builder.push(" AND (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            builder.push(" OR ");
        }
        builder.push(*column);
        builder.push(" LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\'");
    }
    builder.push(")");
}

pub(crate) fn push_page(builder: &mut QueryBuilder<'_, Sqlite>, limit: Option<i64>, offset: Option<i64>) {
    let (limit, offset) = page(limit, offset);
    builder.push(" LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);
}
