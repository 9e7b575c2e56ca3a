// src/models/mod.rs

pub mod admin;
pub mod education;
pub mod feedback;
pub mod profile;
pub mod project;
pub mod publication;
pub mod skill;
pub mod video;

/// Splits a comma-separated field into trimmed, non-empty entries, keeping order.
/// Absent input yields an empty list.
pub fn comma_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
