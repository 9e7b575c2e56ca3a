// src/models/video.rs

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    error::FieldErrors,
    utils::validators::{trim_optional, validate_http_url},
};

static YOUTUBE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]+)")
        .expect("youtube pattern is valid")
});

/// Pulls the video id out of a `youtube.com/watch?v=<id>` or `youtu.be/<id>` link.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    YOUTUBE_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Represents the 'videos' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,

    /// Set once on insert.
    pub created_at: DateTime<Utc>,
}

impl Video {
    pub fn youtube_id(&self) -> Option<String> {
        extract_youtube_id(&self.url)
    }
}

#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// DTO for creating or replacing a video. `created_at` is not accepted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VideoInput {
    #[validate(
        required(message = "This field is required."),
        length(max = 200, code = "max_length", message = "Ensure this value has at most 200 characters.")
    )]
    pub title: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = validate_http_url))]
    pub url: Option<String>,

    pub description: Option<String>,
}

impl VideoInput {
    pub fn clean(mut self) -> Result<NewVideo, FieldErrors> {
        trim_optional(&mut self.title);
        trim_optional(&mut self.url);
        trim_optional(&mut self.description);

        self.validate()?;

        Ok(NewVideo {
            title: self.title.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoListParams {
    /// Matches title or url.
    pub q: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
