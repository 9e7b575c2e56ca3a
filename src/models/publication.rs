// src/models/publication.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    error::FieldErrors,
    models::comma_list,
    utils::validators::{trim_optional, validate_http_url, validate_image_file},
};

/// Represents the 'publications' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub journal: Option<String>,
    pub date: NaiveDate,
    pub link: Option<String>,

    /// Path relative to the media root.
    pub image: Option<String>,

    /// Comma-separated list of tags (e.g. "HCI, ICT").
    pub tags: Option<String>,
}

impl Publication {
    /// Tags split on commas, trimmed, blanks dropped.
    pub fn tags_list(&self) -> Vec<String> {
        comma_list(self.tags.as_deref())
    }
}

/// Validated publication ready to be written.
#[derive(Debug, Clone)]
pub struct NewPublication {
    pub title: String,
    pub description: Option<String>,
    pub journal: Option<String>,
    pub date: NaiveDate,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Option<String>,
}

/// DTO for creating or replacing a publication.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PublicationInput {
    #[validate(
        required(message = "This field is required."),
        length(max = 255, code = "max_length", message = "Ensure this value has at most 255 characters.")
    )]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 200, code = "max_length", message = "Ensure this value has at most 200 characters."))]
    pub journal: Option<String>,

    /// Defaults to today when omitted.
    pub date: Option<NaiveDate>,

    #[validate(custom(function = validate_http_url))]
    pub link: Option<String>,

    #[validate(custom(function = validate_image_file))]
    pub image: Option<String>,

    #[validate(length(max = 200, code = "max_length", message = "Ensure this value has at most 200 characters."))]
    pub tags: Option<String>,
}

impl PublicationInput {
    pub fn clean(mut self) -> Result<NewPublication, FieldErrors> {
        trim_optional(&mut self.title);
        trim_optional(&mut self.description);
        trim_optional(&mut self.journal);
        trim_optional(&mut self.link);
        trim_optional(&mut self.image);
        trim_optional(&mut self.tags);

        self.validate()?;

        Ok(NewPublication {
            title: self.title.unwrap_or_default(),
            description: self.description,
            journal: self.journal,
            date: self
                .date
                .unwrap_or_else(|| chrono::Utc::now().date_naive()),
            link: self.link,
            image: self.image,
            tags: self.tags,
        })
    }
}

/// Query parameters for the admin publication list.
#[derive(Debug, Default, Deserialize)]
pub struct PublicationListParams {
    /// Matches title or journal.
    pub q: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
