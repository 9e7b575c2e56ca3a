// src/models/project.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    error::FieldErrors,
    models::comma_list,
    utils::validators::{trim_optional, validate_http_url, validate_image_file},
};

/// Represents the 'projects' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub link: Option<String>,

    /// Comma-separated list of languages (e.g. "Rust, TypeScript").
    pub language: Option<String>,
}

impl Project {
    pub fn languages_list(&self) -> Vec<String> {
        comma_list(self.language.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub link: Option<String>,
    pub language: Option<String>,
}

/// DTO for creating or replacing a project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProjectInput {
    #[validate(
        required(message = "This field is required."),
        length(max = 200, code = "max_length", message = "Ensure this value has at most 200 characters.")
    )]
    pub title: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub description: Option<String>,

    #[validate(custom(function = validate_image_file))]
    pub image: Option<String>,

    #[validate(custom(function = validate_http_url))]
    pub link: Option<String>,

    #[validate(length(max = 200, code = "max_length", message = "Ensure this value has at most 200 characters."))]
    pub language: Option<String>,
}

impl ProjectInput {
    pub fn clean(mut self) -> Result<NewProject, FieldErrors> {
        trim_optional(&mut self.title);
        trim_optional(&mut self.description);
        trim_optional(&mut self.image);
        trim_optional(&mut self.link);
        trim_optional(&mut self.language);

        self.validate()?;

        Ok(NewProject {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: self.image,
            link: self.link,
            language: self.language,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    /// Matches title.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
