// src/models/skill.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{error::FieldErrors, utils::validators::trim_optional};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SkillInput {
    #[validate(
        required(message = "This field is required."),
        length(max = 100, code = "max_length", message = "Ensure this value has at most 100 characters.")
    )]
    pub name: Option<String>,
}

impl SkillInput {
    /// Returns the trimmed skill name.
    pub fn clean(mut self) -> Result<String, FieldErrors> {
        trim_optional(&mut self.name);
        self.validate()?;
        Ok(self.name.unwrap_or_default())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SkillListParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
