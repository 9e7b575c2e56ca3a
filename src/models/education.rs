// src/models/education.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{error::FieldErrors, utils::validators::trim_optional};

/// Represents the 'educations' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub degree: String,
    pub institute: String,
    pub start_year: i64,

    /// `None` while the programme is ongoing.
    pub end_year: Option<i64>,
}

impl Education {
    /// "BSc at Somewhere University", as shown in listings.
    pub fn label(&self) -> String {
        format!("{} at {}", self.degree, self.institute)
    }
}

#[derive(Debug, Clone)]
pub struct NewEducation {
    pub degree: String,
    pub institute: String,
    pub start_year: i64,
    pub end_year: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EducationInput {
    #[validate(
        required(message = "This field is required."),
        length(max = 200, code = "max_length", message = "Ensure this value has at most 200 characters.")
    )]
    pub degree: Option<String>,

    #[validate(
        required(message = "This field is required."),
        length(max = 200, code = "max_length", message = "Ensure this value has at most 200 characters.")
    )]
    pub institute: Option<String>,

    #[validate(
        required(message = "This field is required."),
        range(min = 0, code = "out_of_range", message = "Ensure this value is greater than or equal to 0.")
    )]
    pub start_year: Option<i64>,

    #[validate(range(min = 0, code = "out_of_range", message = "Ensure this value is greater than or equal to 0."))]
    pub end_year: Option<i64>,
}

impl EducationInput {
    pub fn clean(mut self) -> Result<NewEducation, FieldErrors> {
        trim_optional(&mut self.degree);
        trim_optional(&mut self.institute);

        self.validate()?;

        Ok(NewEducation {
            degree: self.degree.unwrap_or_default(),
            institute: self.institute.unwrap_or_default(),
            start_year: self.start_year.unwrap_or_default(),
            end_year: self.end_year,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EducationListParams {
    /// Matches degree or institute.
    pub q: Option<String>,
    /// Exact institute filter.
    pub institute: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
