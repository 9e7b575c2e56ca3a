// src/models/feedback.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    error::FieldErrors,
    utils::validators::{trim_optional, validate_email_address, validate_whatsapp},
};

/// Represents the 'feedback' table. Rows are never updated after insert.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub whatsapp: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A visitor submission that passed validation.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub whatsapp: Option<String>,
    pub message: String,
}

/// The contact form as posted by the home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FeedbackForm {
    #[validate(
        required(message = "This field is required."),
        length(max = 100, code = "max_length", message = "Ensure this value has at most 100 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        length(max = 254, code = "max_length", message = "Ensure this value has at most 254 characters."),
        custom(function = validate_email_address)
    )]
    pub email: Option<String>,

    #[validate(
        length(max = 15, code = "max_length", message = "Ensure this value has at most 15 characters."),
        custom(function = validate_whatsapp)
    )]
    pub whatsapp: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub message: Option<String>,
}

impl FeedbackForm {
    /// Trims every field and drops blank ones.
    pub fn normalize(&mut self) {
        trim_optional(&mut self.name);
        trim_optional(&mut self.email);
        trim_optional(&mut self.whatsapp);
        trim_optional(&mut self.message);
    }

    /// Runs every feedback validator. Nothing is written on failure.
    pub fn clean(&self) -> Result<NewFeedback, FieldErrors> {
        self.validate()?;

        Ok(NewFeedback {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            whatsapp: self.whatsapp.clone(),
            message: self.message.clone().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedbackListParams {
    /// Matches name or email.
    pub q: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
