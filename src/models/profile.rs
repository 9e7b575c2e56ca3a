// src/models/profile.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    error::FieldErrors,
    utils::validators::{
        trim_optional, validate_facebook_url, validate_image_file, validate_instagram_url,
        validate_linkedin_url, validate_resume_file, validate_twitter_url,
    },
};

/// Represents the single row of the 'profile' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub bio: String,

    /// Path relative to the media root, e.g. `profile_pics/me.jpg`.
    pub photo: Option<String>,

    /// Path relative to the media root. Always a PDF.
    pub resume: Option<String>,

    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl Profile {
    /// Stand-in shown on the home page until the owner saves a profile.
    pub fn placeholder() -> Self {
        Self {
            name: "Default User".to_string(),
            bio: "No profile information available.".to_string(),
            photo: None,
            resume: None,
            twitter: Some("https://twitter.com".to_string()),
            facebook: Some("https://facebook.com".to_string()),
            linkedin: Some("https://linkedin.com".to_string()),
            instagram: Some("https://instagram.com".to_string()),
        }
    }
}

/// DTO for saving the profile. Every write replaces the whole record.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(
        required(message = "This field is required."),
        length(max = 100, code = "max_length", message = "Ensure this value has at most 100 characters.")
    )]
    pub name: Option<String>,

    pub bio: Option<String>,

    #[validate(custom(function = validate_image_file))]
    pub photo: Option<String>,

    #[validate(custom(function = validate_resume_file))]
    pub resume: Option<String>,

    #[validate(custom(function = validate_twitter_url))]
    pub twitter: Option<String>,

    #[validate(custom(function = validate_facebook_url))]
    pub facebook: Option<String>,

    #[validate(custom(function = validate_linkedin_url))]
    pub linkedin: Option<String>,

    #[validate(custom(function = validate_instagram_url))]
    pub instagram: Option<String>,
}

impl ProfileInput {
    /// Normalizes and validates the input, yielding the record to store.
    pub fn clean(mut self) -> Result<Profile, FieldErrors> {
        trim_optional(&mut self.name);
        trim_optional(&mut self.photo);
        trim_optional(&mut self.resume);
        trim_optional(&mut self.twitter);
        trim_optional(&mut self.facebook);
        trim_optional(&mut self.linkedin);
        trim_optional(&mut self.instagram);

        self.validate()?;

        Ok(Profile {
            name: self.name.unwrap_or_default(),
            bio: self.bio.map(|b| b.trim().to_string()).unwrap_or_default(),
            photo: self.photo,
            resume: self.resume,
            twitter: self.twitter,
            facebook: self.facebook,
            linkedin: self.linkedin,
            instagram: self.instagram,
        })
    }
}
