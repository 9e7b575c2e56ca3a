//! Field validators shared by the model DTOs.
//!
//! Every function here is pure: it inspects a single value and returns a
//! `validator::ValidationError` carrying one of the codes understood by
//! [`crate::error::FieldErrorKind`].

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;
use validator::{ValidateEmail, ValidationError};

static WHATSAPP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{1,13}$").expect("whatsapp pattern is valid"));

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];
pub const RESUME_EXTENSIONS: &[&str] = &["pdf"];

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Checks a social profile link: http(s) scheme plus the platform's domain.
///
/// `platform` is the field name (`twitter`, ...) and is capitalized in the message.
pub fn check_social_url(platform: &str, domain: &str, url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Ok(());
    }

    let label = capitalize(platform);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(error(
            "invalid_url",
            format!("{} URL must start with http:// or https://", label),
        ));
    }
    if !url.to_lowercase().contains(domain) {
        return Err(error(
            "invalid_url",
            format!("{} URL must point to {}", label, domain),
        ));
    }
    Ok(())
}

pub fn validate_twitter_url(url: &str) -> Result<(), ValidationError> {
    check_social_url("twitter", "twitter.com", url)
}

pub fn validate_facebook_url(url: &str) -> Result<(), ValidationError> {
    check_social_url("facebook", "facebook.com", url)
}

pub fn validate_linkedin_url(url: &str) -> Result<(), ValidationError> {
    check_social_url("linkedin", "linkedin.com", url)
}

pub fn validate_instagram_url(url: &str) -> Result<(), ValidationError> {
    check_social_url("instagram", "instagram.com", url)
}

/// Absolute http(s) URL, e.g. a publication link or a video address.
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {
            Ok(())
        }
        _ => Err(error("invalid_url", "Enter a valid URL.")),
    }
}

/// Email syntax. Blank input is left to the `required` check.
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        return Ok(());
    }
    Err(error("invalid_email", "Enter a valid email address."))
}

/// `+` followed by 1 to 13 digits, nothing else.
pub fn validate_whatsapp(number: &str) -> Result<(), ValidationError> {
    if WHATSAPP_RE.is_match(number) {
        return Ok(());
    }
    Err(error(
        "invalid_phone_format",
        "Enter a valid WhatsApp number with country code (e.g., +12025550123)",
    ))
}

pub fn validate_resume_file(path: &str) -> Result<(), ValidationError> {
    check_extension(path, RESUME_EXTENSIONS)
}

pub fn validate_image_file(path: &str) -> Result<(), ValidationError> {
    check_extension(path, IMAGE_EXTENSIONS)
}

/// Extension check against an allow-list. The extension is lower-cased first.
pub fn check_extension(path: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if allowed.contains(&extension.as_str()) {
        return Ok(());
    }
    Err(error(
        "unsupported_file_type",
        format!(
            "File extension \"{}\" is not allowed. Allowed extensions are: {}.",
            extension,
            allowed.join(", ")
        ),
    ))
}

/// Trims an optional input and turns blank values into `None`.
pub fn trim_optional(value: &mut Option<String>) {
    if let Some(inner) = value.take() {
        let trimmed = inner.trim();
        if !trimmed.is_empty() {
            *value = Some(trimmed.to_string());
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
