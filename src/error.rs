// src/error.rs

use std::{borrow::Cow, collections::BTreeMap, error::Error as StdError, fmt};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    // 500 Internal Server Error
    #[error("internal server error: {0}")]
    InternalServerError(String),

    // 400 Bad Request
    #[error("bad request: {0}")]
    BadRequest(String),

    // 400 Bad Request, field-scoped
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    // 401 Unauthorized
    #[error("unauthorized: {0}")]
    AuthError(String),

    // 404 Not Found
    #[error("not found: {0}")]
    NotFound(String),

    // 409 Conflict (e.g., duplicate admin username)
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Validation(errors) => {
                let body = Json(json!({
                    "error": "Validation failed",
                    "errors": errors,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        // Tera nests the useful part of the message in its source chain.
        let mut message = err.to_string();
        let mut source = StdError::source(&err);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        AppError::InternalServerError(message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Kinds of field-level validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    InvalidUrl,
    InvalidEmail,
    InvalidPhoneFormat,
    UnsupportedFileType,
    #[serde(rename = "required")]
    MissingRequiredField,
    #[serde(rename = "max_length")]
    TooLong,
    OutOfRange,
    /// The submission as a whole could not be read.
    Invalid,
}

impl FieldErrorKind {
    /// Maps a `validator` error code back onto the taxonomy.
    /// Built-in codes (`length`, `range`, `email`, `url`) are folded in as well.
    pub fn from_code(code: &str) -> Self {
        match code {
            "invalid_url" | "url" => FieldErrorKind::InvalidUrl,
            "invalid_email" | "email" => FieldErrorKind::InvalidEmail,
            "invalid_phone_format" => FieldErrorKind::InvalidPhoneFormat,
            "unsupported_file_type" => FieldErrorKind::UnsupportedFileType,
            "max_length" | "length" => FieldErrorKind::TooLong,
            "out_of_range" | "range" => FieldErrorKind::OutOfRange,
            "invalid" => FieldErrorKind::Invalid,
            _ => FieldErrorKind::MissingRequiredField,
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            FieldErrorKind::InvalidUrl => "Enter a valid URL.",
            FieldErrorKind::InvalidEmail => "Enter a valid email address.",
            FieldErrorKind::InvalidPhoneFormat => {
                "Enter a valid WhatsApp number with country code (e.g., +12025550123)"
            }
            FieldErrorKind::UnsupportedFileType => "File extension is not allowed.",
            FieldErrorKind::MissingRequiredField => "This field is required.",
            FieldErrorKind::TooLong => "Ensure this value is not too long.",
            FieldErrorKind::OutOfRange => "Ensure this value is in range.",
            FieldErrorKind::Invalid => "The submitted form could not be read.",
        }
    }
}

/// A single failure attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub code: FieldErrorKind,
}

/// Key for failures that belong to the form rather than one field.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Field name -> failures. Ordered so responses are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<FieldError>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(FieldError {
            message: message.into(),
            code: kind,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[FieldError]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Field name -> plain messages, the shape templates render inline.
    pub fn messages(&self) -> BTreeMap<String, Vec<String>> {
        self.0
            .iter()
            .map(|(field, errs)| {
                (
                    field.clone(),
                    errs.iter().map(|e| e.message.clone()).collect(),
                )
            })
            .collect()
    }

    /// JSON text of the map, as sent to background page scripts.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .flat_map(|(field, errs)| errs.iter().map(move |e| format!("{}: {}", field, e.message)))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let kind = FieldErrorKind::from_code(&err.code);
                let message = err
                    .message
                    .clone()
                    .unwrap_or(Cow::Borrowed(kind.default_message()));
                out.add(field.to_string(), kind, message);
            }
        }
        out
    }
}

/// Configuration loading failures. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}
