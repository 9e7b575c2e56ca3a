//! Form submissions in either browser encoding.
//!
//! `application/x-www-form-urlencoded` goes through axum's `Form`;
//! `multipart/form-data` text fields are collected into a map and
//! deserialized the same way. File parts are skipped.

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::{
    error::{AppError, FieldErrorKind, FieldErrors, NON_FIELD_ERRORS},
    utils::request_kind::RequestKind,
};

#[derive(Debug, Clone)]
pub struct FormBody<T>(pub T);

/// An unreadable submission, answered in the shape the caller expects.
#[derive(Debug)]
pub struct FormBodyRejection {
    kind: RequestKind,
    message: String,
}

impl IntoResponse for FormBodyRejection {
    fn into_response(self) -> Response {
        tracing::info!(reason = %self.message, "Rejected form body");

        if self.kind.is_programmatic() {
            let mut errors = FieldErrors::new();
            errors.add(NON_FIELD_ERRORS, FieldErrorKind::Invalid, self.message);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "errors": errors.to_json_string(),
                })),
            )
                .into_response();
        }

        AppError::BadRequest(self.message).into_response()
    }
}

impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = FormBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = RequestKind::from_headers(req.headers());
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        let parsed = if is_multipart {
            from_multipart(req, state).await
        } else {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| value)
                .map_err(|rejection| rejection.body_text())
        };

        parsed
            .map(FormBody)
            .map_err(|message| FormBodyRejection { kind, message })
    }
}

async fn from_multipart<T, S>(req: Request, state: &S) -> Result<T, String>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|rejection| rejection.body_text())?;

    let mut fields = Map::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if field.file_name().is_some() {
            continue;
        }
        let text = field.text().await.map_err(|e| e.body_text())?;
        fields.insert(name, Value::String(text));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| e.to_string())
}
