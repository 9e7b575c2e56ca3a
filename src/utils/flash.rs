//! One-time notices carried across a redirect in a `flash` cookie.

use axum::http::{HeaderMap, HeaderValue, header};
use cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }

    /// `Set-Cookie` value storing this notice until the next page view.
    pub fn to_cookie_header(&self) -> Option<HeaderValue> {
        let payload = serde_json::to_string(self).ok()?;
        let cookie = Cookie::build((FLASH_COOKIE, payload))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        HeaderValue::from_str(&cookie.encoded().to_string()).ok()
    }

    /// Reads a pending notice from the request's `Cookie` headers.
    /// A malformed cookie is treated as no notice.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| Cookie::split_parse_encoded(value))
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == FLASH_COOKIE)
            .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
    }
}

/// `Set-Cookie` value that expires the flash cookie once it has been shown.
pub fn clear_cookie_header() -> HeaderValue {
    let mut cookie = Cookie::build((FLASH_COOKIE, "")).path("/").build();
    cookie.make_removal();
    HeaderValue::from_str(&cookie.to_string()).unwrap_or_else(|_| {
        HeaderValue::from_static("flash=; Path=/; Max-Age=0")
    })
}
