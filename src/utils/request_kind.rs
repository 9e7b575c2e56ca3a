use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};

/// How the caller expects to be answered, decided once from the
/// `X-Requested-With` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Background page script; wants JSON.
    Programmatic,
    /// Ordinary browser navigation; wants HTML or a redirect.
    Navigation,
}

impl RequestKind {
    pub fn is_programmatic(self) -> bool {
        self == RequestKind::Programmatic
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let programmatic = headers
            .get("x-requested-with")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"));

        if programmatic {
            RequestKind::Programmatic
        } else {
            RequestKind::Navigation
        }
    }
}

impl<S> FromRequestParts<S> for RequestKind
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestKind::from_headers(&parts.headers))
    }
}
