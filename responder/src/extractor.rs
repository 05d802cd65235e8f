use axum::async_trait;
use axum::{
    body::HttpBody,
    extract::FromRequest,
    http::{header, HeaderMap, Request},
    BoxError,
};
use bytes::Bytes;
use serde::de::IgnoredAny;

use crate::error::AppError;

/// Checks a request body declared as `application/json` and drops it.
/// Nothing in a request influences the response, so other bodies are left unread.
pub struct DiscardedJson;

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .eq_ignore_ascii_case("application/json")
}

/// Only objects and arrays are accepted at the top level.
fn check_json(body: &[u8]) -> Result<(), AppError> {
    serde_json::from_slice::<IgnoredAny>(body)
        .map_err(|e| AppError::MalformedBody(e.to_string()))?;
    match body.iter().copied().find(|byte| !byte.is_ascii_whitespace()) {
        Some(b'{' | b'[') => Ok(()),
        _ => Err(AppError::MalformedBody(
            "top-level JSON value must be an object or array".into(),
        )),
    }
}

#[async_trait]
impl<S, B> FromRequest<S, B> for DiscardedJson
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(DiscardedJson);
        }
        let body = Bytes::from_request(req, state).await?;
        if body.is_empty() {
            return Ok(DiscardedJson);
        }
        check_json(&body).map_err(|e| {
            tracing::warn!(%e, "rejecting malformed JSON body");
            e
        })?;
        Ok(DiscardedJson)
    }
}
