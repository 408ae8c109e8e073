//! Request extractors that never bypass the response envelope.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{HeaderMap, header, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::dto::list_query::ListQueryParams;
use crate::error::AppError;
use crate::utils::id::parse_id;

pub const INVALID_CONTENT_TYPE_MESSAGE: &str = "Invalid content type. Please send JSON data.";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body.";

/// Like [`axum::Json`], but every rejection is an [`AppError::Validation`].
///
/// The content type is checked before the body is read. Media type
/// parameters (`; charset=utf-8`) are accepted. Only a JSON object is a
/// valid body; arrays and scalars are rejected as malformed.
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::bad_request(INVALID_CONTENT_TYPE_MESSAGE));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            AppError::bad_request(INVALID_JSON_MESSAGE)
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Failed to parse JSON body");
            AppError::bad_request(INVALID_JSON_MESSAGE)
        })?;

        if !value.is_object() {
            tracing::debug!("JSON body is not an object");
            return Err(AppError::bad_request(INVALID_JSON_MESSAGE));
        }

        let payload = serde_json::from_value(value).map_err(|e| {
            tracing::debug!(error = %e, "JSON body does not match the request shape");
            AppError::bad_request(INVALID_JSON_MESSAGE)
        })?;

        Ok(Self(payload))
    }
}

/// The `{id}` path segment.
///
/// `raw` is the segment as received (used in messages); `value` is `None`
/// when the segment is not a valid id or cannot be decoded, which handlers
/// report as not found.
#[derive(Debug)]
pub struct PathId {
    pub raw: String,
    pub value: Option<i64>,
}

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(e) => {
                tracing::debug!(error = %e, "Undecodable path id");
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                return Ok(Self {
                    raw: raw.to_string(),
                    value: None,
                });
            }
        };

        Ok(Self {
            value: parse_id(&raw),
            raw,
        })
    }
}

/// List query parameters; a query string that fails to parse (duplicated or
/// malformed keys) counts as no parameters.
#[derive(Debug, Default)]
pub struct ListQuery(pub ListQueryParams);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<ListQueryParams>::try_from_uri(&parts.uri) {
            Ok(Query(params)) => Ok(Self(params)),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unparsable list query");
                Ok(Self::default())
            }
        }
    }
}

/// Returns true when `Content-Type` is `application/json`, ignoring parameters.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderValue;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        title: String,
    }

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(has_json_content_type(&headers("application/json")));
        assert!(has_json_content_type(&headers(
            "application/json; charset=utf-8"
        )));
        assert!(!has_json_content_type(&headers("text/plain")));
        assert!(!has_json_content_type(&headers("application/jsonx")));
        assert!(!has_json_content_type(&HeaderMap::new()));
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"title":"Sprint Planning"}"#))
            .unwrap();

        let JsonPayload(payload) = JsonPayload::<Payload>::from_request(req, &())
            .await
            .unwrap();

        assert_eq!(payload.title, "Sprint Planning");
    }

    #[tokio::test]
    async fn test_rejects_wrong_content_type() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"title":"x"}"#))
            .unwrap();

        let err = JsonPayload::<Payload>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), INVALID_CONTENT_TYPE_MESSAGE);
    }

    #[tokio::test]
    async fn test_rejects_array_body() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"["Sprint Planning"]"#))
            .unwrap();

        let err = JsonPayload::<Payload>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), INVALID_JSON_MESSAGE);
    }

    #[tokio::test]
    async fn test_list_query_falls_back_on_duplicate_keys() {
        let (mut parts, _) = Request::builder()
            .uri("/activity-groups?location=true&location=true")
            .body(())
            .unwrap()
            .into_parts();

        let Ok(ListQuery(params)) = ListQuery::from_request_parts(&mut parts, &()).await;

        assert!(!params.include_location());
    }

    #[tokio::test]
    async fn test_list_query_reads_location() {
        let (mut parts, _) = Request::builder()
            .uri("/activity-groups?location=true")
            .body(())
            .unwrap()
            .into_parts();

        let Ok(ListQuery(params)) = ListQuery::from_request_parts(&mut parts, &()).await;

        assert!(params.include_location());
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let err = JsonPayload::<Payload>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), INVALID_JSON_MESSAGE);
    }
}
