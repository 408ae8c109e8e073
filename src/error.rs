//! Application error type and its HTTP envelope rendering.
//!
//! Every failure path in the service ends up as an [`AppError`], which renders
//! as the standard `{status, message}` envelope. Store failures are logged here
//! and never leak details to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::api::dto::envelope::{Envelope, EnvelopeStatus};

/// Message returned for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or falsy required fields, wrong content type, malformed body.
    #[error("{message}")]
    Validation { message: String },

    /// No row matches the requested identifier.
    #[error("{message}")]
    NotFound { message: String },

    /// The row targeted by a partial update does not exist.
    ///
    /// Still a 404, but the envelope status reads `"Error"`.
    #[error("{message}")]
    UpdateTargetMissing { message: String },

    /// Store failure or any other unexpected fault.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn update_target_missing(message: impl Into<String>) -> Self {
        Self::UpdateTargetMissing {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Builds a validation error naming the missing fields.
    ///
    /// Field names are sorted so the message is stable.
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = fields
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect();
        names.sort();
        names.dedup();

        Self::bad_request(format!("Missing required fields: {}.", names.join(", ")))
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::UpdateTargetMissing { .. } => {
                StatusCode::NOT_FOUND
            }
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn envelope_status(&self) -> EnvelopeStatus {
        match self {
            AppError::NotFound { .. } => EnvelopeStatus::NotFound,
            AppError::Validation { .. }
            | AppError::UpdateTargetMissing { .. }
            | AppError::Internal { .. } => EnvelopeStatus::Error,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope_status = self.envelope_status();

        let message = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::UpdateTargetMissing { message } => message,
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        let body: Envelope<()> = Envelope::failure(envelope_status, message);

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = ?e, "Database error");
        AppError::internal("Database error")
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::missing_fields(errors.field_errors().keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_error_envelope() {
        let (status, json) = body_json(AppError::bad_request("Bad input")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "Error");
        assert_eq!(json["message"], "Bad input");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn test_not_found_renders_not_found_status() {
        let (status, json) = body_json(AppError::not_found("No data found")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], "Not Found");
        assert_eq!(json["message"], "No data found");
    }

    #[tokio::test]
    async fn test_update_target_missing_is_404_with_error_status() {
        let (status, json) =
            body_json(AppError::update_target_missing("Todo item not found.")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], "Error");
        assert_eq!(json["message"], "Todo item not found.");
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let (status, json) = body_json(AppError::internal("connection reset by peer")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["status"], "Error");
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_missing_fields_message_is_sorted() {
        let err = AppError::missing_fields(["title", "email", "title"]);

        assert_eq!(err.to_string(), "Missing required fields: email, title.");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
