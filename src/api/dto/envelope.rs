//! The `{status, message, data?}` envelope wrapping every response.

use serde::Serialize;

/// Placeholder emitted by list endpoints when `?location=true` is passed.
pub const LOCATION_PLACEHOLDER: &str = "Some location data here";

/// Outcome label carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnvelopeStatus {
    Success,
    Error,
    #[serde(rename = "Not Found")]
    NotFound,
}

/// Uniform response body.
///
/// `data` is omitted on failures; `location` only appears on list responses
/// that asked for it.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data: Some(data),
            location: None,
        }
    }

    /// Failure envelope without `data`.
    pub fn failure(status: EnvelopeStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
            location: None,
        }
    }

    /// Attaches the location placeholder when `enabled`.
    pub fn with_location(mut self, enabled: bool) -> Self {
        if enabled {
            self.location = Some(LOCATION_PLACEHOLDER);
        }
        self
    }
}

/// Payload returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResource {
    pub id: i64,
}
