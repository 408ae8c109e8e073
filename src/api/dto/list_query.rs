//! Query parameters accepted by list endpoints.

use serde::Deserialize;

/// `?location=true` switches on the location placeholder.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    #[serde(default)]
    pub location: Option<String>,
}

impl ListQueryParams {
    /// Only the exact string `"true"` enables the placeholder.
    pub fn include_location(&self) -> bool {
        self.location.as_deref() == Some("true")
    }
}
