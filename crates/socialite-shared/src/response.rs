//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// Error body returned for every failed request.
///
/// Carries a human-readable `detail` plus, for identity token verification
/// failures only, the underlying `error` diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation of the rejection.
    pub detail: String,

    /// Underlying verification diagnostic, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("Not found.")
    }

    pub fn unauthorized() -> Self {
        Self::new("Authentication credentials were not provided.")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error.")
    }
}
