//! DTOs exposed by the public API endpoints.

use serde::Serialize;

use crate::domain::types::LeadId;

/// Body of a successful lead submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadCreated {
    pub success: bool,
    pub id: LeadId,
}

/// Hosted payment page the buyer should be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
