//! Response envelope shared by every endpoint: successes are
//! `{"status": "ok", "data": ...}`, failures are
//! `{"status": "error", "error": {"message": ...}}`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize)]
pub struct OkEnvelope<T> {
    pub status: String,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub status: String,
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetails {
    pub message: String,
}

/// Builds the success response structure with the provided data.
pub fn ok<T: Serialize>(data: T) -> OkEnvelope<T> {
    OkEnvelope {
        status: "ok".to_string(),
        data,
    }
}

/// Builds the error response structure with the provided message.
pub fn error(message: impl Into<String>) -> ErrorEnvelope {
    ErrorEnvelope {
        status: "error".to_string(),
        error: ErrorDetails {
            message: message.into(),
        },
    }
}
