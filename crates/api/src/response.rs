//! Shared response envelope for API handlers.
//!
//! Every response -- success or failure -- uses the
//! `{ "success": bool, "message": string, "data": T | null }` envelope.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` blocks to
//! get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard response envelope.
///
/// `data` is always present in the serialized output, `null` when there
/// is no payload (e.g. deletes and message-only failures).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A successful envelope carrying a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// A failure envelope with a message and no payload.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
