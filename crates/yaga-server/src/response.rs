//! Transport-neutral HTTP responses.

use serde::Serialize;
use std::io::Cursor;

use crate::dto::ErrorResponse;

const JSON: &str = "application/json";
const INTERNAL_ERROR_BODY: &[u8] = br#"{"detail":"Internal Server Error"}"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                content_type: JSON.to_string(),
                body,
            },
            Err(e) => {
                tracing::warn!("Failed to serialize response body: {}", e);
                Self::internal_error()
            }
        }
    }

    pub fn ok_json<T: Serialize>(value: &T) -> Self {
        Self::json(200, value)
    }

    pub fn file(content_type: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: content_type.into(),
            body,
        }
    }

    fn detail(status: u16, detail: &str) -> Self {
        Self::json(
            status,
            &ErrorResponse {
                detail: detail.to_string(),
            },
        )
    }

    pub fn not_found() -> Self {
        Self::detail(404, "Not Found")
    }

    pub fn method_not_allowed() -> Self {
        Self::detail(405, "Method Not Allowed")
    }

    pub fn internal_error() -> Self {
        Self {
            status: 500,
            content_type: JSON.to_string(),
            body: INTERNAL_ERROR_BODY.to_vec(),
        }
    }

    /// Converts into a `tiny_http` response with a `Content-Type` header.
    pub fn into_http(self) -> tiny_http::Response<Cursor<Vec<u8>>> {
        let response = tiny_http::Response::from_data(self.body).with_status_code(self.status);
        match tiny_http::Header::from_bytes(&b"Content-Type"[..], self.content_type.as_bytes()) {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}
