// Classgate
// Copyright (C) 2025 Classgate Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Error handling for the API gateway
//!
//! Responses carry plain-text bodies: a 400 names the missing or invalid
//! query parameter, a 500 carries the backend error's message verbatim.

use http_body_util::Full;
use hyper::{Response, StatusCode, body::Bytes};
use thiserror::Error;
use tracing::error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Method not allowed: {message}")]
    MethodNotAllowed { message: String },

    /// Any failure reported by the backend call, including deadline expiry.
    /// Subtypes are not distinguished; all of them surface as HTTP 500.
    #[error("{}", .0.message())]
    Backend(#[from] tonic::Status),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Hyper error: {0}")]
    HyperError(#[from] hyper::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    HttpError(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert ApiError to HTTP response
impl From<ApiError> for Response<Full<Bytes>> {
    fn from(err: ApiError) -> Self {
        let status_code = err.status_code();

        // Log server-side failures; client input errors are the caller's
        if status_code.is_server_error() {
            error!("API Error: {} - {}", status_code, err);
        }

        let body = err.to_string();

        Response::builder()
            .status(status_code)
            .header("content-type", "text/plain; charset=utf-8")
            .body(Full::new(Bytes::from(body)))
            .unwrap_or_else(|e| {
                error!("Failed to build error response: {}", e);
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Full::new(Bytes::from("Internal Server Error")))
                    .unwrap()
            })
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<hyper::http::Error> for ApiError {
    fn from(err: hyper::http::Error) -> Self {
        ApiError::HttpError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = ApiError::BadRequest {
            message: "Missing 'name' query parameter".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::Backend(tonic::Status::unavailable("unavailable"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        // Backend statuses are not mapped per gRPC code; not-found is 500 too
        let err = ApiError::Backend(tonic::Status::not_found("no such session"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_backend_error_body_is_status_message() {
        let err = ApiError::Backend(tonic::Status::unavailable("unavailable"));
        assert_eq!(err.to_string(), "unavailable");
    }

    #[test]
    fn test_bad_request_body_is_message_verbatim() {
        let err = ApiError::BadRequest {
            message: "Invalid 'teacherId' query parameter".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid 'teacherId' query parameter");
    }
}
