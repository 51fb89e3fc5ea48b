//! Unified error type for chatlens.
//!
//! A single [`ChatlensError`] enum covers every failure the library can
//! produce. Failures are fatal to the enclosing request by design: there is
//! no retry, no partial-success reporting, and no rollback of media files
//! already written earlier in the same batch.

use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred, typically while writing an uploaded file to
    /// the upload directory.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An uploaded text export was not valid UTF-8.
    ///
    /// This fails the whole upload request; files already written stay on
    /// disk.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// The filename being decoded.
        context: String,
        /// The underlying UTF-8 error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Feedback document store error.
    #[error("feedback store error: {0}")]
    Store(#[from] sled::Error),

    /// Malformed or unreadable multipart request body.
    #[error("multipart error: {0}")]
    Multipart(String),
}

impl From<axum::extract::multipart::MultipartError> for ChatlensError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ChatlensError::Multipart(err.to_string())
    }
}

/// Every error surfaces as a bare 500 with the display string, matching the
/// framework-default failure mode of the original service.
impl IntoResponse for ChatlensError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_names_the_file() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatlensError::Utf8 {
            context: "chat.txt".to_string(),
            source,
        };
        assert!(err.to_string().contains("chat.txt"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: ChatlensError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, ChatlensError::Io(_)));
    }

    #[test]
    fn test_error_maps_to_500() {
        let err = ChatlensError::Multipart("boundary missing".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
