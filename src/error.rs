//! Error types and handling for the address book service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

/// Main error type for the address book service
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Referenced address id does not exist
    #[error("address {id} not found")]
    NotFound { id: i64 },

    /// Database operation errors
    #[error("Database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AddressBookError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the given address id
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// HTTP status code this error maps to
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            AddressBookError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AddressBookError::NotFound { .. } => StatusCode::NOT_FOUND,
            AddressBookError::Config { .. }
            | AddressBookError::Database { .. }
            | AddressBookError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error kind for the response body
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AddressBookError::Validation { .. } => "validation",
            AddressBookError::NotFound { .. } => "not_found",
            AddressBookError::Config { .. }
            | AddressBookError::Database { .. }
            | AddressBookError::Io { .. } => "internal",
        }
    }
}

/// JSON body returned for every error response
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable detail; field-level for validation errors
    pub detail: String,
}

impl IntoResponse for AddressBookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Server-side causes are logged, never leaked to the client
        let detail = match &self {
            AddressBookError::Validation { message } => message.clone(),
            AddressBookError::NotFound { .. } => self.to_string(),
            other => {
                tracing::error!(error = %other, "request failed");
                "internal server error".to_string()
            }
        };
        let body = ErrorBody {
            error: self.kind().to_string(),
            detail,
        };
        (status, Json(body)).into_response()
    }
}
