//! Error handling utilities for API responses.
//!
//! Provides structured error responses and conversion between service-layer
//! errors and HTTP responses.
//!
//! # Response Format
//! All errors return consistent JSON responses containing:
//! - `error`: Human-readable message
//! - `error_type`: Machine-readable error category
//!
//! # Error Handling Flow
//! 1. Service layer returns domain-specific `ServiceError`
//! 2. `service_error_to_http` converts to appropriate HTTP response

use crate::errors::ServiceError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Request timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error_type: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Converts ServiceError to appropriate HTTP response with standard format
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    let (status, error_type, message) = match error {
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_error", message)
        }
        ServiceError::InvalidCredentials => (
            StatusCode::BAD_REQUEST,
            "invalid_credentials",
            "Invalid credentials".to_string(),
        ),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::BAD_REQUEST,
            "already_exists",
            format!("{} '{}' already exists", entity, identifier),
        ),
        ServiceError::Unauthenticated { message } => {
            (StatusCode::UNAUTHORIZED, "unauthenticated", message)
        }
        ServiceError::Forbidden { message } => (StatusCode::FORBIDDEN, "forbidden", message),
        ServiceError::Persistence { source } => {
            tracing::error!("Persistence error: {:#}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "persistence_error",
                "Internal server error".to_string(),
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            )
        }
    };

    let error_response = ApiResponse::<()>::error(message, error_type);
    (status, serde_json::to_string(&error_response).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_taxonomy_to_status_codes() {
        let cases = vec![
            (ServiceError::validation("bad input"), StatusCode::BAD_REQUEST),
            (ServiceError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (
                ServiceError::not_found("Car", "3"),
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::already_exists("User", "alice"),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::unauthenticated("Missing authorization header"),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ServiceError::forbidden("Token validation failed"),
                StatusCode::FORBIDDEN,
            ),
        ];

        for (error, expected) in cases {
            let (status, _) = service_error_to_http(error);
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn not_found_message_names_the_identifier() {
        let (_, body) = service_error_to_http(ServiceError::not_found("Car", "42"));
        let response: ApiResponse<()> = serde_json::from_str(&body).unwrap();

        assert!(!response.success);
        assert!(response.message.contains("42"));
        assert_eq!(response.error.unwrap().error_type, "not_found");
    }

    #[test]
    fn persistence_errors_hide_their_cause() {
        let error = ServiceError::Persistence {
            source: anyhow::anyhow!("disk on fire"),
        };
        let (status, body) = service_error_to_http(error);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("disk on fire"));
    }
}
