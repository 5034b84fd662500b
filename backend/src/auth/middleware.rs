//! Middleware for protecting authenticated routes.
//!
//! Validates the bearer token on incoming requests. A missing or malformed
//! `Authorization` header yields 401; a token that fails validation (bad
//! signature or expired) yields 403.

use crate::api::common::service_error_to_http;
use crate::errors::ServiceError;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// JWT authentication middleware
pub async fn jwt_auth(mut request: Request, next: Next) -> Result<Response, (StatusCode, String)> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            service_error_to_http(ServiceError::unauthenticated("Missing authorization header"))
        })?;

    // Check if it's a Bearer token
    if !auth_header.starts_with("Bearer ") {
        return Err(service_error_to_http(ServiceError::unauthenticated(
            "Authorization header must be a bearer token",
        )));
    }

    let token = &auth_header[7..]; // Remove "Bearer " prefix

    let jwt_utils = JwtUtils::new().map_err(|_| {
        service_error_to_http(ServiceError::internal_error("JWT configuration error"))
    })?;

    match jwt_utils.validate_token(token) {
        Ok(claims) => {
            // Add claims to request extensions for use in handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}
