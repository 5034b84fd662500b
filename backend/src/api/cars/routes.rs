//! Defines the HTTP routes for the car collection.
//!
//! These routes map the car CRUD paths to handler functions. Every route
//! requires a valid bearer token.

use super::handlers::{create_car, delete_car, get_car, list_cars, update_car};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

/// Creates the cars router with all car-related routes
pub fn cars_router() -> Router {
    Router::new()
        .route("/", get(list_cars))
        .route("/{id}", get(get_car))
        .route("/add-car", post(create_car))
        .route("/edit-car/{id}", put(update_car))
        .route("/delete-car/{id}", delete(delete_car))
        .layer(middleware::from_fn(jwt_auth))
}
