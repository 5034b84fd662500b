//! Handler functions for the car collection API endpoints.
//!
//! These functions process requests for car data and delegate the CRUD
//! semantics to the `vehicle_service`.

use crate::api::cars::models::{CreateCarRequest, UpdateCarRequest};
use crate::api::common::service_error_to_http;
use crate::services::vehicle_service::VehicleService;
use crate::storage::AppState;
use crate::storage::models::Vehicle;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};

/// Handle listing all cars
#[axum::debug_handler]
pub async fn list_cars(
    Extension(state): Extension<AppState>,
) -> Result<ResponseJson<Vec<Vehicle>>, (StatusCode, String)> {
    let service = VehicleService::new(&state);

    Ok(ResponseJson(service.list_cars().await))
}

/// Handle fetching a single car by id
#[axum::debug_handler]
pub async fn get_car(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<Vehicle>, (StatusCode, String)> {
    let service = VehicleService::new(&state);

    match service.get_car(id).await {
        Ok(car) => Ok(ResponseJson(car)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle adding a new car
#[axum::debug_handler]
pub async fn create_car(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CreateCarRequest>,
) -> Result<(StatusCode, ResponseJson<Vehicle>), (StatusCode, String)> {
    let service = VehicleService::new(&state);

    match service.create_car(payload).await {
        Ok(car) => Ok((StatusCode::CREATED, ResponseJson(car))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle editing an existing car
#[axum::debug_handler]
pub async fn update_car(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCarRequest>,
) -> Result<ResponseJson<Vehicle>, (StatusCode, String)> {
    let service = VehicleService::new(&state);

    match service.update_car(id, payload).await {
        Ok(car) => Ok(ResponseJson(car)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle deleting a car by id
#[axum::debug_handler]
pub async fn delete_car(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<serde_json::Value>, (StatusCode, String)> {
    let service = VehicleService::new(&state);

    match service.delete_car(id).await {
        Ok(()) => Ok(ResponseJson(serde_json::json!({
            "message": "Car deleted successfully"
        }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
