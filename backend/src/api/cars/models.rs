//! Request payloads for the car collection endpoints.

use serde::Deserialize;
use validator::Validate;

/// Payload for adding a car
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,

    pub year: i32,

    pub price: f64,
}

/// Payload for editing a car. Absent fields keep their current value;
/// present fields are applied as-is, zero and empty included.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCarRequest {
    pub company: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
}
