//! Core domain entities held by the stores.

use serde::{Deserialize, Serialize};

/// A registered user. Lives in process memory only; lost on restart.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// A car record as persisted in the store file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub company: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
}
