//! Module for store setup and shared application state.
//!
//! This module is responsible for binding the repository implementations used
//! by the running server and bundling them into the state injected into every
//! request handler.

use crate::config::Config;
use crate::repositories::user_repository::{InMemoryUserRepository, UserRepository};
use crate::repositories::vehicle_repository::{FileVehicleRepository, VehicleRepository};
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod models;

/// Shared state handed to handlers via `Extension`.
///
/// Repositories are held as trait objects so tests can substitute in-memory
/// fakes for the production bindings.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    /// Serializes mutating car operations; the read-modify-write cycle against
    /// the store file must not interleave.
    pub car_writes: Arc<Mutex<()>>,
}

impl AppState {
    /// Binds the production stores: in-memory users, file-backed cars.
    pub fn new(config: &Config) -> Self {
        AppState {
            users: Arc::new(InMemoryUserRepository::new()),
            vehicles: Arc::new(FileVehicleRepository::new(config.cars_file.clone())),
            car_writes: Arc::new(Mutex::new(())),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed entirely by in-memory stores.
    pub fn in_memory() -> Self {
        use crate::repositories::vehicle_repository::InMemoryVehicleRepository;

        AppState {
            users: Arc::new(InMemoryUserRepository::new()),
            vehicles: Arc::new(InMemoryVehicleRepository::new()),
            car_writes: Arc::new(Mutex::new(())),
        }
    }
}
