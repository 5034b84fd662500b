//! Car collection business logic service.
//!
//! Every mutating operation runs a full load-mutate-save cycle against the
//! car store while holding the shared write lock, so concurrent mutations
//! never interleave. Reads fail open: an unreadable store is treated as
//! empty, with a warning logged.

use crate::api::cars::models::{CreateCarRequest, UpdateCarRequest};
use crate::errors::{ServiceError, ServiceResult};
use crate::storage::AppState;
use crate::storage::models::Vehicle;
use tracing::warn;
use validator::Validate;

pub struct VehicleService<'a> {
    state: &'a AppState,
}

impl<'a> VehicleService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Returns every car in the store.
    pub async fn list_cars(&self) -> Vec<Vehicle> {
        self.load_or_empty().await
    }

    /// Returns the car with the given id.
    pub async fn get_car(&self, id: i64) -> ServiceResult<Vehicle> {
        self.load_or_empty()
            .await
            .into_iter()
            .find(|car| car.id == id)
            .ok_or_else(|| ServiceError::not_found("Car", id.to_string()))
    }

    /// Adds a new car and persists the collection.
    pub async fn create_car(&self, payload: CreateCarRequest) -> ServiceResult<Vehicle> {
        if let Err(validation_errors) = payload.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error.message.as_ref().unwrap_or(&"Invalid value".into())
                        )
                    })
                })
                .collect();
            return Err(ServiceError::validation(error_messages.join(", ")));
        }

        let _write = self.state.car_writes.lock().await;
        let mut cars = self.load_or_empty().await;

        // max + 1, not len + 1: ids must stay unique after middle deletions.
        let id = cars.iter().map(|car| car.id).max().unwrap_or(0) + 1;
        let car = Vehicle {
            id,
            company: payload.company,
            model: payload.model,
            year: payload.year,
            price: payload.price,
        };

        cars.push(car.clone());
        self.state.vehicles.save_all(&cars).await?;
        Ok(car)
    }

    /// Applies the fields present in the payload to an existing car.
    pub async fn update_car(&self, id: i64, payload: UpdateCarRequest) -> ServiceResult<Vehicle> {
        let _write = self.state.car_writes.lock().await;
        let mut cars = self.load_or_empty().await;

        let car = cars
            .iter_mut()
            .find(|car| car.id == id)
            .ok_or_else(|| ServiceError::not_found("Car", id.to_string()))?;

        if let Some(company) = payload.company {
            car.company = company;
        }
        if let Some(model) = payload.model {
            car.model = model;
        }
        if let Some(year) = payload.year {
            car.year = year;
        }
        if let Some(price) = payload.price {
            car.price = price;
        }
        let updated = car.clone();

        self.state.vehicles.save_all(&cars).await?;
        Ok(updated)
    }

    /// Removes the car with the given id and persists the collection.
    pub async fn delete_car(&self, id: i64) -> ServiceResult<()> {
        let _write = self.state.car_writes.lock().await;
        let mut cars = self.load_or_empty().await;

        let index = cars
            .iter()
            .position(|car| car.id == id)
            .ok_or_else(|| ServiceError::not_found("Car", id.to_string()))?;

        cars.remove(index);
        self.state.vehicles.save_all(&cars).await?;
        Ok(())
    }

    /// Reads the store, treating a failed read as an empty collection.
    async fn load_or_empty(&self) -> Vec<Vehicle> {
        match self.state.vehicles.load_all().await {
            Ok(cars) => cars,
            Err(e) => {
                warn!("Failed to load car records, treating store as empty: {:#}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_car(company: &str, model: &str, year: i32, price: f64) -> CreateCarRequest {
        CreateCarRequest {
            company: company.to_string(),
            model: model.to_string(),
            year,
            price,
        }
    }

    #[tokio::test]
    async fn created_car_round_trips_through_get() {
        let state = AppState::in_memory();
        let service = VehicleService::new(&state);

        let created = service
            .create_car(new_car("Toyota", "Corolla", 2020, 20000.0))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = service.get_car(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn rejects_blank_fields_on_create() {
        let state = AppState::in_memory();
        let service = VehicleService::new(&state);

        let error = service
            .create_car(new_car("", "Corolla", 2020, 20000.0))
            .await
            .unwrap_err();
        assert!(matches!(error, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn update_touches_only_the_fields_present() {
        let state = AppState::in_memory();
        let service = VehicleService::new(&state);

        let created = service
            .create_car(new_car("Toyota", "Corolla", 2020, 20000.0))
            .await
            .unwrap();

        let updated = service
            .update_car(
                created.id,
                UpdateCarRequest {
                    model: Some("Camry".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.model, "Camry");
        assert_eq!(updated.company, "Toyota");
        assert_eq!(updated.year, 2020);
        assert_eq!(updated.price, 20000.0);
    }

    #[tokio::test]
    async fn update_applies_explicit_zero_values() {
        let state = AppState::in_memory();
        let service = VehicleService::new(&state);

        let created = service
            .create_car(new_car("Toyota", "Corolla", 2020, 20000.0))
            .await
            .unwrap();

        let updated = service
            .update_car(
                created.id,
                UpdateCarRequest {
                    price: Some(0.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 0.0);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let state = AppState::in_memory();
        let service = VehicleService::new(&state);

        let error = service
            .update_car(9, UpdateCarRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(error, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_the_car_from_listings() {
        let state = AppState::in_memory();
        let service = VehicleService::new(&state);

        let created = service
            .create_car(new_car("Toyota", "Corolla", 2020, 20000.0))
            .await
            .unwrap();

        service.delete_car(created.id).await.unwrap();

        assert!(service.list_cars().await.is_empty());
        let error = service.get_car(created.id).await.unwrap_err();
        assert!(matches!(error, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_names_it() {
        let state = AppState::in_memory();
        let service = VehicleService::new(&state);

        let error = service.delete_car(42).await.unwrap_err();
        match error {
            ServiceError::NotFound { entity, identifier } => {
                assert_eq!(entity, "Car");
                assert_eq!(identifier, "42");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn ids_stay_unique_after_a_middle_deletion() {
        let state = AppState::in_memory();
        let service = VehicleService::new(&state);

        for model in ["Corolla", "Camry", "Yaris"] {
            service
                .create_car(new_car("Toyota", model, 2020, 20000.0))
                .await
                .unwrap();
        }

        service.delete_car(2).await.unwrap();
        let created = service
            .create_car(new_car("Honda", "Civic", 2021, 22000.0))
            .await
            .unwrap();

        assert_eq!(created.id, 4);

        let cars = service.list_cars().await;
        let mut ids: Vec<i64> = cars.iter().map(|car| car.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cars.len());
    }
}
