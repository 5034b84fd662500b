//! Module for persistence abstractions and their bindings.
//!
//! Repositories are defined as traits so services depend only on the store
//! contract; the production bindings live alongside them.

pub mod user_repository;
pub mod vehicle_repository;
