//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business
//! operations and orchestrate interactions between the repositories and the
//! HTTP handlers.

pub mod user_service;
pub mod vehicle_service;
