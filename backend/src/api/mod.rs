//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the car collection API,
//! excluding core authentication routes which are handled separately.

pub mod cars;
pub mod common;
