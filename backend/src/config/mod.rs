//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the JWT signing secret, token lifetime, server port, and the path to the
//! car store file.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub server_port: u16,
    pub cars_file: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `JWT_SECRET` has no default; startup fails without it.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;

        let jwt_expires_in_seconds = env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let cars_file = env::var("CARS_FILE")
            .unwrap_or_else(|_| "cars.json".to_string())
            .into();

        Ok(Config {
            jwt_secret,
            jwt_expires_in_seconds,
            server_port,
            cars_file,
        })
    }
}
