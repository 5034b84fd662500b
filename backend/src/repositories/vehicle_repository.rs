//! Repository for car records.
//!
//! The production binding keeps the whole collection as a JSON array in a
//! single file; every operation reads or rewrites the file in full. Read and
//! write failures surface as typed errors so callers choose how to degrade.

use crate::storage::models::Vehicle;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Store contract for the car collection.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Reads every car record from the backing store. A store that does not
    /// exist yet is empty, not an error.
    async fn load_all(&self) -> Result<Vec<Vehicle>>;

    /// Replaces the backing store contents with the given records.
    async fn save_all(&self, records: &[Vehicle]) -> Result<()>;
}

/// File-backed car store.
pub struct FileVehicleRepository {
    path: PathBuf,
}

impl FileVehicleRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl VehicleRepository for FileVehicleRepository {
    async fn load_all(&self) -> Result<Vec<Vehicle>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read car store file: {}", self.path.display()))?;

        let records = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse car store file: {}", self.path.display()))?;

        Ok(records)
    }

    async fn save_all(&self, records: &[Vehicle]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;

        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("Failed to write car store file: {}", self.path.display()))?;

        Ok(())
    }
}

/// In-memory car store for tests.
#[cfg(test)]
pub struct InMemoryVehicleRepository {
    records: tokio::sync::Mutex<Vec<Vehicle>>,
}

#[cfg(test)]
impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self {
            records: tokio::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn load_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.records.lock().await.clone())
    }

    async fn save_all(&self, records: &[Vehicle]) -> Result<()> {
        *self.records.lock().await = records.to_vec();
        Ok(())
    }
}
