use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Configuration for the in-memory store
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Seed demo catalog data at startup. Defaults to on, the store is empty
    /// otherwise.
    pub seed_demo_data: bool,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Ok(StoreConfig {
            seed_demo_data: env::var("STORE_SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid STORE_SEED_DEMO_DATA".to_string())
                })?,
        })
    }
}
