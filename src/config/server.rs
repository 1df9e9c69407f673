use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::thread;

/// Server configuration for the HTTP listener
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid PORT".to_string()))?,
            workers: match env::var("SERVER_WORKERS") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid SERVER_WORKERS".to_string()))?,
                Err(_) => default_workers(),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// 2x CPU cores for an I/O-bound workload
fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(2)
}
