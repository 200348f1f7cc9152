//! Configuration module for FlexiRate.
//!
//! This module provides configuration loading from environment variables,
//! with defaults that work for local development.

use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MODEL_PATH: &str = "models/flexirate_claim_model.json";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for any key that is missing or unparseable.
    pub fn from_env() -> Self {
        Self {
            host: env::var("FLEXIRATE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("FLEXIRATE_PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .unwrap_or(DEFAULT_PORT),
            model_path: env::var("FLEXIRATE_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),
        }
    }

    /// Socket address string the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
