//! Worker roster loading from config.toml
//!
//! The worker directory is static reference data: it is read from a TOML
//! file at startup and never persisted or mutated. Complaints reference
//! roster entries by id.

use crate::entities::Worker;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// The worker roster, in directory order
    pub workers: Vec<Worker>,
}

/// Loads the worker roster from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the worker roster from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_worker_config() {
        let toml_str = r#"
            [[workers]]
            id = "1"
            name = "Raj Kumar"
            phone = "+91-9876543210"
            price_steel = 45
            price_plastic = 20
            price_paper = 15
            rating = 4.8
            completed_jobs = 245

            [[workers]]
            id = "2"
            name = "Priya Sharma"
            phone = "+91-9876543211"
            price_steel = 48
            price_plastic = 22
            price_paper = 16
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.workers.len(), 2);
        assert_eq!(config.workers[0].id, "1");
        assert_eq!(config.workers[0].price_steel, 45);
        assert_eq!(config.workers[0].rating, Some(4.8));
        assert_eq!(config.workers[0].completed_jobs, Some(245));

        // rating and completed_jobs are optional
        assert_eq!(config.workers[1].name, "Priya Sharma");
        assert!(config.workers[1].rating.is_none());
        assert!(config.workers[1].completed_jobs.is_none());
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = load_config("does-not-exist.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
