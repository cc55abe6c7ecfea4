//! Configuration module for the Dogs backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Upstream endpoint the fetch workflow calls for a random image.
pub const DEFAULT_IMAGE_API_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// Fetch cycles performed per add-items invocation.
pub const DEFAULT_FETCH_COUNT: usize = 5;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Random-image endpoint URL
    pub image_api_url: String,
    /// Number of sequential fetch cycles per add-items request
    pub fetch_count: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("DOGS_DB_PATH")
            .unwrap_or_else(|_| "./data/dogs.sqlite".to_string())
            .into();

        let bind_addr = env::var("DOGS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid DOGS_BIND_ADDR format");

        let log_level = env::var("DOGS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let image_api_url =
            env::var("DOGS_IMAGE_API_URL").unwrap_or_else(|_| DEFAULT_IMAGE_API_URL.to_string());

        let fetch_count = env::var("DOGS_FETCH_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FETCH_COUNT);

        Self {
            db_path,
            bind_addr,
            log_level,
            image_api_url,
            fetch_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("DOGS_DB_PATH");
        env::remove_var("DOGS_BIND_ADDR");
        env::remove_var("DOGS_LOG_LEVEL");
        env::remove_var("DOGS_IMAGE_API_URL");
        env::remove_var("DOGS_FETCH_COUNT");

        let config = Config::from_env();

        assert_eq!(config.db_path, PathBuf::from("./data/dogs.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.image_api_url, DEFAULT_IMAGE_API_URL);
        assert_eq!(config.fetch_count, 5);
    }
}
