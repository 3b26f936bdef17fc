//! Session configuration loaded from YAML.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ClientError;

fn default_timeout_secs() -> u64 {
    10
}

/// Target service settings, loaded once per test session.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ClientError::File {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ClientError> {
        serde_yaml::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_url_and_timeout() {
        let config = Config::from_yaml("base_url: http://localhost:3000\ntimeout_secs: 4\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout(), Duration::from_secs(4));
    }

    #[test]
    fn timeout_defaults_to_ten_seconds() {
        let config = Config::from_yaml("base_url: http://localhost:3000\n").unwrap();
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn missing_base_url_is_a_config_error() {
        let err = Config::from_yaml("timeout_secs: 4\n").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = Config::load("no/such/config.yaml").unwrap_err();
        assert!(matches!(err, ClientError::File { .. }));
    }

    #[test]
    fn checked_in_config_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/config.yaml");
        let config = Config::load(path).unwrap();
        assert!(config.base_url.starts_with("http"));
    }
}
