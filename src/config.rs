// src/config.rs
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the booking backend, e.g. "http://localhost:3000".
    pub base_url: String,
    /// Path of the create-reservation endpoint.
    pub reservations_path: String,
    /// No timeout when unset; the request waits on the network layer.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            reservations_path: "/api/reservations".to_string(),
            timeout_secs: None,
            user_agent: concat!("stayview/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Load a YAML config file. Missing keys fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let cfg: ClientConfig = serde_yaml::from_str(raw)?;
        // Fail early on a bad url rather than on the first booking.
        cfg.reservations_url()?;
        Ok(cfg)
    }

    /// Full url of the create-reservation endpoint.
    pub fn reservations_url(&self) -> Result<Url, ConfigError> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(&self.reservations_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let cfg = ClientConfig::default();
        assert_eq!(
            cfg.reservations_url().unwrap().as_str(),
            "http://localhost:3000/api/reservations"
        );
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = ClientConfig::from_yaml("base_url: https://stays.example.com\n").unwrap();
        assert_eq!(cfg.base_url, "https://stays.example.com");
        assert_eq!(cfg.reservations_path, "/api/reservations");
        assert_eq!(
            cfg.reservations_url().unwrap().as_str(),
            "https://stays.example.com/api/reservations"
        );
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let err = ClientConfig::from_yaml("base_url: not a url\n").unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrl(_)));
    }

    #[test]
    fn load_reads_fixture() {
        let cfg = ClientConfig::load("fixtures/config.yml").unwrap();
        assert_eq!(cfg.timeout_secs, Some(30));
        assert_eq!(cfg.reservations_path, "/api/reservations");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("stayview_missing_config.yml");
        let err = ClientConfig::load(path).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
