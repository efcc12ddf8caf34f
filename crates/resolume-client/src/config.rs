//! Client configuration.
//!
//! Host and port of the remote webserver, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Path prefix of every API endpoint.
pub const API_PREFIX: &str = "/api/v1";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Connection settings for the remote webserver.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Host name or IP address running Arena/Avenue.
    pub host: String,
    /// Webserver port configured in the application preferences.
    pub port: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load configuration from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("read config {:?}: {e}", path)))?;
        Self::from_toml(&raw).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("parse config {:?}: {msg}", path)),
            other => other,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let cfg = toml::from_str::<ClientConfig>(raw).map_err(|e| Error::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(Error::Config("port must not be 0".to_string()));
        }
        Ok(())
    }

    /// Base URL all endpoint paths are appended to.
    pub fn base_url(&self) -> String {
        let host = self.host.trim();
        if host.contains(':') && !host.starts_with('[') {
            format!("http://[{host}]:{}{API_PREFIX}", self.port)
        } else {
            format!("http://{host}:{}{API_PREFIX}", self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_webserver() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url(), "http://127.0.0.1:8080/api/v1");
    }

    #[test]
    fn from_toml_fills_missing_fields() {
        let cfg = ClientConfig::from_toml("host = \"192.168.1.20\"\n").unwrap();
        assert_eq!(cfg, ClientConfig::new("192.168.1.20", 8080));
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        let cfg = ClientConfig::new("::1", 7000);
        assert_eq!(cfg.base_url(), "http://[::1]:7000/api/v1");
    }

    #[test]
    fn empty_host_is_rejected() {
        let err = ClientConfig::from_toml("host = \"\"\nport = 8080\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("resolume-client-missing-config.toml");
        let err = ClientConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }
}
