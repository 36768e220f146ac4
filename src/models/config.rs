//! Configuration module for Trust Scanner
//!
//! Uses defaults from utils/constants.rs, overridden by environment.
//! No hardcoded paths or ports in this file!

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};

use super::errors::{AppError, ErrorCode};
use crate::utils::constants::{DEFAULT_ABI_PATH, DEFAULT_HOST, DEFAULT_MODEL_PATH, DEFAULT_PORT};

/// Runtime configuration for the scanner API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Serialized classifier artifact
    pub model_path: PathBuf,
    /// Contract ABI description
    pub abi_path: PathBuf,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            abi_path: PathBuf::from(DEFAULT_ABI_PATH),
        }
    }
}

impl ScannerConfig {
    /// Build config from process environment
    ///
    /// - `SCANNER_HOST` - bind host
    /// - `PORT` / `SCANNER_PORT` - bind port (`PORT` wins, for PaaS hosts)
    /// - `TRUST_MODEL_PATH` - classifier artifact
    /// - `CONTRACT_ABI_PATH` - contract ABI
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("SCANNER_HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT").or_else(|| lookup("SCANNER_PORT")) {
            Some(raw) => match raw.parse::<u16>() {
                Ok(p) => p,
                Err(_) => {
                    let err = AppError::invalid_config(format!("port '{}' is not a valid u16", raw));
                    warn!(code = err.code_str(), "{}, using {}", err, defaults.port);
                    defaults.port
                }
            },
            None => defaults.port,
        };

        let model_path = lookup("TRUST_MODEL_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.model_path);

        let abi_path = lookup("CONTRACT_ABI_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.abi_path);

        let config = Self {
            host,
            port,
            model_path,
            abi_path,
        };
        info!(
            model = %config.model_path.display(),
            abi = %config.abi_path.display(),
            "⚙️ Configuration loaded"
        );
        config
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                AppError::with_source(
                    ErrorCode::ConfigInvalidValue,
                    format!("invalid bind address {}:{}", self.host, self.port),
                    e,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ScannerConfig::from_lookup(|_| None);
        assert_eq!(config, ScannerConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, PathBuf::from("models/trust_model.json"));
    }

    #[test]
    fn test_port_precedence() {
        let config = ScannerConfig::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("SCANNER_PORT", "9100"),
        ]));
        assert_eq!(config.port, 9000);

        let config = ScannerConfig::from_lookup(lookup_from(&[("SCANNER_PORT", "9100")]));
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = ScannerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_path_overrides() {
        let config = ScannerConfig::from_lookup(lookup_from(&[
            ("TRUST_MODEL_PATH", "/srv/model.json"),
            ("CONTRACT_ABI_PATH", ""),
        ]));
        assert_eq!(config.model_path, PathBuf::from("/srv/model.json"));
        assert_eq!(config.abi_path, PathBuf::from("models/contract_abi.json"));
    }

    #[test]
    fn test_bind_addr() {
        let config = ScannerConfig::default();
        assert_eq!(config.bind_addr().unwrap().port(), 8080);

        let bad = ScannerConfig {
            host: "not a host".to_string(),
            ..ScannerConfig::default()
        };
        assert!(bad.bind_addr().is_err());
    }
}
