use std::path::PathBuf;

use eyre::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Process configuration. Pack sizes are not part of it: they reset to the
/// engine defaults on every boot and change only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub bind_port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_owned(),
            bind_port: 9000,
        }
    }
}

/// Loads configuration from the TOML file named by the `CONFIG` env var
/// (default `packwise.toml`). A missing file falls back to defaults; an
/// unreadable one is an error. The `PORT` env var overrides the bind port.
pub fn load() -> eyre::Result<ServiceConfig> {
    let path = PathBuf::from(std::env::var("CONFIG").unwrap_or_else(|_| "packwise.toml".to_owned()));

    let mut config = match std::fs::read_to_string(&path) {
        Ok(raw) => toml::from_str::<ServiceConfig>(&raw)
            .wrap_err_with(|| format!("invalid service config file {path:?}"))?,
        Err(_) => {
            debug!("no config file at {:?}, using defaults", &path);
            ServiceConfig::default()
        }
    };

    if let Ok(port) = std::env::var("PORT") {
        config.bind_port = port
            .parse()
            .wrap_err_with(|| format!("PORT must be a valid port number, got {port:?}"))?;
    }

    Ok(config)
}
