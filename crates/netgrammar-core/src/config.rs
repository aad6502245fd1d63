use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::PORT_UNSET;

/// Global configuration loaded from `~/.config/netgrammar/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetgrammarConfig {
    /// Port an unset URL port stands for, per scheme (lower-case keys).
    #[serde(default = "default_ports")]
    pub default_ports: BTreeMap<String, i32>,
    /// Tracing filter used when `RUST_LOG` is not set (e.g. "info,netgrammar=debug").
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_ports() -> BTreeMap<String, i32> {
    [("ftp", 21), ("http", 80), ("https", 443), ("ws", 80), ("wss", 443)]
        .into_iter()
        .map(|(scheme, port)| (scheme.to_string(), port))
        .collect()
}

impl Default for NetgrammarConfig {
    fn default() -> Self {
        Self {
            default_ports: default_ports(),
            log_filter: None,
        }
    }
}

impl NetgrammarConfig {
    /// Default port for `scheme` (case-insensitive), or [`PORT_UNSET`] if unknown.
    pub fn default_port(&self, scheme: &str) -> i32 {
        self.default_ports
            .get(&scheme.to_ascii_lowercase())
            .copied()
            .unwrap_or(PORT_UNSET)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("netgrammar")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NetgrammarConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NetgrammarConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<NetgrammarConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: NetgrammarConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
