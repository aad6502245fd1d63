//! `netgrammar config` – show config path and effective values.

use anyhow::Result;
use netgrammar_core::config::{self, NetgrammarConfig};

pub fn run_config(cfg: &NetgrammarConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
