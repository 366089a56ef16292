//! CLI command implementations

pub mod config;
pub mod features;
pub mod new;
pub mod plan;
mod selection;

use anyhow::{Context, Result};
use camino::Utf8Path;
use starter_core::{HierarchicalConfigLoader, RuntimeConfig};

/// Config loader honoring the global `--config` flag
fn config_loader(config: Option<&Utf8Path>) -> Result<HierarchicalConfigLoader> {
    let loader = HierarchicalConfigLoader::new().context("Failed to locate config directory")?;
    Ok(match config {
        Some(path) => loader.with_file(path.to_path_buf()),
        None => loader,
    })
}

/// Load the runtime config: embedded defaults, config file, then env overrides
fn load_runtime_config(config: Option<&Utf8Path>) -> Result<RuntimeConfig> {
    config_loader(config)?
        .load_runtime_config()
        .context("Failed to load runtime configuration")
}
