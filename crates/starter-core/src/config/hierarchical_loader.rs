//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.stack-starter/config.yaml, or an explicit file)
//! 3. Environment variables (STARTER_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::RuntimeConfig;
use crate::utils::get_starter_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,

    /// Explicit config file, takes the place of `config_dir/config.yaml`
    config_file: Option<Utf8PathBuf>,
}

impl HierarchicalConfigLoader {
    /// Create a new hierarchical config loader rooted at ~/.stack-starter
    pub fn new() -> Result<Self> {
        let dir = get_starter_dir()?;
        let config_dir = Utf8PathBuf::from_path_buf(dir)
            .map_err(|p| Error::invalid_config(format!("Non UTF-8 config dir: {}", p.display())))?;
        Ok(Self {
            config_dir,
            config_file: None,
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir,
            config_file: None,
        }
    }

    /// Use an explicit config file instead of the one in the config directory
    ///
    /// Unlike the default location, an explicit file must exist.
    pub fn with_file(mut self, config_file: Utf8PathBuf) -> Self {
        self.config_file = Some(config_file);
        self
    }

    /// Load runtime configuration with hierarchical precedence
    pub fn load_runtime_config(&self) -> Result<RuntimeConfig> {
        let mut config = Self::load_embedded_config::<RuntimeConfig>("runtime-defaults.yaml")?;

        match &self.config_file {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(Error::config_not_found(explicit.as_str()));
                }
                let file_config = self.load_yaml_file::<serde_yaml_ng::Value>(explicit)?;
                config = Self::merge_runtime_config(config, file_config)?;
            }
            None => {
                let path = self.config_path();
                if path.exists() {
                    let file_config = self.load_yaml_file::<serde_yaml_ng::Value>(&path)?;
                    config = Self::merge_runtime_config(config, file_config)?;
                }
            }
        }

        self.apply_env_overrides(config)
    }

    /// Load an embedded configuration file
    fn load_embedded_config<T: DeserializeOwned>(filename: &str) -> Result<T> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        let config: T = serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })?;

        Ok(config)
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        debug!("Loading config file: {}", path);
        let content = fs::read_to_string(path)?;
        let config: T = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        Ok(config)
    }

    /// Merge two runtime configs (base is overridden by overlay)
    ///
    /// Keys missing from the overlay fall back to the embedded values rather
    /// than the serde defaults.
    fn merge_runtime_config(
        base: RuntimeConfig,
        overlay: serde_yaml_ng::Value,
    ) -> Result<RuntimeConfig> {
        let mut merged = serde_yaml_ng::to_value(base)?;
        merge_values(&mut merged, overlay);
        serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Invalid configuration value: {}", e)))
    }

    /// Apply environment variable overrides to runtime config
    fn apply_env_overrides(&self, mut config: RuntimeConfig) -> Result<RuntimeConfig> {
        if let Ok(val) = env::var("STARTER_LANGUAGE") {
            config.defaults.language = val.parse().map_err(|_| {
                Error::invalid_config("STARTER_LANGUAGE must be javascript or typescript")
            })?;
        }

        if let Ok(val) = env::var("STARTER_PACKAGE_MANAGER") {
            config.defaults.package_manager = val.parse().map_err(|_| {
                Error::invalid_config("STARTER_PACKAGE_MANAGER must be npm, yarn or pnpm")
            })?;
        }

        if let Ok(val) = env::var("STARTER_PROJECT_NAME") {
            if !val.trim().is_empty() {
                config.defaults.project_name = val.trim().to_string();
            }
        }

        if let Ok(val) = env::var("STARTER_SHELL") {
            if !val.trim().is_empty() {
                config.execution.shell = val;
            }
        }

        if let Ok(val) = env::var("STARTER_SETTLE_DELAY_SECS") {
            config.execution.settle_delay_secs = val.parse().map_err(|_| {
                Error::invalid_config("STARTER_SETTLE_DELAY_SECS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("STARTER_STOP_ON_ERROR") {
            config.execution.stop_on_error = val.parse().map_err(|_| {
                Error::invalid_config("STARTER_STOP_ON_ERROR must be true or false")
            })?;
        }

        Ok(config)
    }

    /// Path of the config file this loader reads
    pub fn config_path(&self) -> Utf8PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| self.config_dir.join(CONFIG_FILE_NAME))
    }
}

/// Recursively overlay mappings; any other overlay value replaces the base
fn merge_values(base: &mut serde_yaml_ng::Value, overlay: serde_yaml_ng::Value) {
    use serde_yaml_ng::Value;

    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}
