//! Error types for starter-core

use thiserror::Error;

/// Result type alias using starter-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for stack-starter
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// Selection violates an invariant (empty name, missing root, no features)
    #[error("Invalid selection: {message}")]
    InvalidSelection { message: String },

    /// Unknown language
    #[error("Unknown language: {language}. Valid languages: javascript, typescript")]
    InvalidLanguage { language: String },

    /// Unknown package manager
    #[error("Unknown package manager: {manager}. Valid package managers: npm, yarn, pnpm")]
    InvalidPackageManager { manager: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection {
            message: message.into(),
        }
    }

    /// Create an invalid language error
    pub fn invalid_language(language: impl Into<String>) -> Self {
        Self::InvalidLanguage {
            language: language.into(),
        }
    }

    /// Create an invalid package manager error
    pub fn invalid_package_manager(manager: impl Into<String>) -> Self {
        Self::InvalidPackageManager {
            manager: manager.into(),
        }
    }
}
