//! Utility functions

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable so tests and containers can
/// redirect it, falling back to the platform lookup.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir().ok_or_else(|| Error::invalid_config("Could not determine home directory"))
}

/// Get the stack-starter configuration directory (~/.stack-starter)
pub fn get_starter_dir() -> Result<PathBuf> {
    Ok(get_home_dir()?.join(".stack-starter"))
}
