//! # starter-core
//!
//! Core library for stack-starter providing:
//! - Selection types (language, features, package manager)
//! - Runtime configuration with hierarchical loading
//! - Shared error types

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use types::{Feature, Language, PackageManager, RuntimeConfig, Selection};
pub use utils::get_home_dir;
