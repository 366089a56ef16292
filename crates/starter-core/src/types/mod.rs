//! Core types for stack-starter

mod feature;
mod language;
mod package_manager;
mod runtime_config;
mod selection;

pub use feature::Feature;
pub use language::Language;
pub use package_manager::PackageManager;
pub use runtime_config::{ExecutionConfig, RuntimeConfig, SelectionDefaults};
pub use selection::Selection;
