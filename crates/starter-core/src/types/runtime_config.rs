//! Runtime configuration types
//!
//! Loaded by [`crate::config::HierarchicalConfigLoader`] from embedded
//! defaults, the user's config file and `STARTER_*` environment variables.

use super::{Language, PackageManager};
use serde::{Deserialize, Serialize};

/// Resolved runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Values offered when the user does not choose explicitly
    #[serde(default)]
    pub defaults: SelectionDefaults,

    /// How the command plan is executed
    #[serde(default)]
    pub execution: ExecutionConfig,
}

/// Default answers for the interactive prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SelectionDefaults {
    #[serde(default = "default_language")]
    pub language: Language,

    #[serde(default = "default_package_manager")]
    pub package_manager: PackageManager,

    #[serde(default = "default_project_name")]
    pub project_name: String,
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            language: default_language(),
            package_manager: default_package_manager(),
            project_name: default_project_name(),
        }
    }
}

/// Command execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExecutionConfig {
    /// Shell that runs the command plan as a `-c` script
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Extra wait after the shell session exits, before patching
    #[serde(default)]
    pub settle_delay_secs: u64,

    /// Abort the session at the first failing command (`set -e`)
    #[serde(default)]
    pub stop_on_error: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            settle_delay_secs: 0,
            stop_on_error: false,
        }
    }
}

fn default_language() -> Language {
    Language::TypeScript
}
fn default_package_manager() -> PackageManager {
    PackageManager::Npm
}
fn default_project_name() -> String {
    "my-app".to_string()
}
fn default_shell() -> String {
    "sh".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
defaults:
  package-manager: pnpm
execution:
  settle-delay-secs: 5
"#;
        let config: RuntimeConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.defaults.package_manager, PackageManager::Pnpm);
        assert_eq!(config.defaults.language, Language::TypeScript);
        assert_eq!(config.defaults.project_name, "my-app");
        assert_eq!(config.execution.settle_delay_secs, 5);
        assert_eq!(config.execution.shell, "sh");
        assert!(!config.execution.stop_on_error);
    }
}
