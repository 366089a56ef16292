//! Package manager selection

use serde::{Deserialize, Serialize};

/// Package manager used to scaffold and install dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Get all available package managers, in prompt order
    pub fn all() -> Vec<Self> {
        vec![Self::Npm, Self::Yarn, Self::Pnpm]
    }

    /// Executable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Subcommand that adds a dependency to package.json
    ///
    /// `yarn install <pkg>` is rejected by yarn, so yarn and pnpm use `add`.
    pub fn add_verb(&self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Yarn | Self::Pnpm => "add",
        }
    }

    /// Command that starts the dev server
    pub fn run_dev_command(&self) -> String {
        match self {
            Self::Npm => "npm run dev".to_string(),
            other => format!("{} dev", other.as_str()),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|pm| pm.as_str() == s_lower)
            .ok_or_else(|| crate::error::Error::invalid_package_manager(s))
    }
}
