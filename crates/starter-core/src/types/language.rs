//! Project language

use serde::{Deserialize, Serialize};

/// Language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    /// Get all available languages, in prompt order
    pub fn all() -> Vec<Self> {
        vec![Self::JavaScript, Self::TypeScript]
    }

    /// Lowercase identifier used in config files and flags
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
        }
    }

    /// Vite template identifier for this language
    pub fn vite_template(&self) -> &'static str {
        match self {
            Self::JavaScript => "react",
            Self::TypeScript => "react-ts",
        }
    }

    /// Extension of the generated build-tool config file
    pub fn config_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::JavaScript => &["js", "jsx"],
            Self::TypeScript => &["ts", "tsx"],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Language {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|lang| lang.as_str() == s_lower || lang.aliases().contains(&s_lower.as_str()))
            .ok_or_else(|| crate::error::Error::invalid_language(s))
    }
}
