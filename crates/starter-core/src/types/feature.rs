//! Selectable features (libraries and tooling added on top of the scaffold)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Optional library or tooling addition
///
/// Variant order is the canonical install order used by the plan builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    React,
    Vite,
    #[serde(rename = "tailwindcss")]
    TailwindCss,
    ReactRouter,
    Axios,
    ReduxToolkit,
    Zustand,
    ChakraUi,
    FramerMotion,
    LintFormat,
}

impl Feature {
    /// Get all features, in prompt order
    pub fn all() -> Vec<Self> {
        vec![
            Self::React,
            Self::Vite,
            Self::TailwindCss,
            Self::ReactRouter,
            Self::Axios,
            Self::ReduxToolkit,
            Self::Zustand,
            Self::ChakraUi,
            Self::FramerMotion,
            Self::LintFormat,
        ]
    }

    /// Command-line slug
    pub fn slug(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vite => "vite",
            Self::TailwindCss => "tailwindcss",
            Self::ReactRouter => "react-router",
            Self::Axios => "axios",
            Self::ReduxToolkit => "redux-toolkit",
            Self::Zustand => "zustand",
            Self::ChakraUi => "chakra-ui",
            Self::FramerMotion => "framer-motion",
            Self::LintFormat => "lint-format",
        }
    }

    /// Label shown in prompts and written verbatim into the README
    pub fn label(&self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Vite => "Vite",
            Self::TailwindCss => "TailwindCSS",
            Self::ReactRouter => "React Router",
            Self::Axios => "Axios",
            Self::ReduxToolkit => "Redux Toolkit",
            Self::Zustand => "Zustand",
            Self::ChakraUi => "Chakra UI",
            Self::FramerMotion => "Framer Motion",
            Self::LintFormat => "ESLint + Prettier",
        }
    }

    /// Short description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Self::React => "UI library (provided by the Vite template)",
            Self::Vite => "Build tool and dev server (provided by the scaffold)",
            Self::TailwindCss => "Utility-first CSS via the Vite plugin",
            Self::ReactRouter => "Client-side routing",
            Self::Axios => "Promise-based HTTP client",
            Self::ReduxToolkit => "Opinionated Redux state management",
            Self::Zustand => "Minimal hook-based state management",
            Self::ChakraUi => "Component library (bundles Framer Motion)",
            Self::FramerMotion => "Animation library",
            Self::LintFormat => "ESLint and Prettier as dev dependencies",
        }
    }

    /// Parse from a slug or a label
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = normalize(tag);
        Self::all()
            .into_iter()
            .find(|f| normalize(f.slug()) == normalized || normalize(f.label()) == normalized)
    }

    /// Parse a list of tags into a feature set
    ///
    /// Unrecognized tags contribute nothing; they are only logged.
    pub fn from_tags<I, S>(tags: I) -> BTreeSet<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .filter_map(|tag| {
                let tag = tag.as_ref();
                let feature = Self::from_tag(tag);
                if feature.is_none() {
                    debug!("Ignoring unknown feature tag: {}", tag);
                }
                feature
            })
            .collect()
    }
}

/// Lowercase and drop separators so "React Router", "react-router" and
/// "react_router" compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '+')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_accepts_slug_and_label() {
        assert_eq!(Feature::from_tag("react-router"), Some(Feature::ReactRouter));
        assert_eq!(Feature::from_tag("React Router"), Some(Feature::ReactRouter));
        assert_eq!(Feature::from_tag("ESLint + Prettier"), Some(Feature::LintFormat));
        assert_eq!(Feature::from_tag("TailwindCSS"), Some(Feature::TailwindCss));
        assert_eq!(Feature::from_tag("Chakra UI"), Some(Feature::ChakraUi));
        assert_eq!(Feature::from_tag("svelte"), None);
    }

    #[test]
    fn test_from_tags_ignores_unknown() {
        let features = Feature::from_tags(["axios", "jquery", "TailwindCSS"]);
        assert_eq!(
            features.into_iter().collect::<Vec<_>>(),
            vec![Feature::TailwindCss, Feature::Axios]
        );
    }

    #[test]
    fn test_ordering_is_canonical() {
        let mut all = Feature::all();
        all.reverse();
        all.sort();
        assert_eq!(all, Feature::all());
    }

    #[test]
    fn test_slugs_round_trip() {
        for feature in Feature::all() {
            assert_eq!(Feature::from_tag(feature.slug()), Some(feature));
        }
    }
}
