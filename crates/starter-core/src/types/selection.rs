//! User selection driving plan building and patching

use super::{Feature, Language, PackageManager};
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything collected from the user before scaffolding starts
///
/// Constructed through [`Selection::new`], which enforces a non-empty
/// project name, a non-empty feature set and an existing project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    language: Language,
    features: BTreeSet<Feature>,
    package_manager: PackageManager,
    project_name: String,
    project_root: Utf8PathBuf,
}

impl Selection {
    /// Create a validated selection
    pub fn new(
        language: Language,
        features: impl IntoIterator<Item = Feature>,
        package_manager: PackageManager,
        project_name: impl Into<String>,
        project_root: impl Into<Utf8PathBuf>,
    ) -> Result<Self> {
        let project_name = project_name.into().trim().to_string();
        let project_root = project_root.into();
        let features: BTreeSet<Feature> = features.into_iter().collect();

        validate_project_name(&project_name)?;

        if features.is_empty() {
            return Err(Error::invalid_selection("No technologies selected"));
        }

        if !project_root.is_dir() {
            return Err(Error::invalid_selection(format!(
                "Project root is not an existing directory: {}",
                project_root
            )));
        }

        Ok(Self {
            language,
            features,
            package_manager,
            project_name,
            project_root,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Selected features in canonical order
    pub fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Directory the project folder is created in
    pub fn project_root(&self) -> &Utf8Path {
        &self.project_root
    }

    /// Directory of the generated project (`project_root/project_name`)
    pub fn project_path(&self) -> Utf8PathBuf {
        self.project_root.join(&self.project_name)
    }
}

/// Reject names that are empty or would escape the project root when joined
fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_selection("Project name cannot be empty"));
    }

    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(Error::invalid_selection(format!(
            "Project name must be a single directory name: {}",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn root() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
        (temp, path)
    }

    #[test]
    fn test_valid_selection() {
        let (_temp, root) = root();
        let selection = Selection::new(
            Language::TypeScript,
            [Feature::Axios, Feature::TailwindCss],
            PackageManager::Pnpm,
            "  demo ",
            root.clone(),
        )
        .unwrap();

        assert_eq!(selection.project_name(), "demo");
        assert_eq!(selection.project_path(), root.join("demo"));
        assert!(selection.has(Feature::TailwindCss));
        assert!(!selection.has(Feature::Zustand));
        assert_eq!(
            selection.features().iter().copied().collect::<Vec<_>>(),
            vec![Feature::TailwindCss, Feature::Axios]
        );
    }

    #[test]
    fn test_empty_features_rejected() {
        let (_temp, root) = root();
        let err = Selection::new(Language::JavaScript, Vec::<Feature>::new(), PackageManager::Npm, "demo", root)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSelection { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_temp, root) = root();
        assert!(
            Selection::new(Language::JavaScript, [Feature::React], PackageManager::Npm, "   ", root)
                .is_err()
        );
    }

    #[test]
    fn test_nested_name_rejected() {
        let (_temp, root) = root();
        assert!(Selection::new(
            Language::JavaScript,
            [Feature::React],
            PackageManager::Npm,
            "../escape",
            root
        )
        .is_err());
    }

    #[test]
    fn test_missing_root_rejected() {
        let (_temp, root) = root();
        let missing = root.join("does-not-exist");
        assert!(
            Selection::new(Language::JavaScript, [Feature::React], PackageManager::Npm, "demo", missing)
                .is_err()
        );
    }
}
