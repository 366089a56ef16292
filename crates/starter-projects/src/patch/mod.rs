//! Post-scaffold file patches
//!
//! Runs after the command plan has finished. Each target is edited
//! independently and ends in exactly one [`PatchStatus`]; a failure on one
//! file never stops the others, and nothing is retried.
//!
//! Targets, in order:
//! - `vite.config.{js,ts}`: Tailwind plugin import and registration (TailwindCSS only)
//! - `src/index.css`: Tailwind import directive (TailwindCSS only)
//! - `README.md`: always regenerated, overwriting the scaffold's README

mod stylesheet;
mod vite_config;

pub use stylesheet::{patch_stylesheet, TAILWIND_CSS_IMPORT};
pub use vite_config::{patch_vite_config, ConfigEdit, TAILWIND_VITE_IMPORT, TAILWIND_VITE_MODULE};

use crate::templates::ReadmeRenderer;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use starter_core::{Feature, Selection};
use std::fs;
use tracing::{debug, info, warn};

/// Terminal state of a patch target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchStatus {
    Success,
    Skipped,
    Failed,
}

impl std::fmt::Display for PatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// What happened to one patch target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    pub target: Utf8PathBuf,
    pub status: PatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PatchOutcome {
    pub fn success(target: impl Into<Utf8PathBuf>) -> Self {
        Self {
            target: target.into(),
            status: PatchStatus::Success,
            reason: None,
        }
    }

    pub fn skipped(target: impl Into<Utf8PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            status: PatchStatus::Skipped,
            reason: Some(reason.into()),
        }
    }

    pub fn failed(target: impl Into<Utf8PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            status: PatchStatus::Failed,
            reason: Some(reason.into()),
        }
    }

    fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Transformation applied to a target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchKind {
    /// Import and register the Tailwind Vite plugin
    TailwindViteConfig,
    /// Prepend the Tailwind import directive
    TailwindStylesheet,
    /// Write the generated README
    Readme,
}

/// A file and the edit to apply to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTarget {
    pub path: Utf8PathBuf,
    pub kind: PatchKind,
}

/// Targets for a selection, in application order
pub fn patch_targets(selection: &Selection, project_path: &Utf8Path) -> Vec<PatchTarget> {
    let mut targets = Vec::new();

    if selection.has(Feature::TailwindCss) {
        targets.push(PatchTarget {
            path: project_path.join(format!(
                "vite.config.{}",
                selection.language().config_extension()
            )),
            kind: PatchKind::TailwindViteConfig,
        });
        targets.push(PatchTarget {
            path: project_path.join("src").join("index.css"),
            kind: PatchKind::TailwindStylesheet,
        });
    }

    targets.push(PatchTarget {
        path: project_path.join("README.md"),
        kind: PatchKind::Readme,
    });

    targets
}

/// Apply every patch for a selection to the project at `project_path`
pub fn apply_patches(selection: &Selection, project_path: &Utf8Path) -> Vec<PatchOutcome> {
    info!("Applying post-scaffold patches in {}", project_path);

    patch_targets(selection, project_path)
        .into_iter()
        .map(|target| {
            let outcome = apply_target(selection, &target);
            match outcome.status {
                PatchStatus::Success => info!("Patched {}", outcome.target),
                PatchStatus::Skipped => debug!(
                    "Skipped {}: {}",
                    outcome.target,
                    outcome.reason.as_deref().unwrap_or_default()
                ),
                PatchStatus::Failed => warn!(
                    "Failed to patch {}: {}",
                    outcome.target,
                    outcome.reason.as_deref().unwrap_or_default()
                ),
            }
            outcome
        })
        .collect()
}

fn apply_target(selection: &Selection, target: &PatchTarget) -> PatchOutcome {
    match target.kind {
        PatchKind::TailwindViteConfig => apply_vite_config(&target.path),
        PatchKind::TailwindStylesheet => apply_stylesheet(&target.path),
        PatchKind::Readme => apply_readme(selection, &target.path),
    }
}

fn apply_vite_config(path: &Utf8Path) -> PatchOutcome {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return PatchOutcome::failed(path, format!("Failed to read {}: {}", path, e)),
    };

    match patch_vite_config(&content) {
        ConfigEdit::Unchanged => {
            PatchOutcome::skipped(path, "Tailwind Vite plugin is already imported")
        }
        ConfigEdit::Patched {
            content,
            plugin_registered,
        } => {
            if let Err(e) = fs::write(path, content) {
                return PatchOutcome::failed(path, format!("Failed to write {}: {}", path, e));
            }
            let outcome = PatchOutcome::success(path);
            if plugin_registered {
                outcome
            } else {
                outcome.with_reason("No plugins array found; added the import only")
            }
        }
    }
}

fn apply_stylesheet(path: &Utf8Path) -> PatchOutcome {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return PatchOutcome::failed(path, format!("Failed to read {}: {}", path, e)),
    };

    match patch_stylesheet(&content) {
        None => PatchOutcome::skipped(path, "Tailwind import already present"),
        Some(patched) => match fs::write(path, patched) {
            Ok(()) => PatchOutcome::success(path),
            Err(e) => PatchOutcome::failed(path, format!("Failed to write {}: {}", path, e)),
        },
    }
}

fn apply_readme(selection: &Selection, path: &Utf8Path) -> PatchOutcome {
    let rendered = ReadmeRenderer::new().and_then(|renderer| renderer.render_readme(selection));

    let content = match rendered {
        Ok(content) => content,
        Err(e) => return PatchOutcome::failed(path, format!("Failed to render README: {}", e)),
    };

    match fs::write(path, content) {
        Ok(()) => PatchOutcome::success(path),
        Err(e) => PatchOutcome::failed(path, format!("Failed to write {}: {}", path, e)),
    }
}
