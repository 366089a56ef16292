//! README generation with Tera
//!
//! The README lists the project name, language, the selected feature labels
//! and a Getting Started block whose run line depends on the package manager.

use crate::error::{Error, Result};
use crate::plan::shell_quote;
use serde::Serialize;
use starter_core::Selection;
use tera::{Context, Tera};
use tracing::debug;

const README_TEMPLATE: &str = "README.md";

/// Values exposed to the README template
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeContext {
    pub project_name: String,
    /// Project name as typed in the Getting Started `cd` line
    pub project_dir: String,
    pub language: String,
    pub features: Vec<String>,
    pub package_manager: String,
    pub run_dev_command: String,
}

impl ReadmeContext {
    /// Build the context from a selection, using verbatim feature labels
    pub fn from_selection(selection: &Selection) -> Self {
        let pm = selection.package_manager();
        Self {
            project_name: selection.project_name().to_string(),
            project_dir: shell_word(selection.project_name()),
            language: selection.language().label().to_string(),
            features: selection
                .features()
                .iter()
                .map(|f| f.label().to_string())
                .collect(),
            package_manager: pm.as_str().to_string(),
            run_dev_command: pm.run_dev_command(),
        }
    }

    fn to_tera_context(&self) -> Result<Context> {
        Ok(Context::from_serialize(self)?)
    }
}

/// Leave plain names bare, quote anything the shell would split or expand
fn shell_word(value: &str) -> String {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '+'));
    if plain {
        value.to_string()
    } else {
        shell_quote(value)
    }
}

/// Renders generated project documents
pub struct ReadmeRenderer {
    tera: Tera,
}

impl ReadmeRenderer {
    /// Create a renderer with the embedded README template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(README_TEMPLATE, include_str!("README.md.tera"))?;
        Ok(Self { tera })
    }

    /// Render the README for a selection
    pub fn render_readme(&self, selection: &Selection) -> Result<String> {
        let context = ReadmeContext::from_selection(selection);
        debug!("Rendering README for project: {}", context.project_name);
        self.tera
            .render(README_TEMPLATE, &context.to_tera_context()?)
            .map_err(|e| Error::template_render_error(format!("{}: {}", README_TEMPLATE, e)))
    }
}
