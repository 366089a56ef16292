//! Command plan construction
//!
//! Turns a [`Selection`] into the ordered shell commands that scaffold the
//! project and install the selected libraries. Building a plan never fails:
//! whether a command succeeds is the command runner's concern.

use serde::Serialize;
use starter_core::{Feature, PackageManager, Selection};
use tracing::debug;

/// Ordered shell commands, executed top to bottom in one shell session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandPlan {
    commands: Vec<String>,
}

impl CommandPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: impl Into<String>) {
        self.commands.push(command.into());
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Position of the first command containing `needle`
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.contains(needle))
    }
}

impl<'a> IntoIterator for &'a CommandPlan {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl std::fmt::Display for CommandPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}

/// Packages a feature adds on top of the scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureInstall {
    pub packages: &'static [&'static str],
    /// Install as a dev dependency (`-D`)
    pub dev: bool,
}

impl FeatureInstall {
    const fn runtime(packages: &'static [&'static str]) -> Self {
        Self {
            packages,
            dev: false,
        }
    }

    const fn dev(packages: &'static [&'static str]) -> Self {
        Self {
            packages,
            dev: true,
        }
    }

    /// Render the install command for a package manager
    pub fn command(&self, pm: PackageManager) -> String {
        let mut parts = vec![pm.as_str(), pm.add_verb()];
        if self.dev {
            parts.push("-D");
        }
        parts.extend(self.packages.iter().copied());
        parts.join(" ")
    }
}

/// Packages installed for a feature, or `None` when the scaffold already
/// provides it
pub fn feature_install(feature: Feature) -> Option<FeatureInstall> {
    match feature {
        Feature::React | Feature::Vite => None,
        Feature::TailwindCss => Some(FeatureInstall::runtime(&["tailwindcss", "@tailwindcss/vite"])),
        Feature::ReactRouter => Some(FeatureInstall::runtime(&["react-router-dom"])),
        Feature::Axios => Some(FeatureInstall::runtime(&["axios"])),
        Feature::ReduxToolkit => Some(FeatureInstall::runtime(&["@reduxjs/toolkit", "react-redux"])),
        Feature::Zustand => Some(FeatureInstall::runtime(&["zustand"])),
        Feature::ChakraUi => Some(FeatureInstall::runtime(&[
            "@chakra-ui/react",
            "@emotion/react",
            "@emotion/styled",
            "framer-motion",
        ])),
        Feature::FramerMotion => Some(FeatureInstall::runtime(&["framer-motion"])),
        Feature::LintFormat => Some(FeatureInstall::dev(&[
            "eslint",
            "prettier",
            "eslint-config-prettier",
            "eslint-plugin-react",
        ])),
    }
}

/// Build the command plan for a selection
///
/// Order: cd into the root, scaffold, cd into the project, base install, then
/// one install per feature in canonical order. Chakra UI already pulls in
/// framer-motion, so it supersedes a separate Framer Motion install.
pub fn build_plan(selection: &Selection) -> CommandPlan {
    let pm = selection.package_manager();
    let mut plan = CommandPlan::new();

    plan.push(format!("cd {}", shell_quote(selection.project_root().as_str())));
    plan.push(scaffold_command(
        pm,
        selection.project_name(),
        selection.language().vite_template(),
    ));
    plan.push(format!("cd {}", shell_quote(selection.project_name())));
    plan.push(format!("{} install", pm.as_str()));

    for &feature in selection.features() {
        if feature == Feature::FramerMotion && selection.has(Feature::ChakraUi) {
            debug!("Framer Motion is installed with Chakra UI");
            continue;
        }

        if let Some(install) = feature_install(feature) {
            plan.push(install.command(pm));
        }
    }

    debug!("Built command plan with {} commands", plan.len());
    plan
}

/// The package manager's create-vite invocation
fn scaffold_command(pm: PackageManager, project_name: &str, template: &str) -> String {
    let name = shell_quote(project_name);
    match pm {
        // npm forwards arguments to the initializer only after `--`
        PackageManager::Npm => format!("npm create vite@latest {} -- --template {}", name, template),
        PackageManager::Yarn => format!("yarn create vite {} --template {}", name, template),
        PackageManager::Pnpm => format!("pnpm create vite {} --template {}", name, template),
    }
}

/// Double-quote a value for a POSIX shell, escaping the characters that stay
/// special inside double quotes
pub fn shell_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
