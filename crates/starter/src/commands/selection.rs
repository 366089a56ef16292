//! Resolving a [`Selection`] from flags, prompts and config defaults

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;
use dialoguer::{Input, MultiSelect, Select};
use starter_core::types::SelectionDefaults;
use starter_core::{Feature, Language, PackageManager, Selection};
use std::collections::BTreeSet;

use crate::cli::SelectionArgs;
use crate::output;

/// How values missing from the flags are filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Prompting {
    /// Ask the user
    Interactive,
    /// Take the config defaults
    Defaults,
}

/// Build a selection from the flags, filling the gaps per `prompting`
///
/// Returns `None` when a prompt is cancelled or no features end up selected;
/// the caller should stop without side effects.
pub(super) fn resolve_selection(
    args: &SelectionArgs,
    defaults: &SelectionDefaults,
    prompting: Prompting,
) -> Result<Option<Selection>> {
    let interactive = prompting == Prompting::Interactive;

    let language = match args.language {
        Some(language) => language,
        None if interactive => match prompt_language(defaults.language)? {
            Some(language) => language,
            None => return Ok(None),
        },
        None => defaults.language,
    };

    let features = if !args.features.is_empty() {
        Feature::from_tags(&args.features)
    } else if interactive {
        match prompt_features()? {
            Some(features) => features,
            None => return Ok(None),
        }
    } else {
        BTreeSet::new()
    };

    if features.is_empty() {
        output::info("No technologies selected.");
        return Ok(None);
    }

    let package_manager = match args.package_manager {
        Some(pm) => pm,
        None if interactive => match prompt_package_manager(defaults.package_manager)? {
            Some(pm) => pm,
            None => return Ok(None),
        },
        None => defaults.package_manager,
    };

    let project_name = match &args.name {
        Some(name) => name.clone(),
        None if interactive => {
            let answer = Input::<String>::new()
                .with_prompt("Project name")
                .with_initial_text(defaults.project_name.clone())
                .allow_empty(true)
                .interact_text()?;
            match entered_name(answer) {
                Some(name) => name,
                None => {
                    output::info("No project name entered.");
                    return Ok(None);
                }
            }
        }
        None => defaults.project_name.clone(),
    };

    let project_root = match &args.dir {
        Some(dir) => dir.clone(),
        None if interactive => {
            let cwd = current_dir()?;
            let answer = Input::<String>::new()
                .with_prompt("Create the project in")
                .default(cwd.to_string())
                .interact_text()?;
            Utf8PathBuf::from(answer)
        }
        None => current_dir()?,
    };

    let selection = Selection::new(
        language,
        features,
        package_manager,
        project_name,
        project_root,
    )
    .context("Invalid project selection")?;

    Ok(Some(selection))
}

fn prompt_language(default: Language) -> Result<Option<Language>> {
    let languages = Language::all();
    let labels: Vec<&str> = languages.iter().map(|l| l.label()).collect();
    let default_idx = languages.iter().position(|l| *l == default).unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Select language")
        .items(&labels)
        .default(default_idx)
        .interact_opt()?;

    Ok(choice.map(|idx| languages[idx]))
}

fn prompt_features() -> Result<Option<BTreeSet<Feature>>> {
    let features = Feature::all();
    let items: Vec<String> = features
        .iter()
        .map(|f| format!("{} - {}", f.label(), f.description()))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select technologies (space to toggle, enter to confirm)")
        .items(&items)
        .interact_opt()?;

    Ok(chosen.map(|indices| indices.into_iter().map(|idx| features[idx]).collect()))
}

fn prompt_package_manager(default: PackageManager) -> Result<Option<PackageManager>> {
    let managers = PackageManager::all();
    let names: Vec<&str> = managers.iter().map(|pm| pm.as_str()).collect();
    let default_idx = managers.iter().position(|pm| *pm == default).unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Select package manager")
        .items(&names)
        .default(default_idx)
        .interact_opt()?;

    Ok(choice.map(|idx| managers[idx]))
}

/// A blank answer abandons the flow
fn entered_name(answer: String) -> Option<String> {
    let name = answer.trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))
}
