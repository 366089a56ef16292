//! `stack-starter new` command handler

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use starter_core::Selection;
use starter_projects::runner::is_command_available;
use starter_projects::{
    CommandRunner, DryRunRunner, PatchOutcome, PatchStatus, Scaffolder, ShellRunner,
};
use std::time::Duration;

use super::load_runtime_config;
use super::selection::{resolve_selection, Prompting};
use crate::cli::NewArgs;
use crate::output;

/// Scaffold a new project and apply the post-scaffold patches
pub async fn run(args: NewArgs, config: Option<&Utf8Path>) -> Result<()> {
    let runtime = load_runtime_config(config)?;

    output::header("Create New Frontend Project");

    let prompting = if args.yes {
        Prompting::Defaults
    } else {
        Prompting::Interactive
    };
    let Some(selection) = resolve_selection(&args.selection, &runtime.defaults, prompting)? else {
        return Ok(());
    };

    let project_path = ensure_new_project(&selection)?;

    show_selection(&selection);

    let pm = selection.package_manager();
    if !args.dry_run && !is_command_available(pm.as_str()) {
        output::warning(&format!(
            "{} was not found on PATH; the scaffold commands will fail",
            pm
        ));
        tracing::warn!("Package manager {} not found on PATH", pm);
    }

    let runner: Box<dyn CommandRunner> = if args.dry_run {
        Box::new(DryRunRunner::new())
    } else {
        Box::new(
            ShellRunner::new(runtime.execution.shell.as_str())
                .with_stop_on_error(runtime.execution.stop_on_error),
        )
    };
    let settle_delay = Duration::from_secs(
        args.settle_delay
            .unwrap_or(runtime.execution.settle_delay_secs),
    );
    let scaffolder = Scaffolder::new(runner).with_settle_delay(settle_delay);
    tracing::debug!(
        "Scaffolding {} with settle delay {:?}",
        project_path,
        settle_delay
    );

    output::info(&format!(
        "Running scaffold commands ({} runner)...",
        scaffolder.runner_name()
    ));
    let (plan, run) = scaffolder
        .execute(&selection)
        .await
        .context("Failed to run scaffold commands")?;

    if !run.executed {
        println!();
        output::info("Dry run: nothing was executed. Commands:");
        for command in &plan {
            output::command(command);
        }
        return Ok(());
    }

    if !run.success() {
        let code = run
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        output::warning(&format!(
            "Scaffold commands did not finish cleanly (exit status: {}); patching what was generated",
            code
        ));
        tracing::warn!("Scaffold session for {} exited with {}", project_path, code);
    }

    let spinner = output::spinner("Applying post-scaffold patches...");
    let patches = scaffolder.patch(&selection, &run).await;
    spinner.finish_and_clear();

    for outcome in &patches {
        report_patch(outcome, &project_path);
    }

    let failed = patches
        .iter()
        .filter(|p| p.status == PatchStatus::Failed)
        .count();

    println!();
    if failed == 0 && run.success() {
        output::success(&format!(
            "Project '{}' created successfully",
            selection.project_name()
        ));
    } else {
        output::warning(&format!(
            "Project '{}' created with {} failed patch(es)",
            selection.project_name(),
            failed
        ));
    }

    println!();
    output::info("Next steps:");
    println!("   1. cd {}", project_path);
    println!("   2. {}", pm.run_dev_command());

    Ok(())
}

/// Refuse to scaffold over an existing directory
fn ensure_new_project(selection: &Selection) -> Result<Utf8PathBuf> {
    let project_path = selection.project_path();
    if project_path.exists() {
        return Err(anyhow!(
            "Project '{}' already exists at {}",
            selection.project_name(),
            project_path
        ));
    }
    Ok(project_path)
}

fn show_selection(selection: &Selection) {
    let features: Vec<&str> = selection.features().iter().map(|f| f.label()).collect();

    output::kv("Project name", selection.project_name());
    output::kv("Language", selection.language().label());
    output::kv("Package manager", selection.package_manager().as_str());
    output::kv("Features", &features.join(", "));
    output::kv("Location", selection.project_path().as_str());
    println!();
}

/// One console line per patch outcome
fn report_patch(outcome: &PatchOutcome, project_path: &Utf8Path) {
    let target = outcome
        .target
        .strip_prefix(project_path)
        .unwrap_or(outcome.target.as_path());

    match (outcome.status, outcome.reason.as_deref()) {
        (PatchStatus::Success, None) => output::success(&format!("Patched {}", target)),
        (PatchStatus::Success, Some(reason)) => {
            output::success(&format!("Patched {}", target));
            output::info(&format!("  {}", reason));
        }
        (PatchStatus::Skipped, reason) => output::info(&format!(
            "Skipped {}: {}",
            target,
            reason.unwrap_or("already patched")
        )),
        (PatchStatus::Failed, reason) => output::error(&format!(
            "Failed to patch {}: {}",
            target,
            reason.unwrap_or("unknown error")
        )),
    }
}
