//! Config command

use anyhow::{Context, Result};
use camino::Utf8Path;

use super::config_loader;
use crate::cli::{ConfigCommands, ConfigShowArgs};
use crate::output;

pub fn run(cmd: ConfigCommands, config: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => show(args, config),
    }
}

fn show(args: ConfigShowArgs, config: Option<&Utf8Path>) -> Result<()> {
    let loader = config_loader(config)?;
    let runtime = loader
        .load_runtime_config()
        .context("Failed to load runtime configuration")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&runtime)?);
        return Ok(());
    }

    let config_path = loader.config_path();
    let source = if config_path.exists() {
        config_path.to_string()
    } else {
        format!("{} (not found, using defaults)", config_path)
    };

    output::header("Runtime Configuration");
    output::kv("Config file", &source);

    output::header("Defaults");
    output::kv("Language", runtime.defaults.language.as_str());
    output::kv("Package manager", runtime.defaults.package_manager.as_str());
    output::kv("Project name", &runtime.defaults.project_name);

    output::header("Execution");
    output::kv("Shell", &runtime.execution.shell);
    output::kv(
        "Settle delay",
        &format!("{}s", runtime.execution.settle_delay_secs),
    );
    output::kv("Stop on error", &runtime.execution.stop_on_error.to_string());

    Ok(())
}
