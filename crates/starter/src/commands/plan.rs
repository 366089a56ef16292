//! `stack-starter plan` command handler

use anyhow::Result;
use camino::Utf8Path;
use starter_projects::build_plan;

use super::load_runtime_config;
use super::selection::{resolve_selection, Prompting};
use crate::cli::PlanArgs;

/// Print the command plan for a selection without running it
pub fn run(args: PlanArgs, config: Option<&Utf8Path>) -> Result<()> {
    let runtime = load_runtime_config(config)?;

    let Some(selection) = resolve_selection(&args.selection, &runtime.defaults, Prompting::Defaults)?
    else {
        return Ok(());
    };

    let plan = build_plan(&selection);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", plan);
    }

    Ok(())
}
