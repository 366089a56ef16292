//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use starter_core::{Language, PackageManager};

/// stack-starter - Scaffold Vite + React projects with a chosen stack
#[derive(Parser, Debug)]
#[command(name = "stack-starter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a runtime config file (default: ~/.stack-starter/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project, then install and wire up the selected features
    New(NewArgs),

    /// Print the commands a selection would run, without prompting
    Plan(PlanArgs),

    /// List the selectable features
    Features(FeaturesArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Flags describing what to scaffold
///
/// Anything left out is prompted for, or taken from the config defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Project language (javascript, typescript)
    #[arg(short, long, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Feature to include, by slug or label (repeatable, comma-separated)
    #[arg(short = 'f', long = "feature", value_delimiter = ',')]
    pub features: Vec<String>,

    /// Package manager (npm, yarn, pnpm)
    #[arg(short, long, value_parser = parse_package_manager)]
    pub package_manager: Option<PackageManager>,

    /// Project name, used as the directory name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory the project is created in (default: current directory)
    #[arg(short, long)]
    pub dir: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Show the commands without running them or patching files
    #[arg(long)]
    pub dry_run: bool,

    /// Seconds to wait after the commands finish before patching
    #[arg(long, value_name = "SECS")]
    pub settle_delay: Option<u64>,

    /// Use config defaults instead of prompting for missing values
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct FeaturesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved runtime configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse::<Language>().map_err(|e| e.to_string())
}

fn parse_package_manager(s: &str) -> Result<PackageManager, String> {
    s.parse::<PackageManager>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_with_flags() {
        let cli = Cli::try_parse_from([
            "stack-starter",
            "-v",
            "new",
            "--language",
            "ts",
            "--feature",
            "tailwindcss,axios",
            "-f",
            "zustand",
            "--package-manager",
            "pnpm",
            "--name",
            "demo",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        let Commands::New(args) = cli.command else {
            panic!("expected new command");
        };
        assert_eq!(args.selection.language, Some(Language::TypeScript));
        assert_eq!(args.selection.features, vec!["tailwindcss", "axios", "zustand"]);
        assert_eq!(args.selection.package_manager, Some(PackageManager::Pnpm));
        assert_eq!(args.selection.name.as_deref(), Some("demo"));
        assert!(args.dry_run);
        assert!(!args.yes);
    }

    #[test]
    fn test_invalid_package_manager_rejected() {
        let result = Cli::try_parse_from(["stack-starter", "plan", "--package-manager", "bun"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_show_json() {
        let cli = Cli::try_parse_from(["stack-starter", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Show(ConfigShowArgs { json: true }))
        ));
    }
}
