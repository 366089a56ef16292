//! # starter-projects
//!
//! Scaffolding library for stack-starter providing:
//! - Command plan construction for create-vite and feature installs
//! - Post-scaffold patches (Tailwind wiring, generated README)
//! - Command runners that signal when the plan has finished
//!
//! # Example
//!
//! ```no_run
//! use starter_core::{Feature, Language, PackageManager, Selection};
//! use starter_projects::{DryRunRunner, Scaffolder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let selection = Selection::new(
//!     Language::TypeScript,
//!     [Feature::TailwindCss, Feature::Axios],
//!     PackageManager::Pnpm,
//!     "demo",
//!     "/tmp",
//! )?;
//!
//! let report = Scaffolder::new(Box::new(DryRunRunner::new()))
//!     .scaffold(&selection)
//!     .await?;
//! println!("{}", report.plan);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod patch;
pub mod plan;
pub mod runner;
pub mod scaffold;
pub mod templates;

pub use error::{Error, Result};
pub use patch::{apply_patches, PatchOutcome, PatchStatus};
pub use plan::{build_plan, CommandPlan};
pub use runner::{CommandRunner, DryRunRunner, RunReport, ShellRunner};
pub use scaffold::{ScaffoldReport, Scaffolder};
