//! End-to-end scaffolding: plan, run, settle, patch

use crate::error::Result;
use crate::patch::{apply_patches, PatchOutcome, PatchStatus};
use crate::plan::{build_plan, CommandPlan};
use crate::runner::{CommandRunner, RunReport};
use serde::Serialize;
use starter_core::Selection;
use std::time::Duration;
use tracing::{info, warn};

/// Everything a scaffold run produced
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub plan: CommandPlan,
    pub run: RunReport,
    /// Empty when the runner did not execute anything
    pub patches: Vec<PatchOutcome>,
}

impl ScaffoldReport {
    pub fn failed_patches(&self) -> usize {
        self.patches
            .iter()
            .filter(|p| p.status == PatchStatus::Failed)
            .count()
    }
}

/// Drives a selection through a command runner and the patcher
pub struct Scaffolder {
    runner: Box<dyn CommandRunner>,
    settle_delay: Duration,
}

impl Scaffolder {
    /// Create a scaffolder around a runner
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            settle_delay: Duration::ZERO,
        }
    }

    /// Wait this long after the runner completes before patching
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn runner_name(&self) -> &'static str {
        self.runner.name()
    }

    /// Build the plan, run it, then patch the generated files
    ///
    /// Patches run best-effort even when the session exits non-zero; their
    /// outcomes report whatever the failed commands left behind.
    pub async fn scaffold(&self, selection: &Selection) -> Result<ScaffoldReport> {
        let (plan, run) = self.execute(selection).await?;
        let patches = self.patch(selection, &run).await;

        Ok(ScaffoldReport {
            plan,
            run,
            patches,
        })
    }

    /// Build the plan and hand it to the runner, resolving once it finishes
    pub async fn execute(&self, selection: &Selection) -> Result<(CommandPlan, RunReport)> {
        let plan = build_plan(selection);
        info!(
            "Running {} commands with the {} runner",
            plan.len(),
            self.runner.name()
        );

        let run = self.runner.run(&plan).await?;
        if run.executed && !run.success() {
            warn!("Some commands failed; patching what was generated");
        }

        Ok((plan, run))
    }

    /// Wait for the settle delay, then apply the post-scaffold patches
    ///
    /// Nothing is patched when the runner did not execute the plan.
    pub async fn patch(&self, selection: &Selection, run: &RunReport) -> Vec<PatchOutcome> {
        if !run.executed {
            return Vec::new();
        }

        if !self.settle_delay.is_zero() {
            info!("Waiting {:?} before patching", self.settle_delay);
            tokio::time::sleep(self.settle_delay).await;
        }

        apply_patches(selection, &selection.project_path())
    }
}
