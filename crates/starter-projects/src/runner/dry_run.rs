//! Runner that only reports what would be executed

use super::{CommandRunner, RunReport};
use crate::error::Result;
use crate::plan::CommandPlan;
use async_trait::async_trait;
use tracing::info;

/// Logs each command without executing anything
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl DryRunRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for DryRunRunner {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    async fn run(&self, plan: &CommandPlan) -> Result<RunReport> {
        for command in plan {
            info!("[dry-run] {}", command);
        }

        Ok(RunReport {
            commands_sent: plan.len(),
            executed: false,
            exit_code: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dry_run_executes_nothing() {
        let mut plan = CommandPlan::new();
        plan.push("false");
        plan.push("exit 3");

        let report = DryRunRunner::new().run(&plan).await.unwrap();
        assert_eq!(report.commands_sent, 2);
        assert!(!report.executed);
        assert!(report.success());
    }
}
