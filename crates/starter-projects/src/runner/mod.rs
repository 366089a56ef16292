//! Command runners
//!
//! The plan builder and patcher never touch a shell directly. A
//! [`CommandRunner`] receives the finished [`CommandPlan`] and resolves once
//! the commands have run, which is the signal that patching may start.

mod dry_run;
mod shell;

pub use dry_run::DryRunRunner;
pub use shell::ShellRunner;

use crate::error::Result;
use crate::plan::CommandPlan;
use async_trait::async_trait;
use serde::Serialize;

/// Outcome of handing a plan to a runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Number of commands handed to the session
    pub commands_sent: usize,
    /// Whether the commands were actually executed
    pub executed: bool,
    /// Exit code of the session, if it ran and exited normally
    pub exit_code: Option<i32>,
}

impl RunReport {
    /// True for dry runs and for sessions that exited with status 0
    pub fn success(&self) -> bool {
        !self.executed || self.exit_code == Some(0)
    }
}

/// Executes a command plan
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Get the runner name
    fn name(&self) -> &'static str;

    /// Run every command in order, resolving when the session has finished
    async fn run(&self, plan: &CommandPlan) -> Result<RunReport>;
}

/// Check if a command is available on PATH
pub fn is_command_available(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}
