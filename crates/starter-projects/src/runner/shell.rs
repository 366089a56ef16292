//! Shell session runner
//!
//! The whole plan runs as one script in a single shell process, so a `cd`
//! carries over to the commands after it. The terminal's stdin/stdout/stderr
//! are inherited so package-manager output and prompts reach the user.

use super::{is_command_available, CommandRunner, RunReport};
use crate::error::{Error, Result};
use crate::plan::CommandPlan;
use async_trait::async_trait;
use camino::Utf8PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Runs a plan through `<shell> -c <script>` and waits for it to exit
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    stop_on_error: bool,
    working_dir: Option<Utf8PathBuf>,
}

impl ShellRunner {
    /// Create a runner for the given shell executable
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            stop_on_error: false,
            working_dir: None,
        }
    }

    /// Abort the session at the first failing command
    pub fn with_stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = stop_on_error;
        self
    }

    /// Start the session in a specific directory
    pub fn with_working_dir(mut self, dir: Utf8PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Script handed to the shell
    pub fn script(&self, plan: &CommandPlan) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(plan.len() + 1);
        if self.stop_on_error {
            lines.push("set -e");
        }
        lines.extend(plan.iter().map(String::as_str));
        lines.join("\n")
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    fn name(&self) -> &'static str {
        "shell"
    }

    async fn run(&self, plan: &CommandPlan) -> Result<RunReport> {
        if !is_command_available(&self.shell) {
            return Err(Error::shell_not_found(&self.shell));
        }

        for command in plan {
            info!("$ {}", command);
        }

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(self.script(plan))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        debug!("Starting {} session with {} commands", self.shell, plan.len());
        let status = cmd
            .status()
            .await
            .map_err(|e| Error::command_runner(format!("Failed to start {}: {}", self.shell, e)))?;

        let exit_code = status.code();
        if status.success() {
            debug!("Shell session finished successfully");
        } else {
            warn!("Shell session exited with status {}", status);
        }

        Ok(RunReport {
            commands_sent: plan.len(),
            executed: true,
            exit_code,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plan(commands: &[&str]) -> CommandPlan {
        let mut plan = CommandPlan::new();
        for c in commands {
            plan.push(*c);
        }
        plan
    }

    #[test]
    fn test_script_with_stop_on_error() {
        let runner = ShellRunner::new("sh").with_stop_on_error(true);
        assert_eq!(runner.script(&plan(&["cd /tmp", "ls"])), "set -e\ncd /tmp\nls");
    }

    #[tokio::test]
    async fn test_cd_persists_across_commands() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        std::fs::create_dir(root.join("inner")).unwrap();

        let runner = ShellRunner::new("sh").with_working_dir(root.clone());
        let report = runner
            .run(&plan(&["cd inner", "touch marker"]))
            .await
            .unwrap();

        assert!(report.success());
        assert_eq!(report.commands_sent, 2);
        assert!(root.join("inner/marker").exists());
    }

    #[tokio::test]
    async fn test_stop_on_error_halts_session() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();

        let runner = ShellRunner::new("sh")
            .with_stop_on_error(true)
            .with_working_dir(root.clone());
        let report = runner.run(&plan(&["false", "touch after"])).await.unwrap();

        assert!(!report.success());
        assert!(!root.join("after").exists());
    }

    #[tokio::test]
    async fn test_missing_shell() {
        let runner = ShellRunner::new("definitely-not-a-shell-binary");
        let err = runner.run(&plan(&["true"])).await.unwrap_err();
        assert!(matches!(err, Error::ShellNotFound { .. }));
    }
}
