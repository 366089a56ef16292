//! Error types for starter-projects

use thiserror::Error;

/// Result type alias using starter-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Shell executable not found
    #[error("Shell not found: {shell}. Set execution.shell or STARTER_SHELL to an installed shell")]
    ShellNotFound { shell: String },

    /// Command runner failed to start or talk to the shell session
    #[error("Command runner failed: {message}")]
    CommandRunner { message: String },

    /// Template rendering error
    #[error("Template rendering failed: {message}")]
    TemplateRenderError { message: String },

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a shell not found error
    pub fn shell_not_found(shell: impl Into<String>) -> Self {
        Self::ShellNotFound {
            shell: shell.into(),
        }
    }

    /// Create a command runner error
    pub fn command_runner(message: impl Into<String>) -> Self {
        Self::CommandRunner {
            message: message.into(),
        }
    }

    /// Create a template render error
    pub fn template_render_error(message: impl Into<String>) -> Self {
        Self::TemplateRenderError {
            message: message.into(),
        }
    }
}
