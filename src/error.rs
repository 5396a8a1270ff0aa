use thiserror::Error;

/// Everything a handler can run into while sweeping. Neither kind is fatal:
/// the orchestrator reports it and moves on to the next target.
#[derive(Error, Debug)]
pub enum CleanupError {
    /// An external tool the handler delegates to is not installed.
    #[error("{tool} not found on PATH")]
    ToolAbsent { tool: String },

    /// A delete or a native cleanup command did not succeed.
    #[error("{action} failed: {reason}")]
    OperationFailed { action: String, reason: String },
}

impl CleanupError {
    pub fn failed(action: impl Into<String>, reason: impl ToString) -> Self {
        CleanupError::OperationFailed {
            action: action.into(),
            reason: reason.to_string(),
        }
    }

    /// How the session reports this error. A missing tool is an expected
    /// gap in the environment, not something that went wrong.
    pub fn severity(&self) -> Severity {
        match self {
            CleanupError::ToolAbsent { .. } => Severity::Skip,
            CleanupError::OperationFailed { .. } => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational; counted under tools skipped.
    Skip,
    /// Printed as a warning and counted in the summary.
    Warning,
}

/// Conditions that stop the run before any handler starts.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("could not determine the home directory (is $HOME set?)")]
    NoHome,
}

impl StartupError {
    /// Process exit status. Distinct from clap's usage error (2).
    pub fn exit_code(&self) -> u8 {
        match self {
            StartupError::NoHome => 1,
        }
    }
}
