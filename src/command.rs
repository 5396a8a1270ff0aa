use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::CleanupError;

/// Captured output of a native cleanup command that exited successfully.
#[derive(Debug, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Non-blank lines, stdout first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.stdout
            .lines()
            .chain(self.stderr.lines())
            .filter(|l| !l.trim().is_empty())
    }
}

/// Finds and runs the external tools handlers delegate to.
pub trait CommandRunner {
    /// Resolve `tool` on the search path.
    fn locate(&self, tool: &str) -> Result<PathBuf, CleanupError>;

    /// Run once. A spawn error or non-zero exit becomes `OperationFailed`.
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutput, CleanupError>;
}

/// Runs real processes, looking tools up on a fixed search path.
pub struct SystemRunner {
    search_path: Option<OsString>,
    cwd: PathBuf,
}

impl SystemRunner {
    /// Search path taken from `PATH` at startup.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
        }
    }

    #[cfg(test)]
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            cwd: PathBuf::from("/"),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn locate(&self, tool: &str) -> Result<PathBuf, CleanupError> {
        which::which_in(tool, self.search_path.as_ref(), &self.cwd).map_err(|e| {
            tracing::debug!(tool, error = %e, "executable lookup failed");
            CleanupError::ToolAbsent {
                tool: tool.to_string(),
            }
        })
    }

    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutput, CleanupError> {
        let action = describe(program, args);
        tracing::debug!(command = %action, "running native cleanup");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CleanupError::failed(&action, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let reason = match stderr.lines().find(|l| !l.trim().is_empty()) {
                Some(line) => format!("{}: {}", output.status, line.trim()),
                None => output.status.to_string(),
            };
            return Err(CleanupError::failed(action, reason));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

/// Render a command line for messages and the run log, using only the
/// program's file name.
pub fn describe(program: &Path, args: &[&str]) -> String {
    let name = program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string());
    std::iter::once(name.as_str())
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{describe, CommandOutput, CommandRunner};
    use crate::error::CleanupError;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Pretends a fixed set of tools is installed and records every call.
    #[derive(Default)]
    pub(crate) struct FakeRunner {
        installed: Vec<String>,
        failing: Vec<String>,
        stderr: String,
        pub(crate) calls: RefCell<Vec<String>>,
    }

    impl FakeRunner {
        pub(crate) fn with_tools(tools: &[&str]) -> Self {
            Self {
                installed: tools.iter().map(|t| t.to_string()).collect(),
                ..Self::default()
            }
        }

        /// Make any command line starting with `prefix` exit non-zero.
        pub(crate) fn failing(mut self, prefix: &str) -> Self {
            self.failing.push(prefix.to_string());
            self
        }

        /// Text every successful command writes to stderr.
        pub(crate) fn with_stderr(mut self, text: &str) -> Self {
            self.stderr = text.to_string();
            self
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn locate(&self, tool: &str) -> Result<PathBuf, CleanupError> {
            if self.installed.iter().any(|t| t == tool) {
                Ok(PathBuf::from("/usr/local/bin").join(tool))
            } else {
                Err(CleanupError::ToolAbsent {
                    tool: tool.to_string(),
                })
            }
        }

        fn run(&self, program: &Path, args: &[&str]) -> Result<CommandOutput, CleanupError> {
            let line = describe(program, args);
            self.calls.borrow_mut().push(line.clone());
            if self.failing.iter().any(|p| line.starts_with(p.as_str())) {
                return Err(CleanupError::failed(line, "exit status: 1"));
            }
            Ok(CommandOutput {
                stdout: format!("ran {line}\n"),
                stderr: self.stderr.clone(),
            })
        }
    }
}
