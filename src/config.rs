use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Default age threshold for the Downloads sweep.
pub const DEFAULT_DOWNLOADS_AGE_DAYS: u64 = 30;

/// Settings for one run. Built once from the command line and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dry_run: bool,
    pub verbose: bool,
    pub skip_confirmation: bool,
    pub downloads_age_days: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            verbose: false,
            skip_confirmation: false,
            downloads_age_days: DEFAULT_DOWNLOADS_AGE_DAYS,
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            skip_confirmation: cli.yes,
            downloads_age_days: cli.age,
        }
    }
}

/// Filesystem roots every handler resolves its paths against.
#[derive(Debug, Clone)]
pub struct Layout {
    pub home: PathBuf,
    pub temp_dir: PathBuf,
}

impl Layout {
    /// Layout of the current user, or `None` when no home directory is known.
    pub fn detect() -> Option<Self> {
        Some(Self {
            home: dirs::home_dir()?,
            temp_dir: std::env::temp_dir(),
        })
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home.join(relative)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}
