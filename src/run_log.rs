use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Log directory, relative to the home directory.
pub const LOG_DIR: &str = ".devsweep/logs";

const ENTRY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only record of what a live run actually removed.
pub struct RunLog {
    path: PathBuf,
    file: Option<File>,
    entries: usize,
}

impl RunLog {
    /// Path of the log for a run that started at `started`.
    pub fn path_for(home: &Path, started: DateTime<Local>) -> PathBuf {
        home.join(LOG_DIR)
            .join(format!("sweep-{}.log", started.format("%Y%m%d-%H%M%S")))
    }

    /// Create the log file for a live run.
    pub fn create(path: PathBuf) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut log = Self {
            path,
            file: Some(file),
            entries: 0,
        };
        log.append("sweep started")?;
        Ok(log)
    }

    /// A log that records nothing. Used for dry runs, which must not touch the
    /// filesystem, and when the log file could not be created.
    pub fn disabled(path: PathBuf) -> Self {
        Self {
            path,
            file: None,
            entries: 0,
        }
    }

    pub fn append(&mut self, message: &str) -> io::Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        writeln!(file, "[{}] {message}", Local::now().format(ENTRY_TIME_FORMAT))?;
        self.entries += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn entries(&self) -> usize {
        self.entries
    }
}

/// Whether `line` starts with a `[YYYY-mm-dd HH:MM:SS]` stamp.
#[cfg(test)]
pub fn is_timestamped(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('[') else {
        return false;
    };
    let Some((stamp, _)) = rest.split_once(']') else {
        return false;
    };
    chrono::NaiveDateTime::parse_from_str(stamp, ENTRY_TIME_FORMAT).is_ok()
}
