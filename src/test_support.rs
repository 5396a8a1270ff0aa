use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use tempfile::TempDir;
use walkdir::WalkDir;

use crate::config::Layout;
use crate::run_log::RunLog;

/// A throwaway home and temp directory laid out like a real user's.
pub(crate) struct Fixture {
    _home: TempDir,
    _temp: TempDir,
    pub(crate) layout: Layout,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let home = TempDir::new().unwrap();
        let temp = TempDir::new().unwrap();
        let layout = Layout {
            home: home.path().to_path_buf(),
            temp_dir: temp.path().to_path_buf(),
        };
        Self {
            _home: home,
            _temp: temp,
            layout,
        }
    }

    pub(crate) fn home_path(&self, relative: &str) -> PathBuf {
        self.layout.home.join(relative)
    }

    /// Write `len` bytes at `relative` under home, creating parents.
    pub(crate) fn write(&self, relative: &str, len: usize) -> PathBuf {
        let path = self.home_path(relative);
        write_bytes(&path, len);
        path
    }

    pub(crate) fn write_temp(&self, relative: &str, len: usize) -> PathBuf {
        let path = self.layout.temp_dir.join(relative);
        write_bytes(&path, len);
        path
    }

    /// Write a file and backdate its modification time by `days`.
    pub(crate) fn write_aged(&self, relative: &str, len: usize, days: u64) -> PathBuf {
        let path = self.write(relative, len);
        set_age(&path, Duration::from_secs(days * 86_400));
        path
    }

    pub(crate) fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.home_path(relative);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    pub(crate) fn live_log(&self) -> RunLog {
        RunLog::create(self.home_path(".devsweep/logs/test.log")).unwrap()
    }

    pub(crate) fn disabled_log(&self) -> RunLog {
        RunLog::disabled(self.home_path(".devsweep/logs/test.log"))
    }

    /// Every path under home and temp with its length and mtime.
    pub(crate) fn snapshot(&self) -> BTreeMap<PathBuf, (u64, Option<SystemTime>)> {
        [&self.layout.home, &self.layout.temp_dir]
            .into_iter()
            .flat_map(|root| WalkDir::new(root).follow_links(false))
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let meta = e.metadata().ok()?;
                let mtime = if meta.is_file() { meta.modified().ok() } else { None };
                Some((e.path().to_path_buf(), (meta.len(), mtime)))
            })
            .collect()
    }
}

pub(crate) fn set_age(path: &std::path::Path, age: Duration) {
    let when = SystemTime::now() - age;
    let file = std::fs::OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(when).unwrap();
}

fn write_bytes(path: &std::path::Path, len: usize) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, vec![b'x'; len]).unwrap();
}
