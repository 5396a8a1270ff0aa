use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use walkdir::WalkDir;

use crate::cleaner::{Cleaner, CleanupTarget, Session};
use crate::output;
use crate::utils;

const SECS_PER_DAY: u64 = 86_400;

/// Files in ~/Downloads older than the configured age.
pub struct OldDownloads;

impl Cleaner for OldDownloads {
    fn name(&self) -> &'static str {
        "downloads"
    }

    fn label(&self) -> &'static str {
        "Old Downloads"
    }

    fn run(&self, session: &mut Session<'_>) {
        let dir = session.layout.home_path("Downloads");
        if !dir.is_dir() {
            session.note("No Downloads folder");
            return;
        }

        let days = session.config.downloads_age_days;
        let old = select_old_files(&dir, days, SystemTime::now());
        let total: u64 = old.iter().map(|(_, size)| size).sum();
        output::print_info(&format!(
            "{} file(s) older than {days} day(s) in Downloads ({})",
            old.len(),
            utils::format_size(total)
        ));
        if old.is_empty() {
            return;
        }

        if !session.confirm(&format!("Delete {} old file(s) from Downloads?", old.len())) {
            output::print_skipped(self.label());
            return;
        }

        for (path, _) in old {
            let target = CleanupTarget::at(path, session.layout);
            session.clean_target(&target);
        }
    }
}

/// Whether a file last modified at `modified` is more than `days` days old at
/// `now`. Timestamps in the future are never old.
pub fn is_older_than(modified: SystemTime, now: SystemTime, days: u64) -> bool {
    let threshold = Duration::from_secs(days.saturating_mul(SECS_PER_DAY));
    match now.duration_since(modified) {
        Ok(age) => age > threshold,
        Err(_) => false,
    }
}

/// Regular files under `dir` (recursively) older than `days`, with sizes,
/// in path order.
pub fn select_old_files(dir: &Path, days: u64, now: SystemTime) -> Vec<(PathBuf, u64)> {
    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let meta = e.metadata().ok()?;
            let modified = meta.modified().ok()?;
            is_older_than(modified, now, days).then(|| (e.into_path(), meta.len()))
        })
        .collect()
}
