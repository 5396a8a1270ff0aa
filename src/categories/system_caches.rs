use std::path::Path;

use crate::cleaner::{Cleaner, CleanupTarget};
use crate::config::Layout;

/// Cache directories owned by other handlers, left alone here so no path is
/// handled twice.
const EXCLUDED_CACHES: &[&str] = &[
    "Homebrew",
    "Google",
    "Firefox",
    "com.apple.Safari",
    "Yarn",
    "pip",
    "go-build",
];

pub struct SystemCaches;

impl Cleaner for SystemCaches {
    fn name(&self) -> &'static str {
        "system-caches"
    }

    fn label(&self) -> &'static str {
        "System Caches & Logs"
    }

    fn targets(&self, layout: &Layout) -> Vec<CleanupTarget> {
        let mut targets = children(&layout.home_path("Library/Caches"), layout, EXCLUDED_CACHES);
        targets.extend(children(&layout.home_path("Library/Logs"), layout, &[]));
        targets
    }
}

fn children(dir: &Path, layout: &Layout, excluded: &[&str]) -> Vec<CleanupTarget> {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut targets: Vec<CleanupTarget> = read_dir
        .flatten()
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            !excluded.iter().any(|&skip| name == skip)
        })
        .map(|entry| CleanupTarget::at(entry.path(), layout))
        .collect();
    targets.sort_by(|a, b| a.path.cmp(&b.path));
    targets
}
