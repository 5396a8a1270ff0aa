use std::ffi::OsStr;

use walkdir::WalkDir;

use crate::cleaner::{Cleaner, CleanupTarget};
use crate::config::Layout;

/// Maximum depth for the .DS_Store walk.
const MAX_DEPTH: usize = 8;

/// Folders searched for .DS_Store files. Downloads is left to the aging sweep.
const DS_STORE_ROOTS: &[&str] = &["Desktop", "Documents"];

/// Directories to skip during the .DS_Store walk.
const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".venv",
    "venv",
    "target",
    "__pycache__",
    "Pods",
];

/// Crash reports and Finder metadata.
pub struct MiscSystemFiles;

impl Cleaner for MiscSystemFiles {
    fn name(&self) -> &'static str {
        "misc"
    }

    fn label(&self) -> &'static str {
        "Misc System Files"
    }

    fn targets(&self, layout: &Layout) -> Vec<CleanupTarget> {
        let mut targets = vec![CleanupTarget::at(
            layout.home_path("Library/Application Support/CrashReporter"),
            layout,
        )];

        for root in DS_STORE_ROOTS {
            let root = layout.home_path(root);
            if !root.is_dir() {
                continue;
            }
            targets.extend(
                WalkDir::new(&root)
                    .max_depth(MAX_DEPTH)
                    .follow_links(false)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_entry(|e| {
                        if e.file_type().is_dir() {
                            let name = e.file_name().to_string_lossy();
                            return !SKIP_DIRS.iter().any(|&skip| name == skip);
                        }
                        true
                    })
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        e.file_type().is_file() && e.file_name() == OsStr::new(".DS_Store")
                    })
                    .map(|e| CleanupTarget::at(e.into_path(), layout)),
            );
        }

        targets
    }
}
