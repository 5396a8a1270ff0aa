use std::io::ErrorKind;

use crate::cleaner::{Cleaner, CleanupTarget, Session};
use crate::error::CleanupError;

pub struct Trash;

impl Cleaner for Trash {
    fn name(&self) -> &'static str {
        "trash"
    }

    fn label(&self) -> &'static str {
        "Trash"
    }

    fn run(&self, session: &mut Session<'_>) {
        let trash_dir = session.layout.home_path(".Trash");

        let mut targets: Vec<CleanupTarget> = match std::fs::read_dir(&trash_dir) {
            Ok(read_dir) => read_dir
                .flatten()
                .map(|entry| CleanupTarget::at(entry.path(), session.layout))
                .collect(),
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                session.warn(CleanupError::failed(
                    "reading ~/.Trash",
                    "access denied. Grant Full Disk Access: System Settings → Privacy & Security → Full Disk Access → enable your terminal",
                ));
                return;
            }
            Err(e) => {
                session.warn(CleanupError::failed(
                    format!("reading {}", trash_dir.display()),
                    e,
                ));
                return;
            }
        };
        targets.sort_by(|a, b| a.path.cmp(&b.path));

        session.sweep(self.label(), targets);
    }
}
