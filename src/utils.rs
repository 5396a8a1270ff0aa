use std::path::Path;
use walkdir::WalkDir;

/// Compute total size of a directory recursively.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Get size of a file or directory. Symlinks count as their own length.
pub fn entry_size(path: &Path) -> u64 {
    match path.symlink_metadata() {
        Ok(meta) if meta.is_dir() => dir_size(path),
        Ok(meta) => meta.len(),
        Err(_) => 0,
    }
}

/// Whether anything (including a dangling symlink) sits at `path`.
pub fn exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Size of whatever is at `path`, or `None` when nothing is there. Unreadable
/// entries count as zero.
pub fn inspect(path: &Path) -> Option<u64> {
    exists(path).then(|| entry_size(path))
}

/// Remove a file or directory tree. Returns bytes freed on success.
pub fn safe_remove(path: &Path) -> Result<u64, std::io::Error> {
    let meta = path.symlink_metadata()?;
    let size = entry_size(path);
    if meta.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }
    Ok(size)
}

/// Format byte count the way `du -h` does: "512B", "1.5K", "340M", "1.2G".
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["K", "M", "G", "T"];

    if bytes < 1_024 {
        return format!("{bytes}B");
    }

    let mut value = bytes as f64;
    let mut unit = UNITS[0];
    for candidate in UNITS {
        value /= 1_024.0;
        unit = candidate;
        if value < 1_024.0 {
            break;
        }
    }

    if value < 10.0 {
        format!("{value:.1}{unit}")
    } else {
        format!("{value:.0}{unit}")
    }
}

/// Shorten a path for display by replacing the home prefix with ~.
pub fn display_path(path: &Path, home: &Path) -> String {
    if let Ok(relative) = path.strip_prefix(home) {
        format!("~/{}", relative.display())
    } else {
        path.display().to_string()
    }
}
