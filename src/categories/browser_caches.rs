use std::path::{Path, PathBuf};

use crate::cleaner::{Cleaner, CleanupTarget};
use crate::config::Layout;

pub struct BrowserCaches;

impl BrowserCaches {
    fn chrome_cache_dirs(home: &Path) -> Vec<PathBuf> {
        // Chrome stores caches per profile: Default, Profile 1, etc.
        profile_dirs(&home.join("Library/Caches/Google/Chrome"))
            .into_iter()
            .flat_map(|profile| [profile.join("Cache"), profile.join("Code Cache")])
            .filter(|dir| dir.exists())
            .collect()
    }

    fn safari_cache_dirs(home: &Path) -> Vec<PathBuf> {
        let path = home.join("Library/Caches/com.apple.Safari");
        if path.exists() {
            vec![path]
        } else {
            vec![]
        }
    }

    fn firefox_cache_dirs(home: &Path) -> Vec<PathBuf> {
        profile_dirs(&home.join("Library/Caches/Firefox/Profiles"))
            .into_iter()
            .map(|profile| profile.join("cache2"))
            .filter(|dir| dir.exists())
            .collect()
    }
}

fn profile_dirs(base: &Path) -> Vec<PathBuf> {
    let Ok(read_dir) = std::fs::read_dir(base) else {
        return vec![];
    };
    let mut dirs: Vec<PathBuf> = read_dir
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

impl Cleaner for BrowserCaches {
    fn name(&self) -> &'static str {
        "browsers"
    }

    fn label(&self) -> &'static str {
        "Browser Caches"
    }

    fn targets(&self, layout: &Layout) -> Vec<CleanupTarget> {
        let home = layout.home();
        [
            Self::chrome_cache_dirs(home),
            Self::safari_cache_dirs(home),
            Self::firefox_cache_dirs(home),
        ]
        .into_iter()
        .flatten()
        .map(|dir| CleanupTarget::at(dir, layout))
        .collect()
    }
}
