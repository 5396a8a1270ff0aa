use std::collections::HashSet;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::cleaner::{Cleaner, Session};
use crate::utils;

/// Where repositories usually live, relative to home.
const PROJECT_ROOTS: &[&str] = &["Developer", "Projects", "projects", "code", "src", "workspace"];

/// Maximum depth below a project root.
const MAX_DEPTH: usize = 4;

/// Directories that never contain a repository worth collecting.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "build",
    "dist",
    ".venv",
    "venv",
    "vendor",
    "Pods",
    "__pycache__",
];

pub struct GitRepositories;

impl Cleaner for GitRepositories {
    fn name(&self) -> &'static str {
        "git"
    }

    fn label(&self) -> &'static str {
        "Git Repositories"
    }

    fn run(&self, session: &mut Session<'_>) {
        let repos = find_repositories(session.layout.home());
        if repos.is_empty() {
            session.note("No repositories found");
            return;
        }

        let Some(git) = session.locate("git") else {
            return;
        };

        for repo in &repos {
            session.note(&utils::display_path(repo, session.layout.home()));
        }
        if !session.confirm(&format!(
            "Run git gc on {} repositor{}?",
            repos.len(),
            if repos.len() == 1 { "y" } else { "ies" }
        )) {
            crate::output::print_skipped(self.label());
            return;
        }

        for repo in &repos {
            let Some(repo) = repo.to_str() else {
                session.note(&format!("Skipping non UTF-8 path {}", repo.display()));
                continue;
            };
            session.run_native(&git, &["-C", repo, "gc", "--prune=now", "--quiet"]);
        }
    }
}

/// Working trees under the usual project roots. A repository's own
/// subdirectories are not searched.
pub fn find_repositories(home: &Path) -> Vec<PathBuf> {
    let mut repos = Vec::new();
    // "Projects" and "projects" are the same directory on a case-insensitive
    // volume.
    let mut seen_roots = HashSet::new();

    for root in PROJECT_ROOTS {
        let root = home.join(root);
        let Ok(meta) = root.metadata() else {
            continue;
        };
        if !meta.is_dir() || !seen_roots.insert((meta.dev(), meta.ino())) {
            continue;
        }

        let mut walker = WalkDir::new(&root)
            .max_depth(MAX_DEPTH)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                e.file_type().is_dir() && !SKIP_DIRS.iter().any(|&skip| name == skip)
            });

        while let Some(entry) = walker.next() {
            let Ok(entry) = entry else {
                continue;
            };
            if entry.path().join(".git").is_dir() {
                repos.push(entry.into_path());
                walker.skip_current_dir();
            }
        }
    }

    repos
}
