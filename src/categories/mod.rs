mod browser_caches;
mod docker;
mod downloads;
mod git_repos;
mod homebrew;
mod language_caches;
mod misc;
mod node;
mod system_caches;
mod temp;
mod trash;
mod virtualization;
mod vscode;
mod xcode;

use crate::cleaner::Cleaner;

/// Every handler, in the order a run visits them.
pub fn all_cleaners() -> Vec<Box<dyn Cleaner>> {
    vec![
        Box::new(system_caches::SystemCaches),
        Box::new(docker::Docker),
        Box::new(virtualization::Virtualization),
        Box::new(vscode::VsCode),
        Box::new(node::NodePackageManagers),
        Box::new(homebrew::Homebrew),
        Box::new(language_caches::LanguageCaches),
        Box::new(git_repos::GitRepositories),
        Box::new(xcode::Xcode),
        Box::new(browser_caches::BrowserCaches),
        Box::new(downloads::OldDownloads),
        Box::new(trash::Trash),
        Box::new(temp::SystemTemp),
        Box::new(misc::MiscSystemFiles),
    ]
}
