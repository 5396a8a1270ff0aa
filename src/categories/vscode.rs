use crate::cleaner::{Cleaner, CleanupTarget};
use crate::config::Layout;

const CODE_SUPPORT: &str = "Library/Application Support/Code";

/// Regenerated by the editor on next launch.
const CACHE_DIRS: &[&str] = &[
    "Cache",
    "CachedData",
    "CachedExtensionVSIXs",
    "Code Cache",
    "GPUCache",
    "logs",
];

pub struct VsCode;

impl Cleaner for VsCode {
    fn name(&self) -> &'static str {
        "vscode"
    }

    fn label(&self) -> &'static str {
        "VS Code"
    }

    fn targets(&self, layout: &Layout) -> Vec<CleanupTarget> {
        let base = layout.home_path(CODE_SUPPORT);
        CACHE_DIRS
            .iter()
            .map(|dir| CleanupTarget::at(base.join(dir), layout))
            .collect()
    }
}
