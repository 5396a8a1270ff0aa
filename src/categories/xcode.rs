use crate::cleaner::{Cleaner, CleanupTarget, Session};
use crate::config::Layout;

/// Build products and caches Xcode regenerates, relative to home.
const BUILD_ARTIFACTS: &[&str] = &[
    "Library/Developer/Xcode/DerivedData",
    "Library/Developer/Xcode/iOS DeviceSupport",
    "Library/Developer/CoreSimulator/Caches",
];

pub struct Xcode;

impl Cleaner for Xcode {
    fn name(&self) -> &'static str {
        "xcode"
    }

    fn label(&self) -> &'static str {
        "Xcode"
    }

    fn targets(&self, layout: &Layout) -> Vec<CleanupTarget> {
        BUILD_ARTIFACTS
            .iter()
            .map(|dir| CleanupTarget::at(layout.home_path(dir), layout))
            .collect()
    }

    fn run(&self, session: &mut Session<'_>) {
        let targets = self.targets(session.layout);
        session.sweep(self.label(), targets);

        let Some(xcrun) = session.locate("xcrun") else {
            return;
        };
        if session.confirm("Delete unavailable simulators?") {
            session.run_native(&xcrun, &["simctl", "delete", "unavailable"]);
        } else {
            crate::output::print_skipped("unavailable simulators");
        }
    }
}
