use crate::cleaner::{Cleaner, Session};

pub struct Homebrew;

impl Cleaner for Homebrew {
    fn name(&self) -> &'static str {
        "homebrew"
    }

    fn label(&self) -> &'static str {
        "Homebrew"
    }

    fn run(&self, session: &mut Session<'_>) {
        let Some(brew) = session.locate("brew") else {
            return;
        };

        if !session.confirm("Remove old Homebrew downloads and unused dependencies?") {
            crate::output::print_skipped(self.label());
            return;
        }

        // Cleanup also empties ~/Library/Caches/Homebrew, which the system
        // cache sweep leaves alone for that reason.
        session.run_native(&brew, &["cleanup", "--prune=all", "-s"]);
        session.run_native(&brew, &["autoremove"]);
    }
}
