use crate::cleaner::{Cleaner, CleanupTarget, Session};
use crate::config::Layout;

/// Download caches the toolchains refill on demand, relative to home.
const CACHE_DIRS: &[&str] = &[
    ".cargo/registry/cache",
    "Library/Caches/go-build",
    ".gradle/caches",
];

pub struct LanguageCaches;

impl Cleaner for LanguageCaches {
    fn name(&self) -> &'static str {
        "language-caches"
    }

    fn label(&self) -> &'static str {
        "Language Package Caches"
    }

    fn targets(&self, layout: &Layout) -> Vec<CleanupTarget> {
        CACHE_DIRS
            .iter()
            .map(|dir| CleanupTarget::at(layout.home_path(dir), layout))
            .collect()
    }

    fn run(&self, session: &mut Session<'_>) {
        let targets = self.targets(session.layout);
        session.sweep(self.label(), targets);

        let Some(pip) = session.locate_any(&["pip3", "pip"]) else {
            return;
        };
        if session.confirm("Purge the pip cache?") {
            session.run_native(&pip, &["cache", "purge"]);
        } else {
            crate::output::print_skipped("pip cache");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::FakeRunner;
    use crate::config::RunConfig;
    use crate::prompt::testing::ScriptedPrompter;
    use crate::test_support::Fixture;

    #[test]
    fn sweeps_directories_then_purges_pip() {
        let fx = Fixture::new();
        fx.write(".cargo/registry/cache/index/serde.crate", 50);
        fx.write(".cargo/registry/src/index/serde/lib.rs", 50);

        let config = RunConfig::default();
        let prompter = ScriptedPrompter::new(&[true, true]);
        let runner = FakeRunner::with_tools(&["pip"]);
        let mut session = Session::new(&config, &fx.layout, &prompter, &runner, fx.live_log());

        LanguageCaches.run(&mut session);

        assert!(!fx.home_path(".cargo/registry/cache").exists());
        assert!(fx.home_path(".cargo/registry/src/index/serde/lib.rs").exists());
        assert_eq!(runner.calls(), vec!["pip cache purge"]);
        assert_eq!(session.summary().tools_skipped, 0);
    }

    #[test]
    fn missing_pip_is_reported_once() {
        let fx = Fixture::new();
        let config = RunConfig::default();
        let prompter = ScriptedPrompter::new(&[]);
        let runner = FakeRunner::default();
        let mut session = Session::new(&config, &fx.layout, &prompter, &runner, fx.live_log());

        LanguageCaches.run(&mut session);

        assert_eq!(session.summary().tools_skipped, 1);
        assert_eq!(prompter.times_asked(), 0);
    }
}
