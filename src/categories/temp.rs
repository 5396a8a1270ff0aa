use crate::cleaner::{Cleaner, CleanupTarget};
use crate::config::Layout;

/// Contents of the per-user temp directory. The directory itself stays.
pub struct SystemTemp;

impl Cleaner for SystemTemp {
    fn name(&self) -> &'static str {
        "temp"
    }

    fn label(&self) -> &'static str {
        "System Temp"
    }

    fn targets(&self, layout: &Layout) -> Vec<CleanupTarget> {
        let Ok(read_dir) = std::fs::read_dir(&layout.temp_dir) else {
            return Vec::new();
        };
        let mut targets: Vec<CleanupTarget> = read_dir
            .flatten()
            .map(|entry| CleanupTarget::at(entry.path(), layout))
            .collect();
        targets.sort_by(|a, b| a.path.cmp(&b.path));
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::Session;
    use crate::command::testing::FakeRunner;
    use crate::config::RunConfig;
    use crate::prompt::testing::ScriptedPrompter;
    use crate::test_support::Fixture;

    #[test]
    fn clears_temp_entries() {
        let fx = Fixture::new();
        fx.write_temp("build-123/obj.o", 70);
        fx.write_temp("scratch.txt", 30);

        let config = RunConfig {
            skip_confirmation: true,
            ..RunConfig::default()
        };
        let prompter = ScriptedPrompter::new(&[]);
        let runner = FakeRunner::default();
        let mut session = Session::new(&config, &fx.layout, &prompter, &runner, fx.live_log());

        SystemTemp.run(&mut session);

        assert!(fx.layout.temp_dir.is_dir());
        assert_eq!(std::fs::read_dir(&fx.layout.temp_dir).unwrap().count(), 0);
        assert_eq!(session.summary().targets, 2);
    }
}
