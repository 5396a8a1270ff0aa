use crate::cleaner::{Cleaner, Session};

/// Prune subcommands, run in order. Each one is attempted even if an earlier
/// one fails (for example when the daemon is not running).
const PRUNES: &[&[&str]] = &[
    &["container", "prune", "-f"],
    &["image", "prune", "-f"],
    &["volume", "prune", "-f"],
    &["builder", "prune", "-f"],
];

pub struct Docker;

impl Cleaner for Docker {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn label(&self) -> &'static str {
        "Docker"
    }

    fn run(&self, session: &mut Session<'_>) {
        let Some(docker) = session.locate("docker") else {
            return;
        };

        if !session.confirm("Prune unused Docker containers, images, volumes and build cache?") {
            crate::output::print_skipped(self.label());
            return;
        }

        for args in PRUNES {
            session.run_native(&docker, args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::FakeRunner;
    use crate::command::SystemRunner;
    use crate::config::RunConfig;
    use crate::prompt::testing::ScriptedPrompter;
    use crate::test_support::Fixture;

    #[test]
    fn absent_docker_is_skipped() {
        let fx = Fixture::new();
        let config = RunConfig::default();
        let prompter = ScriptedPrompter::new(&[true]);
        let empty_bin = tempfile::TempDir::new().unwrap();
        let runner = SystemRunner::with_search_path(empty_bin.path());
        let mut session = Session::new(&config, &fx.layout, &prompter, &runner, fx.disabled_log());

        Docker.run(&mut session);

        assert_eq!(session.summary().tools_skipped, 1);
        assert_eq!(session.summary().warnings, 0);
        assert_eq!(prompter.times_asked(), 0);
    }

    #[test]
    fn every_prune_runs_even_after_a_failure() {
        let fx = Fixture::new();
        let config = RunConfig {
            skip_confirmation: true,
            ..RunConfig::default()
        };
        let prompter = ScriptedPrompter::new(&[]);
        let runner = FakeRunner::with_tools(&["docker"]).failing("docker container");
        let mut session = Session::new(&config, &fx.layout, &prompter, &runner, fx.live_log());

        Docker.run(&mut session);

        assert_eq!(
            runner.calls(),
            vec![
                "docker container prune -f",
                "docker image prune -f",
                "docker volume prune -f",
                "docker builder prune -f",
            ]
        );
        assert_eq!(session.summary().warnings, 1);
        assert_eq!(session.summary().commands, 3);
    }

    #[test]
    fn declining_runs_nothing() {
        let fx = Fixture::new();
        let config = RunConfig::default();
        let prompter = ScriptedPrompter::new(&[false]);
        let runner = FakeRunner::with_tools(&["docker"]);
        let mut session = Session::new(&config, &fx.layout, &prompter, &runner, fx.live_log());

        Docker.run(&mut session);

        assert!(runner.calls().is_empty());
    }
}
