use crate::cleaner::{Cleaner, Session};

struct CacheCommand {
    tool: &'static str,
    args: &'static [&'static str],
}

const CACHE_COMMANDS: &[CacheCommand] = &[
    CacheCommand {
        tool: "npm",
        args: &["cache", "clean", "--force"],
    },
    CacheCommand {
        tool: "yarn",
        args: &["cache", "clean"],
    },
    CacheCommand {
        tool: "pnpm",
        args: &["store", "prune"],
    },
];

pub struct NodePackageManagers;

impl Cleaner for NodePackageManagers {
    fn name(&self) -> &'static str {
        "node"
    }

    fn label(&self) -> &'static str {
        "Node Package Managers"
    }

    fn run(&self, session: &mut Session<'_>) {
        let installed: Vec<_> = CACHE_COMMANDS
            .iter()
            .filter_map(|cmd| session.locate(cmd.tool).map(|path| (path, cmd)))
            .collect();
        if installed.is_empty() {
            return;
        }

        let names: Vec<&str> = installed.iter().map(|(_, cmd)| cmd.tool).collect();
        if !session.confirm(&format!("Clear the {} cache?", names.join(", "))) {
            crate::output::print_skipped(self.label());
            return;
        }

        for (program, cmd) in &installed {
            session.run_native(program, cmd.args);
        }
    }
}
