use std::path::{Path, PathBuf};

use crate::command::{self, CommandRunner};
use crate::config::{Layout, RunConfig};
use crate::error::{CleanupError, Severity};
use crate::output;
use crate::prompt::{self, Prompter};
use crate::run_log::RunLog;
use crate::utils;

/// One path considered for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupTarget {
    pub path: PathBuf,
    pub label: String,
}

impl CleanupTarget {
    /// Target labelled with its path, shortened to `~/...` under home.
    pub fn at(path: PathBuf, layout: &Layout) -> Self {
        let label = utils::display_path(&path, layout.home());
        Self { path, label }
    }
}

/// Running totals for the end-of-run report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Bytes freed, or bytes that would be freed in a dry run.
    pub bytes: u64,
    pub targets: usize,
    pub commands: usize,
    pub tools_skipped: usize,
    pub warnings: usize,
}

/// The trait every handler implements.
pub trait Cleaner {
    /// Machine-readable name (e.g. "system-caches").
    fn name(&self) -> &'static str;

    /// Human-readable label for section headers (e.g. "System Caches & Logs").
    fn label(&self) -> &'static str;

    /// Paths this handler removes. Missing ones are dropped by the session.
    fn targets(&self, _layout: &Layout) -> Vec<CleanupTarget> {
        Vec::new()
    }

    /// Do the work. The default sweeps `targets()` behind one confirmation.
    fn run(&self, session: &mut Session<'_>) {
        let targets = self.targets(session.layout);
        session.sweep(self.label(), targets);
    }
}

/// Everything a handler needs for one run: the settings, the filesystem
/// roots, the injected prompt and command capabilities, and the run log.
pub struct Session<'a> {
    pub config: &'a RunConfig,
    pub layout: &'a Layout,
    prompter: &'a dyn Prompter,
    runner: &'a dyn CommandRunner,
    log: RunLog,
    summary: Summary,
}

impl<'a> Session<'a> {
    pub fn new(
        config: &'a RunConfig,
        layout: &'a Layout,
        prompter: &'a dyn Prompter,
        runner: &'a dyn CommandRunner,
        log: RunLog,
    ) -> Self {
        Self {
            config,
            layout,
            prompter,
            runner,
            log,
            summary: Summary::default(),
        }
    }

    #[cfg(test)]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn finish(self) -> (Summary, RunLog) {
        (self.summary, self.log)
    }

    /// Verbose-only line.
    pub fn note(&self, msg: &str) {
        if self.config.verbose {
            output::print_detail(msg);
        }
    }

    pub fn confirm(&self, question: &str) -> bool {
        prompt::confirm(self.config, self.prompter, question)
    }

    /// Report a non-fatal failure and keep going.
    pub fn warn(&mut self, err: CleanupError) {
        match err.severity() {
            Severity::Skip => {
                tracing::debug!(reason = %err, "skipping");
                output::print_info(&format!("{err}, skipping"));
                self.summary.tools_skipped += 1;
            }
            Severity::Warning => {
                tracing::warn!(error = %err, "continuing after failure");
                output::print_warning(&err.to_string());
                self.summary.warnings += 1;
            }
        }
    }

    /// Remove every existing target after a single confirmation.
    pub fn sweep(&mut self, label: &str, targets: Vec<CleanupTarget>) {
        let found: Vec<(CleanupTarget, u64)> = targets
            .into_iter()
            .filter_map(|t| match utils::inspect(&t.path) {
                Some(size) => Some((t, size)),
                None => {
                    self.note(&format!("{} not found", t.label));
                    None
                }
            })
            .collect();

        if found.is_empty() {
            self.note("Nothing to clean");
            return;
        }

        let total: u64 = found.iter().map(|(_, size)| size).sum();
        if !self.config.dry_run {
            for (target, size) in &found {
                output::print_found(&target.label, &utils::format_size(*size));
            }
        }

        let question = format!(
            "Clean {label} ({} item(s), {})?",
            found.len(),
            utils::format_size(total)
        );
        if !self.confirm(&question) {
            output::print_skipped(label);
            return;
        }

        for (target, size) in &found {
            self.clean_sized(target, *size);
        }
    }

    /// Remove a single target: no-op if missing, report-only in a dry run.
    pub fn clean_target(&mut self, target: &CleanupTarget) {
        match utils::inspect(&target.path) {
            Some(size) => self.clean_sized(target, size),
            None => self.note(&format!("{} not found", target.label)),
        }
    }

    fn clean_sized(&mut self, target: &CleanupTarget, size: u64) {
        let pretty = utils::format_size(size);
        if self.config.dry_run {
            output::print_would_clean(&target.label, &pretty);
            self.summary.bytes += size;
            self.summary.targets += 1;
            return;
        }

        match utils::safe_remove(&target.path) {
            Ok(freed) => {
                let freed_pretty = utils::format_size(freed);
                output::print_cleaned(&target.label, &freed_pretty);
                self.summary.bytes += freed;
                self.summary.targets += 1;
                self.record(&format!(
                    "cleaned {} ({freed_pretty}) {}",
                    target.label,
                    target.path.display()
                ));
            }
            Err(e) => self.warn(CleanupError::failed(
                format!("removing {}", target.label),
                e,
            )),
        }
    }

    /// Look a tool up on the search path; an absent tool is reported and
    /// counted as skipped.
    pub fn locate(&mut self, tool: &str) -> Option<PathBuf> {
        self.locate_any(&[tool])
    }

    /// First of `tools` found on the search path. Only the last miss is
    /// reported when none is installed.
    pub fn locate_any(&mut self, tools: &[&str]) -> Option<PathBuf> {
        let mut miss = None;
        for tool in tools {
            match self.runner.locate(tool) {
                Ok(path) => {
                    tracing::debug!(tool, path = %path.display(), "found tool");
                    return Some(path);
                }
                Err(e) => miss = Some(e),
            }
        }
        if let Some(e) = miss {
            self.warn(e);
        }
        None
    }

    /// Run a native cleanup command once. Failure is reported, never
    /// propagated. Returns the output lines echoed to the operator (only in
    /// verbose mode), or `None` when the command failed.
    pub fn run_native(&mut self, program: &Path, args: &[&str]) -> Option<Vec<String>> {
        let line = command::describe(program, args);
        if self.config.dry_run {
            output::print_would_run(&line);
            return Some(Vec::new());
        }

        match self.runner.run(program, args) {
            Ok(out) => {
                output::print_ran(&line);
                let echoed: Vec<String> = if self.config.verbose {
                    out.lines().map(str::to_string).collect()
                } else {
                    Vec::new()
                };
                for l in &echoed {
                    output::print_passthrough(l);
                }
                self.summary.commands += 1;
                self.record(&format!("ran {line}"));
                Some(echoed)
            }
            Err(e) => {
                self.warn(e);
                None
            }
        }
    }

    fn record(&mut self, entry: &str) {
        if let Err(e) = self.log.append(entry) {
            tracing::warn!(path = %self.log.path().display(), error = %e, "run log write failed");
        }
    }
}
