use chrono::Local;

use crate::categories;
use crate::cleaner::{Session, Summary};
use crate::command::CommandRunner;
use crate::config::{Layout, RunConfig};
use crate::disk_info::DiskInfo;
use crate::output;
use crate::prompt::Prompter;
use crate::run_log::RunLog;
use crate::utils::{self, format_size};

/// Run every handler once, in order, and print the report. Handler failures
/// only show up in the summary; the run itself always completes.
pub fn run(
    config: &RunConfig,
    layout: &Layout,
    prompter: &dyn Prompter,
    runner: &dyn CommandRunner,
) -> (Summary, RunLog) {
    output::print_banner(config.dry_run);

    let before = DiskInfo::for_path(layout.home());
    if let Some(info) = &before {
        output::print_disk_usage("Before", info);
        println!();
    }

    let log = open_log(config, layout);
    let mut session = Session::new(config, layout, prompter, runner, log);

    for cleaner in categories::all_cleaners() {
        output::print_section(cleaner.label());
        tracing::debug!(handler = cleaner.name(), "running handler");
        cleaner.run(&mut session);
        println!();
    }

    let (summary, log) = session.finish();
    let after = DiskInfo::for_path(layout.home());
    report(config, layout, &summary, &log, before.as_ref(), after.as_ref());
    (summary, log)
}

fn open_log(config: &RunConfig, layout: &Layout) -> RunLog {
    let path = RunLog::path_for(layout.home(), Local::now());
    if config.dry_run {
        return RunLog::disabled(path);
    }
    match RunLog::create(path.clone()) {
        Ok(log) => log,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot create run log");
            output::print_warning(&format!(
                "cannot create run log {}: {e}",
                utils::display_path(&path, layout.home())
            ));
            RunLog::disabled(path)
        }
    }
}

fn report(
    config: &RunConfig,
    layout: &Layout,
    summary: &Summary,
    log: &RunLog,
    before: Option<&DiskInfo>,
    after: Option<&DiskInfo>,
) {
    output::print_summary_header();
    let bytes_label = if config.dry_run {
        "Reclaimable:"
    } else {
        "Freed:"
    };
    output::print_summary_row(bytes_label, &format_size(summary.bytes));
    output::print_summary_row("Targets:", &summary.targets.to_string());
    output::print_summary_row("Commands run:", &summary.commands.to_string());
    output::print_summary_row("Tools skipped:", &summary.tools_skipped.to_string());
    output::print_summary_row("Warnings:", &summary.warnings.to_string());
    println!();

    if let Some(info) = after {
        output::print_disk_usage("After", info);
    }

    if config.dry_run {
        output::print_dry_run_footer();
        return;
    }

    if let (Some(before), Some(after)) = (before, after) {
        output::print_reclaimed(&format_size(after.freed_since(before)));
    }
    if log.is_enabled() {
        output::print_log_location(
            &utils::display_path(log.path(), layout.home()),
            log.entries(),
        );
    }
}
