use colored::Colorize;

use crate::disk_info::DiskInfo;
use crate::utils::format_size;

const BAR_WIDTH: usize = 30;

pub fn print_banner(dry_run: bool) {
    println!(
        "{}",
        concat!("devsweep v", env!("CARGO_PKG_VERSION")).bold().cyan()
    );
    if dry_run {
        println!(
            "{}",
            "Dry run: nothing will be deleted.".yellow().bold()
        );
    }
    println!();
}

pub fn print_section(label: &str) {
    println!("{}", format!("=== {label} ===").bold().white());
}

pub fn print_disk_usage(title: &str, info: &DiskInfo) {
    let pct = info.usage_percent();
    let used_len = ((pct * BAR_WIDTH as f32) as usize).min(BAR_WIDTH);
    let bar = format!(
        "{}{}",
        "█".repeat(used_len).red(),
        "░".repeat(BAR_WIDTH - used_len).dimmed()
    );
    println!(
        "{} [{}] {:.1}%  {} used / {} total ({} free)",
        format!("{title}:").bold(),
        bar,
        pct * 100.0,
        format_size(info.used).red(),
        format_size(info.total),
        format_size(info.available).green()
    );
}

pub fn print_found(path: &str, size: &str) {
    println!("  {}  {}", path.dimmed(), size.yellow());
}

pub fn print_would_clean(label: &str, size: &str) {
    println!(
        "  {} {} ({})",
        "Would clean".yellow(),
        label,
        size.yellow()
    );
}

pub fn print_would_run(command: &str) {
    println!("  {} {}", "Would run".yellow(), command.dimmed());
}

pub fn print_cleaned(label: &str, size: &str) {
    println!(
        "  {} {}  {}",
        "Cleaned".green(),
        label,
        format!("{size} freed").green()
    );
}

pub fn print_ran(command: &str) {
    println!("  {} {}", "Ran".green(), command.dimmed());
}

pub fn print_passthrough(line: &str) {
    println!("    {}", line.dimmed());
}

pub fn print_skipped(what: &str) {
    println!("  {} {}", "Skipped".dimmed(), what.dimmed());
}

pub fn print_detail(msg: &str) {
    println!("  {}", msg.dimmed());
}

pub fn print_warning(msg: &str) {
    println!("  {} {}", "Warning:".red().bold(), msg.red());
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

pub fn print_info(msg: &str) {
    println!("  {} {}", "Info:".cyan().bold(), msg);
}

pub fn print_summary_header() {
    println!();
    println!("{}", "=== Summary ===".bold().white());
}

pub fn print_summary_row(label: &str, value: &str) {
    println!("  {:<24} {}", label, value.green());
}

pub fn print_reclaimed(freed: &str) {
    println!(
        "{} {}",
        "Done!".green().bold(),
        format!("{freed} reclaimed on disk.").green()
    );
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Run without --dry-run to delete."
            .yellow()
            .bold()
    );
}

pub fn print_log_location(path: &str, entries: usize) {
    println!(
        "{} {} {}",
        "Log:".bold(),
        path.dimmed(),
        format!("({entries} entries)").dimmed()
    );
}
