use clap::Parser;

use crate::config::DEFAULT_DOWNLOADS_AGE_DAYS;

#[derive(Parser, Debug)]
#[command(
    name = "devsweep",
    about = "Reclaim disk space from developer tool caches, logs and temp files",
    version
)]
pub struct Cli {
    /// Preview only: report what would be cleaned without deleting anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Print extra detail, including the output of native cleanup commands
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not ask for confirmation before deleting
    #[arg(short, long)]
    pub yes: bool,

    /// Delete Downloads files older than this many days
    #[arg(short, long, value_name = "DAYS", default_value_t = DEFAULT_DOWNLOADS_AGE_DAYS)]
    pub age: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use clap::error::ErrorKind;

    #[test]
    fn defaults_require_confirmation() {
        let cli = Cli::try_parse_from(["devsweep"]).unwrap();
        assert_eq!(RunConfig::from(&cli), RunConfig::default());
    }

    #[test]
    fn short_and_long_flags_map_to_config() {
        let cli = Cli::try_parse_from(["devsweep", "-d", "-v", "-y", "-a", "7"]).unwrap();
        let config = RunConfig::from(&cli);
        assert!(config.dry_run);
        assert!(config.verbose);
        assert!(config.skip_confirmation);
        assert_eq!(config.downloads_age_days, 7);

        let cli = Cli::try_parse_from(["devsweep", "--yes", "--age", "0"]).unwrap();
        let config = RunConfig::from(&cli);
        assert!(config.skip_confirmation);
        assert!(!config.dry_run);
        assert_eq!(config.downloads_age_days, 0);
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["devsweep", "--nuke"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn negative_age_is_rejected() {
        let err = Cli::try_parse_from(["devsweep", "--age", "-3"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn help_exits_zero() {
        let err = Cli::try_parse_from(["devsweep", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
