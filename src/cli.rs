//! CLI argument definitions.
//!
//! A single entry point: running the binary with no arguments performs the
//! whole bootstrap. Flags only adjust presentation and previewing.

use clap::Parser;
use std::path::PathBuf;

/// Environment bootstrapper for the photo sorter application.
#[derive(Debug, Parser)]
#[command(name = "photosort-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Preview commands without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_a_full_run() {
        let cli = Cli::parse_from(["photosort-setup"]);
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
        assert!(cli.project.is_none());
    }

    #[test]
    fn dry_run_flag_parses() {
        let cli = Cli::parse_from(["photosort-setup", "--dry-run"]);
        assert!(cli.dry_run);
    }

    #[test]
    fn project_flag_takes_a_path() {
        let cli = Cli::parse_from(["photosort-setup", "--project", "/tmp/photos"]);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/photos")));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["photosort-setup", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
