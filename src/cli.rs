use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "stackscan",
    about = "Profile a project tree: languages, frameworks, testing stack and dependencies",
    version
)]
pub struct Cli {
    /// Project path to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Discover every project root below PATH and profile each one
    #[arg(long)]
    pub workspace: bool,

    /// Config file [default: ./.stackscan/config.toml, fallback ~/.config/stackscan/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Skip directories with this name (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Show every dependency and, for workspaces, every root's profile
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print a summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stackscan"]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.report, ReportFormat::Terminal);
        assert!(!cli.workspace);
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn test_repeatable_ignore_and_json() {
        let cli = Cli::parse_from([
            "stackscan",
            "repo",
            "--workspace",
            "--report",
            "json",
            "--ignore",
            "fixtures",
            "--ignore",
            "tmp",
        ]);
        assert_eq!(cli.path, PathBuf::from("repo"));
        assert!(cli.workspace);
        assert_eq!(cli.report, ReportFormat::Json);
        assert_eq!(cli.ignore, vec!["fixtures", "tmp"]);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["stackscan", "-v", "-q"]).is_err());
    }
}
