//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the welovepublicservice catalog
#[derive(Parser, Debug)]
#[command(name = "wlps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API host, overrides config and WLPS_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Stop after this many items
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Log level, ignored when RUST_LOG is set
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the discovered endpoint map
    Endpoints,

    /// List categories
    Categories,

    /// List shows in a category, by title
    Shows {
        /// Category id
        #[arg(long)]
        category: String,
    },

    /// List episodes of a show, newest first
    Episodes {
        /// Show id
        #[arg(long)]
        show: String,
    },

    /// List recommended episodes, newest first
    Recommended,

    /// List the latest episodes
    Latest,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shows() {
        let cli = Cli::parse_from(["wlps", "shows", "--category", "12", "--limit", "5"]);
        assert_eq!(
            cli.command,
            Commands::Shows {
                category: "12".to_string()
            }
        );
        assert_eq!(cli.limit, Some(5));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "wlps",
            "--format",
            "pretty",
            "--log-level",
            "debug",
            "--base-url",
            "http://localhost:8000",
            "latest",
        ]);
        assert_eq!(cli.command, Commands::Latest);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_episodes_requires_show() {
        assert!(Cli::try_parse_from(["wlps", "episodes"]).is_err());
    }
}
