//! CLI argument parsing and interactive command parsing for depview

use crate::config::DEFAULT_CONFIG_PATH;
use crate::output::OutputConfig;
use clap::Parser;
use std::path::PathBuf;

/// Show the direct dependencies declared in a Cargo.toml manifest
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depview",
    version,
    about = "Show the direct dependencies of a Cargo.toml manifest"
)]
pub struct CliArgs {
    /// Run once with this config file instead of reading commands from stdin
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Create a default config file if it does not exist, then exit
    #[arg(long)]
    pub init: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Build the output configuration from the flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_cli(self.json, self.verbose, self.quiet, !self.no_color)
    }

    /// Returns true if commands should be read from stdin
    pub fn is_interactive(&self) -> bool {
        self.config.is_none()
    }
}

/// A line typed at the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `config [path]`
    Config(PathBuf),
    /// `exit` or `quit`
    Exit,
    /// Blank line
    Empty,
    /// Anything else
    Invalid(String),
}

/// Usage shown for invalid input
pub const USAGE: &str = "usage: config [path]";

impl Command {
    /// Parse one input line
    ///
    /// `config` alone uses the default config path; `config <path>` takes the
    /// rest of the line as the path.
    pub fn parse_line(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        if line == "exit" || line == "quit" {
            return Command::Exit;
        }

        match line.strip_prefix("config") {
            Some("") => Command::Config(PathBuf::from(DEFAULT_CONFIG_PATH)),
            Some(rest) if rest.starts_with(char::is_whitespace) => {
                Command::Config(PathBuf::from(rest.trim()))
            }
            _ => Command::Invalid(line.to_string()),
        }
    }
}
