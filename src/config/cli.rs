//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Pushover: command line message sender
///
/// Resolves layered configuration (system files, user file, presets,
/// command line overrides) and sends one message through the Pushover API.
#[derive(Debug, Parser)]
#[command(name = "pushover")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read configuration from FILE only, bypassing the search paths
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overlay the PRESET section from configuration
    #[arg(long, short, value_name = "PRESET")]
    pub preset: Option<String>,

    /// Override api_url from config
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override api_user from config
    #[arg(long, short = 'U', value_name = "USER")]
    pub user: Option<String>,

    /// Override api_token from config
    #[arg(long, short = 'T', value_name = "TOKEN")]
    pub token: Option<String>,

    /// Override api_device from config (can be specified multiple times,
    /// comma separated lists are accepted)
    #[arg(long = "device", short = 'd', value_name = "DEVICE")]
    pub devices: Vec<String>,

    /// Set the message title
    #[arg(long = "title", short = 't', value_name = "TEXT")]
    pub title: Option<String>,

    /// Include a supplementary URL in the message
    #[arg(long = "msg-url", value_name = "URL")]
    pub msg_url: Option<String>,

    /// Set the title of the supplementary URL
    #[arg(long = "msg-url-title", value_name = "TEXT")]
    pub msg_url_title: Option<String>,

    /// Set the message priority (default: normal)
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,

    /// Log the request without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Message text (read from standard input when omitted)
    #[arg(value_name = "TEXT", trailing_var_arg = true)]
    pub message: Vec<String>,
}

/// Subcommands for pushover
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "pushover.conf")]
        output: PathBuf,
    },
    /// Show configuration file search locations
    Paths {
        /// Only list configuration files that are present
        #[arg(long)]
        only_existing: bool,
    },
    /// List presets available in the effective configuration
    Presets,
}

/// Message priority argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    /// No sound or vibration, and no banner
    Lowest,
    /// No sound or vibration
    Low,
    /// Regular notification
    Normal,
    /// Bypasses the recipient's quiet hours
    High,
    /// Repeats until acknowledged
    Emergency,
}

impl From<PriorityArg> for crate::api::Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Lowest => Self::Lowest,
            PriorityArg::Low => Self::Low,
            PriorityArg::Normal => Self::Normal,
            PriorityArg::High => Self::High,
            PriorityArg::Emergency => Self::Emergency,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the message text from the positional arguments, if any were
    /// given.
    #[must_use]
    pub fn message_text(&self) -> Option<String> {
        if self.message.is_empty() {
            None
        } else {
            Some(self.message.join(" "))
        }
    }
}
