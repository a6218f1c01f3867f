//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use neodash::SortMode;

#[derive(Parser)]
#[command(name = "neodash")]
#[command(version, about = "Neodash hall of fame and level browser")]
pub struct Cli {
    /// Service root URL
    #[arg(long, global = true, env = "NEODASH_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Protocol version sent when logging in
    #[arg(long, global = true, env = "NEODASH_PROTOCOL_VERSION")]
    pub protocol_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Authenticate and save the session
    Login {
        /// Steam ID (sent Base64-encoded; pass it raw)
        #[arg(long, env = "NEODASH_STEAM_ID")]
        steam_id: String,

        /// Display name (sent Base64-encoded; pass it raw)
        #[arg(long)]
        display_name: String,
    },

    /// Forget the saved session
    Logout,

    /// Show the hall of fame
    HallOfFame {
        #[command(flatten)]
        session: SessionArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Only show the top N entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Browse or search levels
    Levels {
        #[command(flatten)]
        session: SessionArgs,

        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch the hall of fame and a level page side by side
    Overview {
        #[command(flatten)]
        session: SessionArgs,

        #[command(flatten)]
        query: QueryArgs,

        /// Hall of fame entries to show
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

/// Session override; falls back to the saved credentials
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    #[arg(long, env = "NEODASH_UNIQUE_ID")]
    pub unique_id: Option<u64>,

    #[arg(long, env = "NEODASH_TOKEN")]
    pub token: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Sort order: recent, ratings or downloads
    #[arg(long, default_value = "recent")]
    pub sort: SortMode,

    /// Request hex thumbnails
    #[arg(long)]
    pub thumbnails: bool,

    /// Free-text search filter
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Tsv,
    Json,
}
