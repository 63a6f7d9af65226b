//! Command-line and environment configuration.
//!
//! # Invariants
//! - Every option has an environment fallback so scripted runs need no flags.
//! - Unset options resolve to deterministic defaults in `Config::from_cli`.

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use hikingquests_core::default_log_level;
use std::path::PathBuf;
use uuid::Uuid;

const DEFAULT_DB_FILE_NAME: &str = "hikingquests.sqlite3";

/// HikingQuests: track hiking quests from the command line.
#[derive(Parser, Debug)]
#[command(name = "hikingquests", version)]
#[command(about = "Plan, start and complete hiking quests")]
pub struct Cli {
    /// SQLite database file (created on first use)
    #[arg(long, env = "HIKINGQUESTS_DB_PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "HIKINGQUESTS_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files (stderr when unset)
    #[arg(long, env = "HIKINGQUESTS_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Include internal details in unexpected-error responses
    #[arg(
        long,
        env = "HIKINGQUESTS_DEV",
        global = true,
        value_parser = BoolishValueParser::new()
    )]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a planned quest
    Add { title: String, description: String },
    /// Change the title and/or description of a quest
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a quest
    Delete { id: Uuid },
    /// Show one quest by id
    Get { id: Uuid },
    /// Show one quest by title (case-insensitive)
    Find { title: String },
    /// List every quest
    List,
    /// Move a planned quest to in-progress
    Start { id: Uuid },
    /// Move an in-progress quest to completed
    Complete { id: Uuid },
    /// Insert starter quests into an empty log
    Seed,
    /// Print the core version
    Version,
}

impl Command {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::Get { .. } => "get",
            Self::Find { .. } => "find",
            Self::List => "list",
            Self::Start { .. } => "start",
            Self::Complete { .. } => "complete",
            Self::Seed => "seed",
            Self::Version => "version",
        }
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub expose_error_details: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let db_path = cli
            .db
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = cli
            .log_level
            .clone()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_level,
            log_dir: cli.log_dir.clone(),
            expose_error_details: cli.dev,
        }
    }
}
