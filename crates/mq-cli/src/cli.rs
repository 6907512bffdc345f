//! Top-level CLI parser for the `mq` binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use mq_core::enums::{AuditAction, BoardType, WorkoutVersion};

#[derive(Debug, Parser)]
#[command(name = "mq", version, about = "Marquee - gym display board scheduler")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    Raw,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Schedule a card for a board on a date
    Push(PushArgs),
    /// Edit fields of an existing scheduled card
    Edit(EditArgs),
    /// Show both boards' entries for a date
    Show(ShowArgs),
    /// List entries in a date range, paginated
    List(ListArgs),
    /// Delete all entries for a date
    Delete(DeleteArgs),
    /// Emergency-replace today's card on one board
    Override(OverrideArgs),
    /// Resolve displayable content through the fallback chain
    Resolve(ResolveArgs),
    /// Query the audit trail
    Audit(AuditArgs),
    /// Today's per-board presence
    Status,
    /// Manage reusable card templates
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
    /// Run or daemonize the midnight swap
    Swap {
        #[command(subcommand)]
        action: SwapCommands,
    },
}

fn parse_board(s: &str) -> Result<BoardType, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("unknown board '{s}' (expected mainboard or modboard)"))
}

fn parse_version(s: &str) -> Result<WorkoutVersion, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("unknown version '{s}' (expected rx, scaled, or mod)"))
}

fn parse_action(s: &str) -> Result<AuditAction, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|_| {
        format!(
            "unknown action '{s}' (expected schedule, edit, delete, override, swap, or fallback_triggered)"
        )
    })
}

#[derive(Debug, clap::Args)]
pub struct PushArgs {
    /// Schedule date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Target board
    #[arg(long, value_parser = parse_board)]
    pub board: BoardType,

    /// Workout title shown in listings and the snapshot
    #[arg(long)]
    pub title: String,

    /// Read the card HTML from a file
    #[arg(long, conflicts_with = "html")]
    pub html_file: Option<PathBuf>,

    /// Card HTML passed inline
    #[arg(long)]
    pub html: Option<String>,

    /// Workout version tag
    #[arg(long, value_parser = parse_version)]
    pub version: Option<WorkoutVersion>,

    /// Human-readable date label rendered on the card
    #[arg(long)]
    pub date_label: Option<String>,

    /// Who pushed this card
    #[arg(long)]
    pub pushed_by: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct EditArgs {
    #[arg(long)]
    pub date: NaiveDate,

    #[arg(long, value_parser = parse_board)]
    pub board: BoardType,

    /// New workout title
    #[arg(long)]
    pub title: Option<String>,

    /// Replace the card HTML from a file
    #[arg(long, conflicts_with = "html")]
    pub html_file: Option<PathBuf>,

    /// Replace the card HTML inline
    #[arg(long)]
    pub html: Option<String>,

    /// New workout version tag
    #[arg(long, value_parser = parse_version)]
    pub version: Option<WorkoutVersion>,
}

#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    #[arg(long)]
    pub date: NaiveDate,
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Range start (inclusive)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Range end (inclusive)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Entries per page
    #[arg(long, default_value_t = 31)]
    pub page_size: u32,
}

#[derive(Debug, clap::Args)]
pub struct DeleteArgs {
    #[arg(long)]
    pub date: NaiveDate,
}

#[derive(Debug, clap::Args)]
pub struct OverrideArgs {
    #[arg(long, value_parser = parse_board)]
    pub board: BoardType,

    /// Read replacement HTML from a file
    #[arg(long, conflicts_with_all = ["html", "from_date"])]
    pub html_file: Option<PathBuf>,

    /// Replacement HTML passed inline
    #[arg(long, conflicts_with = "from_date")]
    pub html: Option<String>,

    /// Copy content from an existing entry on this date
    #[arg(long)]
    pub from_date: Option<NaiveDate>,

    /// Workout version tag for the replacement card
    #[arg(long, value_parser = parse_version)]
    pub version: Option<WorkoutVersion>,

    /// Why the override happened (recorded in the audit trail)
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    #[arg(long, value_parser = parse_board)]
    pub board: BoardType,

    /// Date to resolve (defaults to today in the configured time zone)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print only the resolved HTML, not the JSON envelope
    #[arg(long)]
    pub html_only: bool,
}

#[derive(Debug, clap::Args)]
pub struct AuditArgs {
    #[arg(long, value_parser = parse_action)]
    pub action: Option<AuditAction>,

    #[arg(long, value_parser = parse_board)]
    pub board: Option<BoardType>,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum TemplateCommands {
    /// Create a template, replacing any existing one with the same name
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, value_parser = parse_board)]
        board: BoardType,

        #[arg(long, conflicts_with = "html")]
        html_file: Option<PathBuf>,

        #[arg(long)]
        html: Option<String>,

        #[arg(long, value_parser = parse_version)]
        version: Option<WorkoutVersion>,
    },
    /// Show one template by ID or name
    Show {
        /// Template ID (tpl-...) or unique name
        id_or_name: String,
    },
    /// List templates, optionally for one board
    List {
        #[arg(long, value_parser = parse_board)]
        board: Option<BoardType>,
    },
    /// Delete a template by ID
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum SwapCommands {
    /// Run one swap for today, immediately
    Run,
    /// Run the swap loop in the foreground
    Daemon,
}
