//! CLI argument definitions.
//!
//! All argument structs use clap derive macros. Flags that configure the
//! server also read `AACBOOK_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::parse_duration_arg;
use crate::observability::LogFormat;

// ============================================================================
// Top-Level CLI
// ============================================================================

/// Web reader and slide-deck viewer for the book "Arkitektur som kod".
#[derive(Parser, Debug)]
#[command(name = "aacbook", version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long = "color", default_value = "auto", global = true, env = "AACBOOK_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long = "log-format", default_value = "human", global = true)]
    pub log_format: LogFormat,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the book site over HTTP.
    Serve(ServeArgs),

    /// List chapters in the catalogue.
    Chapters(ChaptersArgs),

    /// Render one chapter's markdown to HTML.
    Render(RenderArgs),

    /// Slide deck utilities.
    Deck(DeckCommand),

    /// Generate shell completions.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Doc source selection
// ============================================================================

/// Where chapter markdown comes from. The two flags are exclusive.
#[derive(Args, Debug, Default, Clone)]
pub struct DocsArgs {
    /// Directory holding the chapter markdown files.
    #[arg(long = "docs-dir", env = "AACBOOK_DOCS_DIR", conflicts_with = "docs_url")]
    pub docs_dir: Option<PathBuf>,

    /// Origin serving `/docs/` over HTTP.
    #[arg(long = "docs-url", env = "AACBOOK_DOCS_URL")]
    pub docs_url: Option<String>,
}

// ============================================================================
// serve
// ============================================================================

/// Arguments for `aacbook serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Site configuration file (YAML).
    #[arg(short = 'c', long = "config", env = "AACBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long = "bind", env = "AACBOOK_BIND")]
    pub bind: Option<String>,

    #[command(flatten)]
    pub docs: DocsArgs,

    /// Slide deck JSON file.
    #[arg(long = "slides", env = "AACBOOK_SLIDES")]
    pub slides: Option<PathBuf>,

    /// Port for the Prometheus metrics listener.
    #[arg(long = "metrics-port", env = "AACBOOK_METRICS_PORT")]
    pub metrics_port: Option<u16>,

    /// Simulated contact submission delay (e.g. "1s", "250ms").
    #[arg(long = "submit-delay", value_parser = parse_duration_arg)]
    pub submit_delay: Option<Duration>,

    /// Timeout for fetching markdown over HTTP.
    #[arg(long = "fetch-timeout", value_parser = parse_duration_arg)]
    pub fetch_timeout: Option<Duration>,
}

// ============================================================================
// chapters
// ============================================================================

/// Arguments for `aacbook chapters`.
#[derive(Args, Debug)]
pub struct ChaptersArgs {
    /// Only show chapters in this area ("all" shows every area).
    #[arg(long = "area", default_value = "all")]
    pub area: String,

    /// Case-insensitive search on title, summary and area.
    #[arg(long = "query", default_value = "")]
    pub query: String,

    /// Output format.
    #[arg(long = "format", default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// render
// ============================================================================

/// Arguments for `aacbook render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Two-digit chapter id, e.g. "07".
    #[arg(value_name = "CHAPTER_ID")]
    pub chapter_id: String,

    #[command(flatten)]
    pub docs: DocsArgs,

    /// Write HTML here instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Timeout for fetching markdown over HTTP.
    #[arg(long = "fetch-timeout", value_parser = parse_duration_arg)]
    pub fetch_timeout: Option<Duration>,
}

// ============================================================================
// deck
// ============================================================================

/// `aacbook deck` subcommand group.
#[derive(Args, Debug)]
pub struct DeckCommand {
    #[command(subcommand)]
    pub subcommand: DeckSubcommand,
}

/// Deck subcommands.
#[derive(Subcommand, Debug)]
pub enum DeckSubcommand {
    /// Validate a slides file and report the start slide.
    Check(DeckCheckArgs),
}

/// Arguments for `aacbook deck check`.
#[derive(Args, Debug)]
pub struct DeckCheckArgs {
    /// Slides JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Slide id to start on, as given by `?id=`.
    #[arg(long = "id")]
    pub id: Option<String>,

    /// Output format.
    #[arg(long = "format", default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// completions / version
// ============================================================================

/// Arguments for `aacbook completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

/// Arguments for `aacbook version`.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(long = "format", default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Value Enums
// ============================================================================

/// Color output control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
