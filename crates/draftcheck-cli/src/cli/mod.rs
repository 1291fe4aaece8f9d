//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use draftcheck_core::domain::{ProductField, ProductStatus};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "draftcheck",
    bin_name = "draftcheck",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2714} Product draft validation",
    long_about = "draftcheck validates supplier product drafts against the \
                  catalogue form rules and reports every problem per field.",
    after_help = "EXAMPLES:\n\
        \x20 draftcheck check drafts/mug.json\n\
        \x20 draftcheck check drafts/ --fail-fast\n\
        \x20 draftcheck --output-format json check drafts/ > report.json\n\
        \x20 draftcheck rules --field compare_price",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate draft documents.
    #[command(
        visible_alias = "c",
        about = "Validate draft documents or directories",
        after_help = "EXAMPLES:\n\
            \x20 draftcheck check mug.json\n\
            \x20 draftcheck check drafts/ extra.toml\n\
            \x20 draftcheck check drafts/ --ext json --no-recursive\n\
            \x20 draftcheck check mug.json --cost-price 0"
    )]
    Check(CheckArgs),

    /// List the validation rules.
    #[command(
        visible_alias = "ls",
        about = "List validation rules and their messages",
        after_help = "EXAMPLES:\n\
            \x20 draftcheck rules\n\
            \x20 draftcheck rules --field sku\n\
            \x20 draftcheck rules --format json"
    )]
    Rules(RulesArgs),

    /// Initialise a draftcheck configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 draftcheck init           # default location\n\
            \x20 draftcheck init --local   # .draftcheck.toml in CWD\n\
            \x20 draftcheck init --force   # overwrite without asking"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 draftcheck completions bash > ~/.local/share/bash-completion/completions/draftcheck\n\
            \x20 draftcheck completions zsh  > ~/.zfunc/_draftcheck\n\
            \x20 draftcheck completions fish > ~/.config/fish/completions/draftcheck.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the draftcheck configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 draftcheck config get defaults.status\n\
            \x20 draftcheck config list\n\
            \x20 draftcheck config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `draftcheck check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Draft documents (.json / .toml) or directories containing them.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Stop at the first invalid draft.
    #[arg(long = "fail-fast", help = "Stop at the first invalid draft")]
    pub fail_fast: bool,

    /// Status to assume for drafts that do not set one.
    #[arg(long = "status", value_name = "STATUS", help = "Default draft status")]
    pub status: Option<ProductStatus>,

    /// Cost price to assume for drafts that leave it empty.
    #[arg(
        long = "cost-price",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        help = "Default cost price"
    )]
    pub cost_price: Option<f64>,

    /// MRP to assume for drafts that leave it empty.
    #[arg(
        long = "compare-price",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        help = "Default MRP (compare price)"
    )]
    pub compare_price: Option<f64>,

    /// File extensions picked up when walking directories.
    #[arg(
        long = "ext",
        value_name = "EXT",
        value_delimiter = ',',
        help = "Extensions to read in directories (e.g. json,toml)"
    )]
    pub extensions: Vec<String>,

    /// Only read the top level of directories.
    #[arg(long = "no-recursive", help = "Do not descend into subdirectories")]
    pub no_recursive: bool,
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `draftcheck rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Only show rules for one field.
    #[arg(
        short = 'f',
        long = "field",
        value_name = "FIELD",
        help = "Filter by field (e.g. title, sku, compare_price)"
    )]
    pub field: Option<ProductField>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: RulesFormat,
}

/// Output format for the `rules` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RulesFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `draftcheck init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(
        long = "global",
        conflicts_with = "local",
        help = "Create global configuration"
    )]
    pub global: bool,

    /// Write to `.draftcheck.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,

    /// Answer yes to the overwrite prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `draftcheck completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `draftcheck config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.status`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
