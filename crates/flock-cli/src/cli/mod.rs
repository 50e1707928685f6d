//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "flock",
    bin_name = "flock",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Set up Flock deployment in a Swift package",
    long_about = "Flock deploys Swift server applications. `flock init` adds the \
                  Flockfile, per-environment configuration and the hidden build \
                  directory to an existing Swift package.",
    after_help = "EXAMPLES:\n\
        \x20 flock init\n\
        \x20 flock init --path ./my-server --no-fetch\n\
        \x20 flock completions bash > /usr/share/bash-completion/completions/flock",
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
    /// Initialize Flock in the current Swift package.
    #[command(
        about = "Initialize Flock in a Swift package",
        after_help = "EXAMPLES:\n\
            \x20 flock init             # current directory\n\
            \x20 flock init -p ../api   # another package\n\
            \x20 flock init --no-fetch  # skip downloading dependencies"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `flock init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Root of the Swift package. Defaults to the current directory.
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Skip the dependency download after scaffolding.
    #[arg(long = "no-fetch", help = "Do not download and build dependencies")]
    pub no_fetch: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `flock completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
