//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted transcript
    Text,
    /// JSON transcript
    Json,
}

/// CLI arguments for parlor
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(author, version, about = "An AI game-show host for one-player party games")]
#[command(long_about = r#"
Parlor drops you into a live party game run by an enthusiastic AI host.
The host opens the show, then rotates through mini-games (What If,
Memory Challenge, If I Were You) before a grand Finale.

Without arguments parlor starts interactive chat mode. With a message
argument it plays a single round: the host opens, your message is
submitted, and the resulting transcript is printed.

Configuration files are loaded from (in priority order):
1. PARLOR_* environment variables
2. --config <path>     Explicit config file
3. ./parlor.toml       Project-level config
4. ~/.config/parlor/config.toml   Global config

The Gemini API key is read from $GEMINI_API_KEY unless configured.

Example:
  parlor
  parlor "surprise me with a what-if"
  parlor --output json "tell me a riddle"
"#)]
pub struct Cli {
    /// Single message to play one round with (omit for interactive chat)
    pub message: Option<String>,

    /// Output format for one-shot mode
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the composing indicator and banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
