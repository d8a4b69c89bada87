//! Presentation layer for parlor
//!
//! This crate contains the CLI definition, the interactive chat REPL,
//! the transcript formatter, and the "composing" indicator.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ComposingIndicator;
