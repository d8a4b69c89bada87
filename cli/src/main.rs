//! CLI entrypoint for parlor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use parlor_application::SessionController;
use parlor_infrastructure::{ConfigLoader, FailsafeGenerator, GeminiClient};
use parlor_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    info!("Starting parlor");

    // === Dependency Injection ===
    // Gemini client -> failure-absorbing generator -> session controller
    let persona = config.host_persona();
    let api_key = config
        .gemini
        .resolve_api_key()
        .context("Gemini API key not configured")?;
    let client = GeminiClient::new(&config.gemini, api_key, persona.clone())
        .context("Failed to initialize Gemini backend")?;
    let generator = Arc::new(FailsafeGenerator::new(Arc::new(client), persona));
    let controller = SessionController::new(generator);

    // One-shot mode: host opens, one round is played, transcript printed
    if let Some(message) = cli.message {
        let mut controller = controller;
        let _ = controller.start().await;
        let _ = controller.submit(&message).await;

        let state = controller.snapshot();
        let output = match cli.output {
            OutputFormat::Text => ConsoleFormatter::format(&state),
            OutputFormat::Json => ConsoleFormatter::format_json(&state),
        };
        print!("{}", output);
        return Ok(());
    }

    // Interactive chat mode
    let mut repl = ChatRepl::new(controller).with_indicator(!cli.quiet);
    repl.run().await?;

    Ok(())
}
