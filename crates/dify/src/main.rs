//! Dify - command-line client for Dify applications
//!
//! Main entry point for the `dify` CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{chat, complete, config, stop, workflow};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Dify - talk to Dify chat, completion and workflow apps
#[derive(Parser)]
#[command(name = "dify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// API base URL (default: https://api.dify.ai/v1)
    #[arg(long, global = true, env = "DIFY_BASE_URL")]
    pub base_url: Option<String>,

    /// Application API key (falls back to DIFY_API_KEY, then the config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a message to a chat app and stream the answer
    Chat(chat::ChatArgs),

    /// Generate text with a completion app
    Complete(complete::CompleteArgs),

    /// Run a workflow app
    Workflow(workflow::WorkflowArgs),

    /// Stop a running generation task
    Stop(stop::StopArgs),

    /// Configuration management
    Config(config::ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Console (human-readable, stderr) + rotating JSON file
    let filter = if cli.verbose {
        "dify=debug,dify_client=debug,dify_config=debug,info"
    } else {
        "dify=info,dify_client=warn,warn"
    };

    let log_dir = dify_config::xdg_config_dir()
        .map(|d| d.join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "dify.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "dify=trace,dify_client=trace,dify_config=trace,info",
                )),
        )
        .init();

    let loaded = dify_config::load_config(None)?;
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    let ctx = commands::Context {
        base_url: cli.base_url,
        api_key: cli.api_key,
        config: loaded.config,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Chat(args) => chat::run(args, &ctx).await,
        Commands::Complete(args) => complete::run(args, &ctx).await,
        Commands::Workflow(args) => workflow::run(args, &ctx).await,
        Commands::Stop(args) => stop::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx).await,
    }
}
