//! Main entry point for the Azure Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use azure_translator::cli::commands::{self, Commands};
use azure_translator::{TranslatorClient, TranslatorConfig};

/// Azure Translator - detect and translate text from the command line
#[derive(Parser, Debug)]
#[command(name = "azure-translator", version, about, long_about = None)]
struct Args {
    /// Azure translator API key
    #[arg(long, env = "AZURE_TRANSLATOR_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// JSON file overriding endpoints and pool settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = match args.api_key.filter(|k| !k.is_empty()) {
        Some(key) => key,
        None => {
            println!("Must specify API key");
            std::process::exit(1);
        }
    };

    let config = match &args.config {
        Some(path) => TranslatorConfig::from_file(path)?,
        None => TranslatorConfig::default(),
    };

    let client = TranslatorClient::with_config(&api_key, config).await?;

    match args.command {
        Commands::Detect { phrases } => {
            commands::handle_detect(&client, phrases).await?;
        }
        Commands::Translate { to, from, phrases } => {
            commands::handle_translate(&client, phrases, to, from).await?;
        }
    }

    Ok(())
}
