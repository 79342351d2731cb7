mod digest;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::digest::SummarizeArgs;

#[derive(Debug, Parser)]
#[command(name = "revdigest-cli")]
#[command(about = "Summarize what Steam players like and dislike about a game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect recent reviews and print positive and negative summaries
    Summarize(SummarizeArgs),
    /// Print the Steam app id a game name resolves to
    Resolve {
        /// Free-text game name
        game: String,
    },
    /// List flash models from the Gemini catalog and show which one is selected
    Models,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = revdigest_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Summarize(args) => digest::run_summarize(&config, &args).await,
        Commands::Resolve { game } => digest::run_resolve(&config, &game).await,
        Commands::Models => digest::run_models(&config).await,
    }
}
