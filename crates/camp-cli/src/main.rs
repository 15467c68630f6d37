use anyhow::Result;
use clap::{Parser, Subcommand};

mod transport;

#[derive(Parser)]
#[command(name = "camp")]
#[command(about = "CAMP - Campaign Asset & Media Prompter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive campaign collection chat on stdin/stdout
    Chat {
        /// Fix the random seed for reproducible menus and rendering
        #[arg(long)]
        seed: Option<u64>,
        /// Session key the local transport tags every action with
        #[arg(long, default_value = "local")]
        session_key: String,
    },
    /// Verify that the process environment is fully configured
    CheckEnv,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { seed, session_key } => transport::run_chat(seed, &session_key).await?,
        Commands::CheckEnv => {
            let config = camp_core::config::Config::from_env()?;
            println!(
                "Transport token: set\nIdea generation: {}",
                if config.gemini_api_key.is_some() {
                    "enabled"
                } else {
                    "fallback-only (no API key)"
                }
            );
        }
    }

    Ok(())
}
