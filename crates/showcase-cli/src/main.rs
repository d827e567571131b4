use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Success-case showcase with an AI architecture advisor", long_about = None)]
struct Cli {
    /// Directory holding config.toml and secret.json (defaults to ~/.config/showcase)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List showcase cases, optionally filtered
    Cases {
        /// Role facet (e.g. DataInsight) or "All"
        #[arg(long, default_value = "All")]
        role: String,
        /// Industry facet (e.g. Finance) or "All"
        #[arg(long, default_value = "All")]
        industry: String,
        /// Case-insensitive text searched in title, summary and tags
        #[arg(long, short, default_value = "")]
        query: String,
        /// Print the accepted role and industry values
        #[arg(long)]
        facets: bool,
    },
    /// Show one case in detail
    Show {
        /// Case id
        id: String,
    },
    /// Print the advisor system instruction for the current case index
    Prompt,
    /// Start an interactive advisor chat
    Chat {
        /// Start without the welcome message
        #[arg(long)]
        no_greeting: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_dir = cli.config_dir.as_deref();
    match cli.command {
        Commands::Cases {
            role,
            industry,
            query,
            facets,
        } => {
            if facets {
                commands::cases::print_facets();
            } else {
                commands::cases::list(&role, &industry, &query)?;
            }
        }
        Commands::Show { id } => commands::cases::show(&id)?,
        Commands::Prompt => commands::prompt::print()?,
        Commands::Chat { no_greeting } => commands::chat::run(config_dir, no_greeting).await?,
    }

    Ok(())
}
