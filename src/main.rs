use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nba_stats::api::state::AppState;
use nba_stats::config::{AppConfig, DeleteMode};
use nba_stats::ingest::load_profiles;
use nba_stats::models::Section;
use nba_stats::store::ProfileStore;

#[derive(Parser)]
#[command(name = "nba-stats")]
#[command(about = "NBA 22/23 season player stats API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Season stats CSV (overrides config)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,

        /// How DELETE reports misses: "lenient" or "counted"
        #[arg(long)]
        delete_mode: Option<DeleteMode>,
    },

    /// Print one player's profile as JSON
    Player {
        first_name: String,
        surname: String,

        /// Only print this section (bio, offense, defense)
        #[arg(long)]
        section: Option<Section>,
    },

    /// Load the season file and report what was built
    Check,
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_file_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_tracing(&config.log_level, cli.json_logs);
    tracing::info!("Starting nba-stats v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve {
            host,
            port,
            delete_mode,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(mode) = delete_mode {
                config.store.delete_mode = mode;
            }
            config.validate()?;

            let profiles = load_profiles(&config.data_file)
                .with_context(|| format!("Failed to load season data from {:?}", config.data_file))?;
            tracing::info!(
                "Serving {} profiles (delete mode: {})",
                profiles.len(),
                config.store.delete_mode
            );

            let addr = config.server.bind_addr();
            let state = AppState::new(ProfileStore::new(profiles), config);
            let app = nba_stats::api::build_router(state);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Player {
            first_name,
            surname,
            section,
        } => {
            let store = ProfileStore::new(load_profiles(&config.data_file)?);
            let Some(profile) = store.find_by_name(&first_name, &surname) else {
                bail!("Player not found: {} {}", first_name, surname);
            };

            let output = match section {
                Some(Section::Bio) => serde_json::to_string_pretty(&profile.bio)?,
                Some(Section::Offense) => serde_json::to_string_pretty(&profile.offense)?,
                Some(Section::Defense) => serde_json::to_string_pretty(&profile.defense)?,
                None => serde_json::to_string_pretty(profile)?,
            };
            println!("{}", output);
        }
        Commands::Check => {
            let store = ProfileStore::new(load_profiles(&config.data_file)?);
            let no_games = store
                .all()
                .iter()
                .filter(|p| p.offense.appearances.games_played == 0)
                .count();
            let max_id = store.max_id();

            println!("\n=== Season Data ===");
            println!("File:             {}", config.data_file.display());
            println!("Profiles:         {}", store.len());
            println!("Without games:    {}", no_games);
            match max_id {
                Some(id) => println!("Highest id:       {}", id),
                None => println!("Highest id:       (none, inserts will be rejected)"),
            }
        }
    }

    Ok(())
}
