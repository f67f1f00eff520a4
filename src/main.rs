use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use sat_spotter::config::Config;
use sat_spotter::web::{run_server, AppState};

#[derive(Parser)]
#[command(name = "sat-spotter")]
#[command(about = "Satellite position tracking with place-name enrichment")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one enriched batch and print it as JSON
    Fetch {
        /// Number of hourly positions (defaults to the configured batch size)
        #[arg(long)]
        count: Option<usize>,
        /// RFC 3339 start instant (defaults to now)
        #[arg(long)]
        start: Option<String>,
    },
    /// Run the HTTP API server
    Serve,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match cli.command {
        Commands::Fetch { count, start } => fetch(config, count, start).await,
        Commands::Serve => serve(config).await,
    }
}

async fn fetch(config: Config, count: Option<usize>, start: Option<String>) -> ExitCode {
    let starting_at = match start.as_deref() {
        Some(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(e) => {
                eprintln!("Invalid start instant: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Utc::now(),
    };
    let count = count.unwrap_or(config.satellite.batch_count);

    let state = AppState::from_config(&config);
    match state.pipeline.enrich(starting_at, count).await {
        Ok(enriched) => {
            let json = serde_json::to_string_pretty(&enriched).unwrap_or_default();
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Enrichment failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: Config) -> ExitCode {
    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
