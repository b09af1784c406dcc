//! Launchboard
//!
//! Run with: cargo run -- [serve|summary|config]
//!
//! # Configuration
//!
//! Settings come from `--config`, else `~/.config/launchboard/config.toml`
//! or `./launchboard.toml`, else defaults. Environment variables override
//! the file:
//! - `LAUNCHBOARD_DATASET`: Launch records CSV (default: spacex_launch_dash.csv)
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_LOG_LEVEL`, `LAUNCHBOARD_LOG_FORMAT`: logging
//! - `RUST_LOG`: full tracing filter, wins over the configured level

use anyhow::Context;
use clap::{Parser, Subcommand};
use launchboard::api::{serve, AppState};
use launchboard::config::{generate_default_config, Config, LoggingConfig};
use launchboard::dataset::Dataset;
use launchboard::view::{compute_pie_data, SiteSelection};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive launch records dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Launch records CSV, overrides the config file
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Host to bind to, overrides the config file
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(short, long, global = true)]
    pub port: Option<u16>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard server (default)
    Serve,

    /// Print dataset statistics and the all-sites success counts
    Summary,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write config to {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    let dataset = Dataset::load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {:?}", config.dataset.path))?;

    match cli.command {
        Some(Commands::Summary) => print_summary(&dataset),
        Some(Commands::Serve) | None => run_server(config, dataset).await?,
        Some(Commands::Config { .. }) => {}
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run_server(config: Config, dataset: Dataset) -> anyhow::Result<()> {
    tracing::info!("Starting Launchboard v{}", env!("CARGO_PKG_VERSION"));

    let api_config = config.api_config();
    let state = AppState::new(Arc::new(dataset), api_config.clone(), config.hub_config());

    serve(state, &api_config).await?;

    tracing::info!("Launchboard stopped");
    Ok(())
}

fn print_summary(dataset: &Dataset) {
    print!("{}", dataset.summary());

    let pie = compute_pie_data(dataset, &SiteSelection::All);
    println!();
    println!("{}", pie.title);
    for slice in &pie.slices {
        println!("  {:<16} {:>4}", slice.label, slice.value);
    }
}
