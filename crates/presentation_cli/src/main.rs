//! pogoda CLI
//!
//! Fetches the forecast for the configured point and renders the
//! current-conditions header plus a seven-day strip.

#![allow(clippy::print_stdout)]

mod render;

use std::sync::Arc;

use anyhow::Context;
use application::ForecastService;
use chrono::Timelike;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, ForecastAdapter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// pogoda CLI
#[derive(Parser)]
#[command(name = "pogoda")]
#[command(author, version, about = "Weather panel for a fixed point", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show only the current-conditions header
    Now,

    /// Show only the seven-day strip
    Week,

    /// Check that the forecast provider is reachable
    Health,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    let location = config
        .location
        .to_location()
        .context("configured coordinates are out of range")?;

    let adapter = ForecastAdapter::with_config(config.weather)?;
    let service = ForecastService::new(Arc::new(adapter), location);

    if matches!(cli.command, Some(Commands::Health)) {
        if service.is_available().await {
            println!("✅ Provider reachable");
            return Ok(());
        }
        println!("❌ Provider unreachable");
        std::process::exit(1);
    }

    let forecast = service
        .refresh()
        .await
        .context("failed to fetch the forecast")?;

    let hour = chrono::Local::now().hour();

    match cli.command {
        Some(Commands::Now) => println!("{}", render::header(&forecast, hour)),
        Some(Commands::Week) => println!("{}", render::week_strip(&forecast)),
        Some(Commands::Health) | None => {
            println!("{}", render::header(&forecast, hour));
            println!();
            println!("{}", render::week_strip(&forecast));
        },
    }

    Ok(())
}
