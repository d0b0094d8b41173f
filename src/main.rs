mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands, NewsArgs, Target};
use config::Config;
use datasources::{load_news_feed, OpenMeteoClient, SnapshotFileSource, WeatherSource};
use logic::ReportService;
use models::Mode;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const UNAVAILABLE: &str = "Weather data unavailable";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Init = cli.command {
        Config::setup_interactive().context("interactive setup failed")?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_ref()).context("configuration error")?;

    match cli.command {
        Commands::Check => run_check(&config, cli.snapshot).await,
        Commands::Insights(target) => {
            let service = build_service(&config, cli.snapshot)?;
            let (district, mode) = resolve_target(&config, &target);
            match service.home(&district, mode).await {
                Some(report) => print_json(&report),
                None => print_unavailable(),
            }
        }
        Commands::Alerts(target) => {
            let service = build_service(&config, cli.snapshot)?;
            let (district, mode) = resolve_target(&config, &target);
            print_json(&service.alerts(&district, mode, Utc::now()).await)
        }
        Commands::Guidance(target) => {
            let service = build_service(&config, cli.snapshot)?;
            let (district, mode) = resolve_target(&config, &target);
            match service.guidance(&district, mode).await {
                Some(report) => print_json(&report),
                None => print_unavailable(),
            }
        }
        Commands::Forecast(place) => {
            let service = build_service(&config, cli.snapshot)?;
            let district = resolve_district(&config, place.district.as_deref());
            match service.forecast(&district).await {
                Some(report) => print_json(&report),
                None => print_unavailable(),
            }
        }
        Commands::News(args) => run_news(&config, args).await,
        Commands::Init => Ok(()),
    }
}

fn build_source(config: &Config, snapshot: Option<PathBuf>) -> anyhow::Result<Box<dyn WeatherSource>> {
    if let Some(path) = snapshot {
        return Ok(Box::new(SnapshotFileSource::new(path)));
    }

    if !config.open_meteo.enabled {
        anyhow::bail!("Open-Meteo is disabled in config; pass --snapshot <file> instead");
    }

    let client = OpenMeteoClient::new(config.open_meteo.clone())
        .context("failed to build Open-Meteo client")?;
    Ok(Box::new(client))
}

fn build_service(config: &Config, snapshot: Option<PathBuf>) -> anyhow::Result<ReportService> {
    let source = build_source(config, snapshot)?;
    Ok(ReportService::new(source, config.thresholds.clone()))
}

/// Command-line values win over the configured location
fn resolve_district(config: &Config, district: Option<&str>) -> String {
    district.unwrap_or(&config.location.district).to_string()
}

fn resolve_target(config: &Config, target: &Target) -> (String, Mode) {
    let district = resolve_district(config, target.district.as_deref());
    let mode = Mode::resolve(target.mode.as_deref().unwrap_or(&config.location.mode));
    (district, mode)
}

async fn run_news(config: &Config, args: NewsArgs) -> anyhow::Result<()> {
    let Some(feed) = args.feed.or_else(|| config.news.feed.clone()) else {
        anyhow::bail!("No news feed configured; pass --feed <file> or set news.feed in config");
    };

    let articles = load_news_feed(&feed)
        .await
        .with_context(|| format!("failed to read news feed {}", feed.display()))?;
    let report = logic::news::classify_news(&articles, &config.news.trusted_sources, Utc::now());
    print_json(&report)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_unavailable() -> anyhow::Result<()> {
    print_json(&serde_json::json!({ "error": UNAVAILABLE }))
}

async fn run_check(config: &Config, snapshot: Option<PathBuf>) -> anyhow::Result<()> {
    println!("Configuration");
    println!("  District: {}", config.location.district);
    println!("  Mode:     {}", Mode::resolve(&config.location.mode));
    println!("  Open-Meteo: {} (timeout {}s)", config.open_meteo.base_url, config.open_meteo.timeout_secs);
    match &config.news.feed {
        Some(feed) => println!("  News feed: {}", feed.display()),
        None => println!("  News feed: not configured"),
    }
    println!("  Trusted news sources: {}", config.news.trusted_sources.join(", "));

    let warnings = config.warnings();
    if warnings.is_empty() {
        println!("  No problems found");
    } else {
        for warning in &warnings {
            println!("  Warning: {}", warning);
        }
    }

    println!();
    let service = match build_service(config, snapshot) {
        Ok(service) => service,
        Err(e) => {
            println!("Weather source: not configured ({})", e);
            return Ok(());
        }
    };

    let status = if service.check_connection().await {
        "OK"
    } else {
        "OFFLINE"
    };
    println!("Weather source: {} {}", service.source_name(), status);

    println!();
    println!("Guidance rules");
    for (mode, name) in service.guidance_rules() {
        println!("  {:<8} {}", mode.as_str(), name);
    }

    Ok(())
}
