use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skyguide",
    version,
    about = "Weather hazard insights and mode-based guidance for Bangladesh"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read weather from a saved snapshot JSON file instead of Open-Meteo
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Args, Debug, Clone, Default)]
pub struct Target {
    /// District or division name (defaults to the configured district)
    #[arg(short, long)]
    pub district: Option<String>,

    /// general, student, farmer or worker; anything else means general
    #[arg(short, long)]
    pub mode: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct Place {
    /// District or division name (defaults to the configured district)
    #[arg(short, long)]
    pub district: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct NewsArgs {
    /// News feed JSON file (defaults to news.feed in config)
    #[arg(short, long)]
    pub feed: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked hazard insights for the home screen
    Insights(Target),
    /// High-severity alerts valid for the next six hours
    Alerts(Target),
    /// Mode-specific decision with its explanation
    Guidance(Target),
    /// Twelve-hour outlook and day-over-day comparison
    Forecast(Place),
    /// Weather news from trusted outlets with bilingual context
    News(NewsArgs),
    /// Re-run interactive setup
    Init,
    /// Validate config and test the weather source
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_takes_district_only() {
        let cli = Cli::try_parse_from(["skyguide", "forecast", "--district", "Khulna"]).unwrap();
        match cli.command {
            Commands::Forecast(place) => assert_eq!(place.district.as_deref(), Some("Khulna")),
            _ => panic!("expected forecast command"),
        }

        assert!(Cli::try_parse_from(["skyguide", "forecast", "--mode", "farmer"]).is_err());
    }

    #[test]
    fn guidance_takes_district_and_mode() {
        let cli = Cli::try_parse_from(["skyguide", "-v", "guidance", "-d", "Sylhet", "-m", "worker"])
            .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Guidance(target) => {
                assert_eq!(target.district.as_deref(), Some("Sylhet"));
                assert_eq!(target.mode.as_deref(), Some("worker"));
            }
            _ => panic!("expected guidance command"),
        }
    }

    #[test]
    fn news_feed_is_optional() {
        let cli = Cli::try_parse_from(["skyguide", "news"]).unwrap();
        assert!(matches!(cli.command, Commands::News(NewsArgs { feed: None })));

        let cli = Cli::try_parse_from(["skyguide", "news", "--feed", "demos/news-feed.json"]).unwrap();
        match cli.command {
            Commands::News(args) => {
                assert_eq!(args.feed, Some(PathBuf::from("demos/news-feed.json")))
            }
            _ => panic!("expected news command"),
        }
    }
}
