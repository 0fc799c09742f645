use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use waybar_weather_core::{Clock, Config, Coordinates, OpenWeatherProvider, fetch_report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "waybar-weather",
    version,
    about = "Print current OpenWeatherMap conditions as Waybar JSON",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Settings file (default: <config dir>/waybar-weather/config.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Longitude in decimal degrees.
    pub longitude: String,

    /// Latitude in decimal degrees.
    pub latitude: String,

    /// OpenWeatherMap API key.
    pub api_key: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let coords = Coordinates::parse(&self.longitude, &self.latitude)?;

        let (mut config, used) = Config::load(self.config.as_deref())?;
        if let Some(path) = used {
            log::info!("Using config file: {}", path.display());
        }
        config.apply_process_env()?;

        let tz = std::env::var("TZ").ok();
        let clock = Clock::resolve(config.timezone.as_deref(), tz.as_deref())?;
        log::debug!("rendering sunrise/sunset with {clock:?}");

        let provider = OpenWeatherProvider::new(&self.api_key, &config)?;
        let report = fetch_report(&provider, coords, &clock).await?;
        let json = report.to_json()?;

        let mut stdout = io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_three_positionals() {
        let cli = Cli::try_parse_from(["waybar-weather", "13.405", "52.52", "KEY"]).unwrap();

        assert_eq!(cli.longitude, "13.405");
        assert_eq!(cli.latitude, "52.52");
        assert_eq!(cli.api_key, "KEY");
        assert!(cli.config.is_none());
    }

    #[test]
    fn accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["waybar-weather", "-73.98", "-33.86", "KEY"]).unwrap();

        assert_eq!(cli.longitude, "-73.98");
        assert_eq!(cli.latitude, "-33.86");
    }

    #[test]
    fn accepts_config_flag() {
        let cli = Cli::try_parse_from([
            "waybar-weather",
            "--config",
            "/tmp/weather.toml",
            "1",
            "2",
            "KEY",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/weather.toml")));
    }

    #[test]
    fn requires_exactly_three_positionals() {
        let err = Cli::try_parse_from(["waybar-weather", "1", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["waybar-weather", "1", "2", "KEY", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[tokio::test]
    async fn non_numeric_longitude_fails_before_any_request() {
        let cli = Cli::try_parse_from(["waybar-weather", "east", "52.52", "KEY"]).unwrap();

        let err = cli.run().await.unwrap_err();
        assert!(err.to_string().contains("longitude 'east'"));
    }

    #[tokio::test]
    async fn non_numeric_latitude_fails_before_any_request() {
        let cli = Cli::try_parse_from(["waybar-weather", "13.4", "north", "KEY"]).unwrap();

        let err = cli.run().await.unwrap_err();
        assert!(err.to_string().contains("latitude 'north'"));
    }
}
