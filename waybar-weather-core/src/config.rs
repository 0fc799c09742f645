use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

/// Prefix for environment variables that override file settings.
pub const ENV_PREFIX: &str = "WAYBAR_WEATHER_";

/// Optional settings. None of them affect the positional arguments.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.openweathermap.org"
/// lang = "en"
/// timeout_secs = 10
/// timezone = "Europe/Berlin"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub base_url: String,
    pub lang: String,
    pub timeout_secs: u64,
    /// IANA name used for sunrise/sunset; unset means `TZ` or system local.
    pub timezone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org".to_string(),
            lang: "en".to_string(),
            timeout_secs: 10,
            timezone: None,
        }
    }
}

impl Config {
    /// Load the file given on the command line, or the default file if it exists.
    ///
    /// Returns the config together with the path it was read from, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_file_path()?;
                if !path.exists() {
                    return Ok((Self::default(), None));
                }
                path
            }
        };

        let cfg = Self::from_file(&path)?;
        Ok((cfg, Some(path)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Default location, e.g. `~/.config/waybar-weather/config.toml` on Linux.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "waybar-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `WAYBAR_WEATHER_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(&format!("{ENV_PREFIX}{key}"));

        if let Some(base_url) = var("BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(lang) = var("LANG") {
            self.lang = lang;
        }
        if let Some(timeout) = var("TIMEOUT_SECS") {
            self.timeout_secs = timeout.trim().parse().with_context(|| {
                format!("{ENV_PREFIX}TIMEOUT_SECS must be a whole number of seconds, got '{timeout}'")
            })?;
        }
        if let Some(timezone) = var("TIMEZONE") {
            self.timezone = Some(timezone);
        }

        Ok(())
    }

    /// Overrides from the real process environment.
    pub fn apply_process_env(&mut self) -> Result<()> {
        self.apply_env(|key| std::env::var(key).ok())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
