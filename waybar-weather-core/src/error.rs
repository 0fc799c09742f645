use thiserror::Error;

/// Everything that can stop a run before a report is written.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Failed to parse {axis} '{value}': expected a decimal number")]
    InvalidCoordinate { axis: &'static str, value: String },

    #[error("No API key given.\nHint: pass your OpenWeatherMap key as the third argument.")]
    MissingApiKey,

    #[error("Failed to initialise weather provider: {0}")]
    ProviderInit(String),

    #[error("Weather query failed: {0}")]
    ProviderQuery(String),

    #[error("Weather response contained no condition entries")]
    EmptyConditions,

    #[error("Failed to encode report as JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
