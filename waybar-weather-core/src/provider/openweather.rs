use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::{ConditionEntry, Coordinates, CurrentWeather},
};

use super::WeatherProvider;

const CURRENT_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    lang: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: &str, config: &Config) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| WeatherError::ProviderInit(e.to_string()))?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            lang: config.lang.clone(),
            http,
        })
    }

    fn url(&self) -> String {
        format!("{}{CURRENT_PATH}", self.base_url)
    }

    fn query(&self, coords: Coordinates) -> [(&'static str, String); 5] {
        [
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
            ("lang", self.lang.clone()),
        ]
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, coords: Coordinates) -> Result<CurrentWeather> {
        log::debug!(
            "requesting current weather for lat={} lon={}",
            coords.latitude,
            coords.longitude
        );

        let res = self
            .http
            .get(self.url())
            .query(&self.query(coords))
            .send()
            .await
            .map_err(|e| {
                WeatherError::ProviderQuery(format!("failed to send request to OpenWeather: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            WeatherError::ProviderQuery(format!("failed to read OpenWeather response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(WeatherError::ProviderQuery(format!(
                "OpenWeather request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u32,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

/// Decode a `/data/2.5/weather` body.
pub fn parse_current(body: &str) -> Result<CurrentWeather> {
    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(|e| {
        WeatherError::ProviderQuery(format!("failed to parse OpenWeather current JSON: {e}"))
    })?;

    Ok(CurrentWeather {
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        humidity: parsed.main.humidity,
        pressure: parsed.main.pressure,
        sunrise: parsed.sys.sunrise,
        sunset: parsed.sys.sunset,
        wind_speed: parsed.wind.speed,
        conditions: parsed
            .weather
            .into_iter()
            .map(|w| ConditionEntry { id: w.id, icon: w.icon })
            .collect(),
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
