use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};

/// Point to query, in decimal degrees. Range is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Parse the two positional arguments, longitude first.
    pub fn parse(longitude: &str, latitude: &str) -> Result<Self> {
        Ok(Self {
            longitude: parse_axis("longitude", longitude)?,
            latitude: parse_axis("latitude", latitude)?,
        })
    }
}

fn parse_axis(axis: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| WeatherError::InvalidCoordinate {
            axis,
            value: value.to_string(),
        })
}

/// One weather condition entry as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionEntry {
    pub id: u32,
    pub icon: String,
}

/// Provider-neutral view of a current-conditions response.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub sunrise: i64,
    pub sunset: i64,
    pub wind_speed: f64,
    pub conditions: Vec<ConditionEntry>,
}

/// The fields a report is built from, with the primary condition picked.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub sunrise: i64,
    pub sunset: i64,
    pub wind_speed: f64,
    pub condition_id: u32,
    pub icon_code: String,
}

impl TryFrom<CurrentWeather> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(current: CurrentWeather) -> Result<Self> {
        let primary = current
            .conditions
            .into_iter()
            .next()
            .ok_or(WeatherError::EmptyConditions)?;

        Ok(Self {
            temperature: current.temperature,
            feels_like: current.feels_like,
            humidity: current.humidity,
            pressure: current.pressure,
            sunrise: current.sunrise,
            sunset: current.sunset,
            wind_speed: current.wind_speed,
            condition_id: primary.id,
            icon_code: primary.icon,
        })
    }
}

/// JSON object consumed by the Waybar custom module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub text: String,
    pub tooltip: String,
    pub class: String,
}

impl WeatherReport {
    pub const CLASS: &'static str = "weather";

    pub fn new(text: String, tooltip: String) -> Self {
        Self {
            text,
            tooltip,
            class: Self::CLASS.to_string(),
        }
    }

    /// Single-line JSON encoding.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
