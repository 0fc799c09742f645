//! Core library for the `waybar-weather` status-bar module.
//!
//! This crate defines:
//! - Static condition and icon catalogs
//! - The OpenWeatherMap client behind a provider trait
//! - Formatting of the bar label and tooltip
//! - Optional settings file & environment overrides
//!
//! It is used by `waybar-weather`, but can also be reused by other bars or widgets.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod report;

pub use config::Config;
pub use error::WeatherError;
pub use format::Clock;
pub use model::{Coordinates, CurrentWeather, WeatherReport, WeatherSnapshot};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use report::{build_report, fetch_report};
