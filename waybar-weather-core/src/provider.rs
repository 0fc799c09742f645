use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    model::{Coordinates, CurrentWeather},
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current conditions for a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, coords: Coordinates) -> Result<CurrentWeather>;
}
