use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    model::{CurrentWeather, LocationCandidate},
};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// The two endpoints the widget talks to.
#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    /// Resolve free text to at most `limit` places, in provider relevance order.
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<LocationCandidate>>;

    /// Current conditions at a coordinate, metric units.
    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather>;
}
