use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    model::CurrentWeather,
    provider::WeatherApi,
};

/// City text to current conditions, in two dependent requests.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    api: Arc<dyn WeatherApi>,
}

impl WeatherFetcher {
    pub fn new(api: Arc<dyn WeatherApi>) -> Self {
        Self { api }
    }

    /// Geocode `city` (best match only), then fetch weather at that point.
    ///
    /// The caller guarantees `city` is non-empty. The weather request is never
    /// issued unless geocoding produced a location.
    pub async fn fetch(&self, city: &str) -> Result<CurrentWeather> {
        let location = self
            .api
            .geocode(city, 1)
            .await?
            .into_iter()
            .next()
            .ok_or(WeatherError::CityNotFound)?;

        debug!(
            city,
            resolved = %location.name,
            lat = location.latitude,
            lon = location.longitude,
            "geocoded city"
        );

        self.api.current_weather(location.latitude, location.longitude).await
    }
}
