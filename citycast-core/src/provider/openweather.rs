use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::{CurrentWeather, LocationCandidate},
};

use super::WeatherApi;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const GEOCODING: &str = "geocoding";
const CURRENT_WEATHER: &str = "current weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self::with_http(api_key, base_url, Client::new())
    }

    pub fn with_http(api_key: String, base_url: &str, http: Client) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Build a client from the stored key, base URL and request timeout.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_http(api_key, config.base_url(), http))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(reqwest::StatusCode, Option<T>)> {
        let url = format!("{}{}", self.base_url, path);
        debug!(endpoint, %url, "sending request");

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| WeatherError::Http { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| WeatherError::Http { endpoint, source })?;

        if !status.is_success() {
            debug!(endpoint, %status, body = %truncate_body(&body), "request failed");
            return Ok((status, None));
        }

        let parsed = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Parse { endpoint, source })?;

        Ok((status, Some(parsed)))
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<LocationCandidate>> {
        let (status, parsed) = self
            .get_json::<Option<Vec<LocationCandidate>>>(
                GEOCODING,
                "/geo/1.0/direct",
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        match parsed {
            Some(candidates) => Ok(candidates.unwrap_or_default()),
            None => Err(WeatherError::Status {
                endpoint: GEOCODING,
                status,
            }),
        }
    }

    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather> {
        let (status, parsed) = self
            .get_json::<CurrentWeather>(
                CURRENT_WEATHER,
                "/data/2.5/weather",
                &[
                    ("lat", latitude.to_string()),
                    ("lon", longitude.to_string()),
                    ("units", "metric".to_string()),
                ],
            )
            .await?;

        parsed.ok_or(WeatherError::WeatherFetchFailed { status })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
