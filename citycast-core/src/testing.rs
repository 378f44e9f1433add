//! Scripted [`WeatherApi`] for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    error::{Result, WeatherError},
    model::{CurrentWeather, LocationCandidate, OwCondition, OwMain, OwSys, OwWind},
    provider::WeatherApi,
};

#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(StatusCode),
    Malformed,
}

#[derive(Debug)]
pub struct FakeApi {
    pub geocode_reply: Mutex<Reply<Vec<LocationCandidate>>>,
    pub weather_reply: Mutex<Reply<CurrentWeather>>,
    pub geocode_calls: Mutex<Vec<(String, u8)>>,
    pub weather_calls: Mutex<Vec<(f64, f64)>>,
}

impl FakeApi {
    pub fn new(candidates: Vec<LocationCandidate>, weather: Reply<CurrentWeather>) -> Self {
        Self {
            geocode_reply: Mutex::new(Reply::Ok(candidates)),
            weather_reply: Mutex::new(weather),
            geocode_calls: Mutex::new(Vec::new()),
            weather_calls: Mutex::new(Vec::new()),
        }
    }

    /// Knows Bergen and answers with light rain.
    pub fn bergen() -> Self {
        let bergen = candidate("Bergen", Some("Vestland"), "NO", 60.39, 5.32);
        Self::new(vec![bergen], Reply::Ok(rainy_bergen()))
    }

    pub fn failing_geocode(reply: Reply<Vec<LocationCandidate>>) -> Self {
        let api = Self::bergen();
        *api.geocode_reply.lock().unwrap() = reply;
        api
    }

    pub fn geocode_queries(&self) -> Vec<String> {
        self.geocode_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(q, _)| q.clone())
            .collect()
    }

    pub fn total_calls(&self) -> usize {
        self.geocode_calls.lock().unwrap().len() + self.weather_calls.lock().unwrap().len()
    }
}

fn resolve<T: Clone>(
    reply: &Reply<T>,
    endpoint: &'static str,
    status_error: fn(StatusCode) -> WeatherError,
) -> Result<T> {
    match reply {
        Reply::Ok(value) => Ok(value.clone()),
        Reply::Status(status) => Err(status_error(*status)),
        Reply::Malformed => {
            let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
            Err(WeatherError::Parse { endpoint, source })
        }
    }
}

#[async_trait]
impl WeatherApi for FakeApi {
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<LocationCandidate>> {
        self.geocode_calls.lock().unwrap().push((query.to_string(), limit));
        let reply = self.geocode_reply.lock().unwrap().clone();
        let mut found = resolve(&reply, "geocoding", |status| WeatherError::Status {
            endpoint: "geocoding",
            status,
        })?;
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather> {
        self.weather_calls.lock().unwrap().push((latitude, longitude));
        let reply = self.weather_reply.lock().unwrap().clone();
        resolve(&reply, "current weather", |status| {
            WeatherError::WeatherFetchFailed { status }
        })
    }
}

pub fn candidate(
    name: &str,
    state: Option<&str>,
    country: &str,
    lat: f64,
    lon: f64,
) -> LocationCandidate {
    LocationCandidate {
        name: name.to_string(),
        state: state.map(str::to_string),
        country: country.to_string(),
        latitude: lat,
        longitude: lon,
    }
}

pub fn rainy_bergen() -> CurrentWeather {
    CurrentWeather {
        name: "Bergen".to_string(),
        dt: Some(1_700_000_000),
        sys: OwSys {
            country: "NO".to_string(),
        },
        main: OwMain {
            temp: 7.0,
            feels_like: 4.27,
            humidity: 90,
        },
        wind: OwWind { speed: 6.2 },
        weather: vec![OwCondition {
            id: 500,
            description: "light rain".to_string(),
        }],
    }
}
