//! Core library for the `citycast` weather widget.
//!
//! This crate defines:
//! - The OpenWeather geocoding / current-weather client
//! - Autocomplete suggestions behind a debounced input
//! - The weather card state machine, driven through a [`WeatherView`]
//! - Configuration & credentials handling
//!
//! It is used by `citycast-cli`, but any surface that implements
//! [`WeatherView`] can host the widget.

pub mod classify;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod fetcher;
pub mod flag;
pub mod form;
pub mod model;
pub mod provider;
pub mod suggest;
pub mod view;

#[cfg(test)]
mod testing;

pub use classify::{ConditionCategory, IconStyle};
pub use config::Config;
pub use controller::{DisplayState, RenderController};
pub use error::WeatherError;
pub use fetcher::WeatherFetcher;
pub use flag::country_flag;
pub use form::{ClickTarget, WeatherForm};
pub use model::{CurrentWeather, LocationCandidate, WeatherReading};
pub use provider::{OpenWeatherClient, WeatherApi};
pub use suggest::{SuggestionFetcher, SuggestionOutcome};
pub use view::{MemoryView, Panel, Slot, WeatherView};
