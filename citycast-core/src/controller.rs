use tracing::{debug, error};

use crate::{
    classify::IconStyle,
    error::WeatherError,
    fetcher::WeatherFetcher,
    flag::country_flag,
    model::WeatherReading,
    view::{Panel, SharedView, Slot, WeatherView, lock},
};

/// What the card is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Result(WeatherReading),
    Error(String),
}

/// Drives the weather card through idle, loading, result and error.
///
/// Every transition rewrites all result slots, so text from a previous state
/// can never sit next to the current one.
#[derive(Debug)]
pub struct RenderController<V> {
    view: SharedView<V>,
    fetcher: WeatherFetcher,
    icons: IconStyle,
    state: DisplayState,
}

impl<V: WeatherView> RenderController<V> {
    pub fn new(view: SharedView<V>, fetcher: WeatherFetcher, icons: IconStyle) -> Self {
        Self {
            view,
            fetcher,
            icons,
            state: DisplayState::Idle,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Handle a form submission using whatever is in the input.
    pub async fn submit(&mut self) -> &DisplayState {
        let city = lock(&self.view).input().trim().to_string();

        if city.is_empty() {
            self.show_error(WeatherError::EmptyInput.user_message());
            return &self.state;
        }

        self.show_loading();

        match self.fetcher.fetch(&city).await {
            Ok(payload) => self.show_result(WeatherReading::from(payload)),
            Err(err) => {
                error!(%city, error = %err, "weather lookup failed");
                self.show_error(err.user_message());
            }
        }

        &self.state
    }

    pub fn show_loading(&mut self) {
        debug!("card -> loading");
        {
            let mut view = lock(&self.view);
            clear_result_slots(&mut *view);
            view.set_slot(Slot::City, "Loading...");
            view.set_slot(Slot::Icon, &self.icons.loading_indicator());
            view.set_slot(Slot::Error, "");
            view.set_visible(Panel::Error, false);
            view.set_visible(Panel::Card, true);
        }
        self.state = DisplayState::Loading;
    }

    pub fn show_result(&mut self, reading: WeatherReading) {
        debug!(city = %reading.city_name, "card -> result");

        let city = format!("{}, {}", reading.city_name, reading.country_code);
        let temperature = format!("{}°C", one_decimal(reading.temperature_c));
        let feels_like = format!("Feels like: {}°C", one_decimal(reading.feels_like_c));
        let humidity = format!("Humidity: {}%", reading.humidity_pct);
        let wind = format!("Wind: {} m/s", reading.wind_speed_mps);
        let flag = country_flag(&reading.country_code).unwrap_or_default();
        let country = format!("Country: {} {flag}", reading.country_code);
        let icon = self.icons.condition_icon(reading.condition_code);

        {
            let mut view = lock(&self.view);
            view.set_slot(Slot::Error, "");
            view.set_visible(Panel::Error, false);

            view.set_slot(Slot::City, &city);
            view.set_slot(Slot::Temperature, &temperature);
            view.set_slot(Slot::Description, &reading.condition_description);
            view.set_slot(Slot::Icon, &icon);
            view.set_slot(Slot::FeelsLike, &feels_like);
            view.set_slot(Slot::Humidity, &humidity);
            view.set_slot(Slot::Wind, &wind);
            view.set_slot(Slot::Country, country.trim_end());
            view.set_visible(Panel::Card, true);
        }
        self.state = DisplayState::Result(reading);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "card -> error");
        {
            let mut view = lock(&self.view);
            clear_result_slots(&mut *view);
            view.set_slot(Slot::Error, &message);
            view.set_visible(Panel::Error, true);
            view.set_visible(Panel::Card, true);
        }
        self.state = DisplayState::Error(message);
    }
}

fn clear_result_slots<V: WeatherView + ?Sized>(view: &mut V) {
    for slot in Slot::RESULT {
        view.set_slot(slot, "");
    }
}

/// One fractional digit, exact ties rounded away from zero.
///
/// `{:.1}` already rounds the exact binary value correctly but breaks ties
/// toward the even digit. A double sits exactly halfway between two tenths
/// only when four times its value is an odd integer (x.25, x.75).
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && (quarters % 2.0).abs() == 1.0;

    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{value:.1}")
    }
}
