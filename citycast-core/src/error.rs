use reqwest::StatusCode;
use thiserror::Error;

/// Shown when a failure carries no message meant for the user.
pub const GENERIC_FAILURE: &str = "Failed to fetch weather data. Please try again.";

/// Everything that can go wrong between pressing submit and rendering a card.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please enter a city name.")]
    EmptyInput,

    #[error("City not found. Please try another location.")]
    CityNotFound,

    /// The current-conditions endpoint answered with a non-success status.
    #[error("Failed to fetch weather data")]
    WeatherFetchFailed { status: StatusCode },

    /// Any other endpoint answered with a non-success status.
    #[error("{endpoint} request failed with status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("failed to send {endpoint} request: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse {endpoint} response: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherError {
    /// Text for the error slot of the card.
    ///
    /// The named conditions are shown verbatim; transport and decoding
    /// failures collapse into [`GENERIC_FAILURE`].
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::EmptyInput
            | WeatherError::CityNotFound
            | WeatherError::WeatherFetchFailed { .. } => self.to_string(),
            WeatherError::Status { .. }
            | WeatherError::Http { .. }
            | WeatherError::Parse { .. } => GENERIC_FAILURE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;
