use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flag::country_flag;

/// One geocoding hit, as returned by `/geo/1.0/direct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    pub country: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl LocationCandidate {
    /// Text written into the input when the candidate is picked.
    pub fn input_text(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    /// Line shown in the suggestion list.
    pub fn label(&self) -> String {
        let place = match self.state.as_deref().filter(|s| !s.is_empty()) {
            Some(state) => format!("{}, {}", self.name, state),
            None => self.name.clone(),
        };

        match country_flag(&self.country) {
            Some(flag) => format!("{place} {} {flag}", self.country),
            None => format!("{place} {}", self.country),
        }
    }
}

/// Raw `/data/2.5/weather` payload, only the fields the card needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    #[serde(default)]
    pub dt: Option<i64>,
    #[serde(default)]
    pub sys: OwSys,
    pub main: OwMain,
    pub wind: OwWind,
    #[serde(default)]
    pub weather: Vec<OwCondition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwSys {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwWind {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwCondition {
    pub id: i64,
    pub description: String,
}

/// What the result card shows. Built once per successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition_code: i64,
    pub condition_description: String,
    pub observed_at: Option<DateTime<Utc>>,
}

impl From<CurrentWeather> for WeatherReading {
    fn from(payload: CurrentWeather) -> Self {
        // An empty `weather` array falls through to the classifier's fallback.
        let (condition_code, condition_description) = payload
            .weather
            .into_iter()
            .next()
            .map(|w| (w.id, w.description))
            .unwrap_or_else(|| (0, "Unknown".to_string()));

        Self {
            city_name: payload.name,
            country_code: payload.sys.country,
            temperature_c: payload.main.temp,
            feels_like_c: payload.main.feels_like,
            humidity_pct: payload.main.humidity,
            wind_speed_mps: payload.wind.speed,
            condition_code,
            condition_description,
            observed_at: payload.dt.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "main": {"temp": 14.27, "feels_like": 13.61, "pressure": 1012, "humidity": 77},
        "wind": {"speed": 4.63, "deg": 240},
        "dt": 1700000000,
        "sys": {"country": "GB", "sunrise": 1699945000, "sunset": 1699977000},
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn reading_projects_current_weather_payload() {
        let payload: CurrentWeather = serde_json::from_str(LONDON).expect("valid payload");
        let reading = WeatherReading::from(payload);

        assert_eq!(reading.city_name, "London");
        assert_eq!(reading.country_code, "GB");
        assert_eq!(reading.condition_code, 803);
        assert_eq!(reading.condition_description, "broken clouds");
        assert_eq!(reading.humidity_pct, 77);
        assert_eq!(reading.wind_speed_mps, 4.63);
        let observed = reading.observed_at.map(|t| t.timestamp());
        assert_eq!(observed, Some(1_700_000_000));
    }

    #[test]
    fn missing_condition_uses_unknown() {
        let payload = CurrentWeather {
            name: "Nowhere".into(),
            dt: None,
            sys: OwSys::default(),
            main: OwMain {
                temp: 1.0,
                feels_like: 0.0,
                humidity: 50,
            },
            wind: OwWind { speed: 0.5 },
            weather: vec![],
        };
        let reading = WeatherReading::from(payload);
        assert_eq!(reading.condition_code, 0);
        assert_eq!(reading.condition_description, "Unknown");
        assert!(reading.observed_at.is_none());
    }

    #[test]
    fn candidate_deserializes_geocoding_entry() {
        let body = r#"[{
            "name": "Springfield",
            "local_names": {"en": "Springfield"},
            "lat": 39.8,
            "lon": -89.6,
            "country": "US",
            "state": "Illinois"
        }]"#;
        let parsed: Vec<LocationCandidate> = serde_json::from_str(body).expect("valid body");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].latitude, 39.8);
        assert_eq!(parsed[0].input_text(), "Springfield, US");
        assert_eq!(
            parsed[0].label(),
            "Springfield, Illinois US \u{1F1FA}\u{1F1F8}"
        );
    }

    #[test]
    fn label_omits_missing_state() {
        let candidate = LocationCandidate {
            name: "Paris".into(),
            state: None,
            country: "FR".into(),
            latitude: 48.85,
            longitude: 2.35,
        };
        assert_eq!(candidate.label(), "Paris FR \u{1F1EB}\u{1F1F7}");
    }
}
