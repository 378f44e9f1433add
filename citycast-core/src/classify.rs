use serde::{Deserialize, Serialize};

/// Display bucket for an OpenWeather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Fog,
    Clear,
    Clouds,
    Unknown,
}

impl ConditionCategory {
    /// Bands are checked in order; codes outside all of them are `Unknown`.
    pub fn from_code(code: i64) -> Self {
        match code {
            200..300 => Self::Thunderstorm,
            300..400 => Self::Drizzle,
            500..600 => Self::Rain,
            600..700 => Self::Snow,
            700..800 => Self::Fog,
            800 => Self::Clear,
            801..900 => Self::Clouds,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Fog => "Fog",
            Self::Clear => "Sunny",
            Self::Clouds => "Cloudy",
            Self::Unknown => "Rainbow",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "⛈️",
            Self::Drizzle => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Fog => "🌫️",
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Unknown => "🌈",
        }
    }

    fn image_name(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Fog => "fog",
            Self::Clear => "sunny",
            Self::Clouds => "cloudy",
            Self::Unknown => "rainbow",
        }
    }
}

/// How icons are written into the card's icon slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Emoji,
    Image,
}

impl IconStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconStyle::Emoji => "emoji",
            IconStyle::Image => "image",
        }
    }

    pub const fn all() -> &'static [IconStyle] {
        &[IconStyle::Emoji, IconStyle::Image]
    }

    pub fn condition_icon(&self, code: i64) -> String {
        let category = ConditionCategory::from_code(code);
        match self {
            IconStyle::Emoji => category.emoji().to_string(),
            IconStyle::Image => format!(
                "<img src='/images/weather/{}.png' alt='{}' class='weather-icon'>",
                category.image_name(),
                category.label()
            ),
        }
    }

    pub fn loading_indicator(&self) -> String {
        match self {
            IconStyle::Emoji => "⏳".to_string(),
            IconStyle::Image => {
                "<img src='/images/loading.png' style='width: 100px; height: 100px;'>".to_string()
            }
        }
    }
}

impl std::fmt::Display for IconStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for IconStyle {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "emoji" => Ok(IconStyle::Emoji),
            "image" => Ok(IconStyle::Image),
            _ => Err(anyhow::anyhow!(
                "Unknown icon style '{value}'. Supported styles: emoji, image."
            )),
        }
    }
}
