//! Forecast dataset embedded at build time.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sky conditions shown on the overview cards and the detail report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sky {
    #[default]
    Clear,
    PartlyCloudy,
    Overcast,
    Rain,
    Storm,
    Snow,
}

impl Sky {
    /// Display name for the condition
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Rain => "Rain",
            Self::Storm => "Storm",
            Self::Snow => "Snow",
        }
    }

    /// Glyph used next to the condition label
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Clear => "\u{2600}",
            Self::PartlyCloudy => "\u{26c5}",
            Self::Overcast => "\u{2601}",
            Self::Rain => "\u{1f327}",
            Self::Storm => "\u{26c8}",
            Self::Snow => "\u{2744}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: i32,
    pub sky: Sky,
    pub humidity_pct: u8,
    pub wind_kph: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySlot {
    pub hour: u8,
    pub temp_c: i32,
    pub sky: Sky,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOutlook {
    pub day: String,
    pub high_c: i32,
    pub low_c: i32,
    pub sky: Sky,
    pub precip_pct: u8,
}

/// Full report for one location: current conditions plus the hourly strip
/// and the multi-day outlook rendered on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationReport {
    pub id: String,
    pub name: String,
    pub current: CurrentConditions,
    #[serde(default)]
    pub hourly: Vec<HourlySlot>,
    #[serde(default)]
    pub daily: Vec<DailyOutlook>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ForecastData {
    pub locations: Vec<LocationReport>,
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("malformed forecast data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ForecastData {
    /// Parse a forecast dataset from its JSON representation.
    ///
    /// # Errors
    /// Returns `ForecastError::Parse` when the payload is not valid forecast JSON.
    pub fn from_json(raw: &str) -> Result<Self, ForecastError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the dataset compiled into the binary. Malformed data falls back
    /// to an empty dataset so the app still mounts.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(include_str!("../static/assets/data/forecast.json")).unwrap_or_else(|e| {
            log::error!("Failed to load embedded forecast data: {e}");
            Self::default()
        })
    }

    #[must_use]
    pub fn location(&self, id: &str) -> Option<&LocationReport> {
        self.locations.iter().find(|loc| loc.id == id)
    }

    #[must_use]
    pub fn first_location_id(&self) -> Option<&str> {
        self.locations.first().map(|loc| loc.id.as_str())
    }
}

/// Render a Celsius temperature for display
#[must_use]
pub fn format_temp(temp_c: i32) -> String {
    format!("{temp_c}\u{b0}C")
}
