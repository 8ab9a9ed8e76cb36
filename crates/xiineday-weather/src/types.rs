use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Display language for reason texts, alerts and schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Name of the weekday for `date`, capitalized
    pub fn weekday_name(&self, date: NaiveDate) -> &'static str {
        match (self, date.weekday()) {
            (Self::French, Weekday::Mon) => "Lundi",
            (Self::French, Weekday::Tue) => "Mardi",
            (Self::French, Weekday::Wed) => "Mercredi",
            (Self::French, Weekday::Thu) => "Jeudi",
            (Self::French, Weekday::Fri) => "Vendredi",
            (Self::French, Weekday::Sat) => "Samedi",
            (Self::French, Weekday::Sun) => "Dimanche",
            (Self::English, Weekday::Mon) => "Monday",
            (Self::English, Weekday::Tue) => "Tuesday",
            (Self::English, Weekday::Wed) => "Wednesday",
            (Self::English, Weekday::Thu) => "Thursday",
            (Self::English, Weekday::Fri) => "Friday",
            (Self::English, Weekday::Sat) => "Saturday",
            (Self::English, Weekday::Sun) => "Sunday",
        }
    }
}

/// One day of forecast weather. Temperatures in °C, wind in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    #[serde(alias = "precipitation")]
    pub precipitation_chance: u8,
    pub wind_speed: f64,
    pub humidity: u8,
}

/// Ideal-condition thresholds for an event or activity type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProfile {
    pub temp_min: f64,
    pub temp_max: f64,
    pub precipitation_max: u8,
    pub wind_speed_max: f64,
}

impl ActivityProfile {
    /// Report caller-contract violations.
    ///
    /// The scorer accepts any profile; an inverted or out-of-range profile
    /// yields a well-defined but unhelpful score. Callers that load profiles
    /// from untrusted data can use this to reject them up front.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !self.temp_min.is_finite() || !self.temp_max.is_finite() {
            issues.push("temperature band must be finite".to_string());
        } else if self.temp_min > self.temp_max {
            issues.push(format!(
                "temperature band is inverted ({} > {})",
                self.temp_min, self.temp_max
            ));
        }
        if self.precipitation_max > 100 {
            issues.push(format!(
                "precipitation max {} is above 100%",
                self.precipitation_max
            ));
        }
        if self.wind_speed_max.is_nan() || self.wind_speed_max < 0.0 {
            issues.push(format!(
                "wind speed max {} must be a non-negative number",
                self.wind_speed_max
            ));
        }
        issues
    }
}

/// Stable code for a score deduction or summary verdict.
///
/// Rendering to text is left to `label`, so presentation layers can swap
/// locales without touching the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    TempOutOfRange,
    PrecipTooHigh,
    WindTooHigh,
    Excellent,
    Acceptable,
}

impl Reason {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::TempOutOfRange => "TEMP_OUT_OF_RANGE",
            Self::PrecipTooHigh => "PRECIP_TOO_HIGH",
            Self::WindTooHigh => "WIND_TOO_HIGH",
            Self::Excellent => "EXCELLENT",
            Self::Acceptable => "ACCEPTABLE",
        }
    }

    /// Human-readable text in the given locale
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::TempOutOfRange, Locale::French) => "Température non optimale",
            (Self::PrecipTooHigh, Locale::French) => "Risque de pluie élevé",
            (Self::WindTooHigh, Locale::French) => "Vent trop fort",
            (Self::Excellent, Locale::French) => "Conditions excellentes",
            (Self::Acceptable, Locale::French) => "Conditions acceptables",
            (Self::TempOutOfRange, Locale::English) => "Temperature not optimal",
            (Self::PrecipTooHigh, Locale::English) => "High rain risk",
            (Self::WindTooHigh, Locale::English) => "Wind too strong",
            (Self::Excellent, Locale::English) => "Excellent conditions",
            (Self::Acceptable, Locale::English) => "Acceptable conditions",
        }
    }

    /// Whether this reason records a deduction rather than a summary
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            Self::TempOutOfRange | Self::PrecipTooHigh | Self::WindTooHigh
        )
    }
}

/// Suitability result for one forecast day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredDay {
    pub date: NaiveDate,
    pub score: u8,
    pub reasons: Vec<Reason>,
}

impl ScoredDay {
    /// Reasons rendered in the given locale, in evaluation order
    pub fn reason_labels(&self, locale: Locale) -> Vec<&'static str> {
        self.reasons.iter().map(|r| r.label(locale)).collect()
    }
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current observed conditions at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: String,
    #[serde(default)]
    pub pressure: f64,
    #[serde(default)]
    pub precipitation: f64,
    pub condition: String,
    #[serde(default)]
    pub uv_index: f64,
}

/// Weather bundle for one catalog location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationWeather {
    pub id: u32,
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

/// Ideal conditions attached to an event type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealConditions {
    pub temp_min: f64,
    pub temp_max: f64,
    pub precipitation_max: u8,
    pub wind_speed_max: f64,
    #[serde(default)]
    pub description: String,
}

/// Kind of event a user can schedule (wedding, market, sports day...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: u32,
    #[serde(rename = "type")]
    pub name: String,
    /// Duration in hours
    pub duration: u32,
    pub ideal_conditions: IdealConditions,
}

impl EventType {
    /// Thresholds to feed the scorer
    pub fn profile(&self) -> ActivityProfile {
        ActivityProfile {
            temp_min: self.ideal_conditions.temp_min,
            temp_max: self.ideal_conditions.temp_max,
            precipitation_max: self.ideal_conditions.precipitation_max,
            wind_speed_max: self.ideal_conditions.wind_speed_max,
        }
    }
}

/// Growing conditions a crop does best in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropConditions {
    pub temp_min: f64,
    pub temp_max: f64,
    /// Seasonal rainfall band in mm
    pub rainfall_min: f64,
    pub rainfall_max: f64,
    #[serde(default)]
    pub soil_moisture: String,
}

/// One stage of a crop's growth cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthStage {
    pub stage: String,
    pub duration: String,
    pub irrigation: String,
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
}

/// Crop reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: u32,
    pub name: String,
    pub planting_period: String,
    pub harvest_period: String,
    pub water_requirements: String,
    pub ideal_conditions: CropConditions,
    #[serde(default)]
    pub growth_stages: Vec<GrowthStage>,
}

/// Weather domain errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid forecast for {city}: {reason}")]
    InvalidForecast { city: String, reason: String },
    #[error("Invalid event type {name}: {reason}")]
    InvalidEventType { name: String, reason: String },
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("Event type not found: {0}")]
    EventTypeNotFound(String),
    #[error("Crop not found: {0}")]
    CropNotFound(u32),
}

impl WeatherError {
    /// User-friendly error message for display
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Io(_) => "Weather data could not be read.",
            Self::Parse(_) | Self::InvalidForecast { .. } | Self::InvalidEventType { .. } => {
                "Weather data is malformed. Check the catalog file."
            }
            Self::LocationNotFound(_) => "Location not found. Check and try again.",
            Self::EventTypeNotFound(_) => "Unknown event type.",
            Self::CropNotFound(_) => "Unknown crop.",
        }
    }
}
