//! Read-only reference data: locations with forecasts, event types and crops.
//!
//! The catalog is a single JSON document. A sample data set ships with the
//! crate and is available through [`Catalog::builtin`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::{Crop, EventType, ForecastDay, LocationWeather, WeatherError};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    locations: Vec<LocationWeather>,
    #[serde(default)]
    event_types: Vec<EventType>,
    #[serde(default)]
    crops: Vec<Crop>,
}

impl Catalog {
    /// Parse and check a catalog document
    pub fn from_json(json: &str) -> Result<Self, WeatherError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, WeatherError> {
        tracing::debug!("Loading catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded catalog with {} locations, {} event types, {} crops",
            catalog.locations.len(),
            catalog.event_types.len(),
            catalog.crops.len()
        );
        Ok(catalog)
    }

    /// The sample data set bundled with the crate
    pub fn builtin() -> Result<Self, WeatherError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// City names, in catalog order
    pub fn locations(&self) -> Vec<&str> {
        self.locations.iter().map(|l| l.city.as_str()).collect()
    }

    /// Weather for a city, matched case-insensitively
    pub fn weather_for(&self, city: &str) -> Result<&LocationWeather, WeatherError> {
        let wanted = city.trim().to_lowercase();
        self.locations
            .iter()
            .find(|l| l.city.to_lowercase() == wanted)
            .ok_or_else(|| WeatherError::LocationNotFound(city.to_string()))
    }

    pub fn event_types(&self) -> &[EventType] {
        &self.event_types
    }

    /// Event type by name, matched case-insensitively
    pub fn event_type(&self, name: &str) -> Result<&EventType, WeatherError> {
        let wanted = name.trim().to_lowercase();
        self.event_types
            .iter()
            .find(|e| e.name.to_lowercase() == wanted)
            .ok_or_else(|| WeatherError::EventTypeNotFound(name.to_string()))
    }

    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    pub fn crop(&self, id: u32) -> Result<&Crop, WeatherError> {
        self.crops
            .iter()
            .find(|c| c.id == id)
            .ok_or(WeatherError::CropNotFound(id))
    }

    fn check(&self) -> Result<(), WeatherError> {
        for location in &self.locations {
            check_forecast(&location.forecast).map_err(|reason| {
                WeatherError::InvalidForecast {
                    city: location.city.clone(),
                    reason,
                }
            })?;
        }
        for event in &self.event_types {
            let issues = event.profile().validate();
            if !issues.is_empty() {
                return Err(WeatherError::InvalidEventType {
                    name: event.name.clone(),
                    reason: issues.join("; "),
                });
            }
        }
        Ok(())
    }
}

/// Check the per-day invariants and strictly ascending dates
fn check_forecast(forecast: &[ForecastDay]) -> Result<(), String> {
    for day in forecast {
        if !day.temp_min.is_finite() || !day.temp_max.is_finite() {
            return Err(format!("{}: temperatures must be finite", day.date));
        }
        if day.temp_min > day.temp_max {
            return Err(format!(
                "{}: tempMin {} above tempMax {}",
                day.date, day.temp_min, day.temp_max
            ));
        }
        if day.precipitation_chance > 100 {
            return Err(format!(
                "{}: precipitation chance {} above 100",
                day.date, day.precipitation_chance
            ));
        }
        if day.humidity > 100 {
            return Err(format!("{}: humidity {} above 100", day.date, day.humidity));
        }
        if day.wind_speed.is_nan() || day.wind_speed < 0.0 {
            return Err(format!("{}: wind speed {} is negative", day.date, day.wind_speed));
        }
    }
    if let Some(pair) = forecast.windows(2).find(|w| w[0].date >= w[1].date) {
        return Err(format!(
            "dates not ascending ({} then {})",
            pair[0].date, pair[1].date
        ));
    }
    Ok(())
}
