//! Application error hierarchy.
//!
//! Library crates keep their own typed errors; this module gathers them so
//! the dashboard can log the full error and show `user_message()` to people.

use thiserror::Error;
use xiineday_weather::WeatherError;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather data error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown crop id: {0}")]
    UnknownCrop(u32),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::UnknownLocation(_) => {
                "The selected location is not in the catalog. Check your settings."
            }
            ConfigError::UnknownCrop(_) => {
                "The selected crop is not in the catalog. Check your settings."
            }
        }
    }
}

impl From<WeatherError> for ConfigError {
    /// Lookup failures for configured names are settings problems
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::LocationNotFound(city) => ConfigError::UnknownLocation(city),
            WeatherError::CropNotFound(id) => ConfigError::UnknownCrop(id),
            other => ConfigError::Invalid(other.to_string()),
        }
    }
}
