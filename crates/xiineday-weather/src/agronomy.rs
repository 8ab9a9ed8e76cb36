//! Crop-care heuristics over a forecast: irrigation need, planting
//! readiness and weather alerts. Same rules as the scorer: deterministic,
//! no I/O, fixed thresholds.

use chrono::NaiveDate;

use crate::types::{CropConditions, ForecastDay, Locale};

/// At most this many alerts are reported for one forecast
pub const MAX_CROP_ALERTS: usize = 5;

const HEAVY_RAIN_CHANCE: u8 = 70;
const HEAT_TEMP_MAX: f64 = 35.0;
const STRONG_WIND_SPEED: f64 = 25.0;
/// Summed daily rain chances above this count as adequate rain for planting
const PLANTING_RAIN_MIN: u32 = 10;

/// Irrigation need as a percentage, from average humidity and rain chance.
///
/// Wet, humid weeks need little watering; dry ones need a lot. Returns 0
/// for an empty forecast.
pub fn irrigation_need(forecast: &[ForecastDay]) -> u8 {
    if forecast.is_empty() {
        return 0;
    }
    let days = forecast.len() as f64;
    let avg_humidity = forecast.iter().map(|d| f64::from(d.humidity)).sum::<f64>() / days;
    let avg_precipitation = forecast
        .iter()
        .map(|d| f64::from(d.precipitation_chance))
        .sum::<f64>()
        / days;

    if avg_humidity > 70.0 && avg_precipitation > 50.0 {
        20
    } else if avg_humidity > 60.0 && avg_precipitation > 30.0 {
        40
    } else if avg_humidity > 50.0 {
        60
    } else {
        85
    }
}

/// Watering plan derived from an irrigation need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrigationSchedule {
    Intensive,
    Daily,
    Light,
}

impl IrrigationSchedule {
    pub fn for_need(need: u8) -> Self {
        if need > 70 {
            Self::Intensive
        } else if need > 40 {
            Self::Daily
        } else {
            Self::Light
        }
    }

    pub fn advice(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Intensive, Locale::French) => "Arrosage fortement recommandé",
            (Self::Daily, Locale::French) => "Arrosage modéré nécessaire",
            (Self::Light, Locale::French) => "Arrosage minimal requis",
            (Self::Intensive, Locale::English) => "Watering strongly recommended",
            (Self::Daily, Locale::English) => "Moderate watering needed",
            (Self::Light, Locale::English) => "Minimal watering required",
        }
    }

    pub fn frequency(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Intensive, Locale::French) => "2-3 fois par jour",
            (Self::Daily, Locale::French) => "1 fois par jour",
            (Self::Light, Locale::French) => "Tous les 2-3 jours",
            (Self::Intensive, Locale::English) => "2-3 times a day",
            (Self::Daily, Locale::English) => "Once a day",
            (Self::Light, Locale::English) => "Every 2-3 days",
        }
    }

    /// Water volume per watering
    pub fn volume(&self) -> &'static str {
        match self {
            Self::Intensive => "25-30 L/m²",
            Self::Daily => "15-20 L/m²",
            Self::Light => "8-12 L/m²",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantingStatus {
    Excellent,
    Good,
    Poor,
}

/// Whether the coming days suit planting a crop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantingRecommendation {
    pub status: PlantingStatus,
    pub average_temp: f64,
    pub total_rain: u32,
}

impl PlantingRecommendation {
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self.status, locale) {
            (PlantingStatus::Excellent, Locale::French) => "Conditions optimales pour la plantation",
            (PlantingStatus::Good, Locale::French) => "Conditions acceptables pour la plantation",
            (PlantingStatus::Poor, Locale::French) => {
                "Conditions non favorables - Attendez une meilleure période"
            }
            (PlantingStatus::Excellent, Locale::English) => "Optimal conditions for planting",
            (PlantingStatus::Good, Locale::English) => "Acceptable conditions for planting",
            (PlantingStatus::Poor, Locale::English) => {
                "Unfavourable conditions - Wait for a better period"
            }
        }
    }
}

/// Judge planting readiness from mean temperature and summed rain chance.
///
/// Both in range is excellent, one is good, neither is poor. `None` for an
/// empty forecast.
pub fn planting_recommendation(
    forecast: &[ForecastDay],
    crop: &CropConditions,
) -> Option<PlantingRecommendation> {
    if forecast.is_empty() {
        return None;
    }
    let average_temp = forecast
        .iter()
        .map(|d| (d.temp_max + d.temp_min) / 2.0)
        .sum::<f64>()
        / forecast.len() as f64;
    let total_rain: u32 = forecast.iter().map(|d| u32::from(d.precipitation_chance)).sum();

    let temp_ok = average_temp >= crop.temp_min && average_temp <= crop.temp_max;
    let rain_ok = total_rain > PLANTING_RAIN_MIN;

    let status = match (temp_ok, rain_ok) {
        (true, true) => PlantingStatus::Excellent,
        (true, false) | (false, true) => PlantingStatus::Good,
        (false, false) => PlantingStatus::Poor,
    };

    Some(PlantingRecommendation {
        status,
        average_temp,
        total_rain,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertSeverity {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    HeavyRain,
    Heat,
    StrongWind,
}

impl AlertKind {
    pub fn severity(&self) -> AlertSeverity {
        match self {
            Self::HeavyRain => AlertSeverity::Warning,
            Self::Heat => AlertSeverity::Danger,
            Self::StrongWind => AlertSeverity::Info,
        }
    }
}

/// A weather hazard on a given forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropAlert {
    pub date: NaiveDate,
    pub kind: AlertKind,
}

impl CropAlert {
    pub fn severity(&self) -> AlertSeverity {
        self.kind.severity()
    }

    pub fn message(&self, locale: Locale) -> String {
        let day = locale.weekday_name(self.date);
        match (self.kind, locale) {
            (AlertKind::HeavyRain, Locale::French) => {
                format!("Fortes pluies prévues {} - Protégez vos cultures", day)
            }
            (AlertKind::Heat, Locale::French) => {
                format!("Températures élevées {} - Augmentez l'irrigation", day)
            }
            (AlertKind::StrongWind, Locale::French) => {
                format!("Vents forts {} - Vérifiez les cultures fragiles", day)
            }
            (AlertKind::HeavyRain, Locale::English) => {
                format!("Heavy rain expected {} - Protect your crops", day)
            }
            (AlertKind::Heat, Locale::English) => {
                format!("High temperatures {} - Increase irrigation", day)
            }
            (AlertKind::StrongWind, Locale::English) => {
                format!("Strong winds {} - Check fragile crops", day)
            }
        }
    }
}

/// Hazards for each day in order (rain, heat, then wind), capped at
/// `MAX_CROP_ALERTS`.
pub fn crop_alerts(forecast: &[ForecastDay]) -> Vec<CropAlert> {
    forecast
        .iter()
        .flat_map(|day| {
            let kinds = [
                (day.precipitation_chance > HEAVY_RAIN_CHANCE, AlertKind::HeavyRain),
                (day.temp_max > HEAT_TEMP_MAX, AlertKind::Heat),
                (day.wind_speed > STRONG_WIND_SPEED, AlertKind::StrongWind),
            ];
            kinds
                .into_iter()
                .filter(|(hit, _)| *hit)
                .map(move |(_, kind)| CropAlert {
                    date: day.date,
                    kind,
                })
        })
        .take(MAX_CROP_ALERTS)
        .collect()
}
