//! Weather-suitability engine for XiineDay
//!
//! Scores forecast days against event and crop requirements, and loads the
//! reference catalog those inputs come from.

pub mod agronomy;
pub mod catalog;
pub mod scoring;
pub mod types;

pub use agronomy::{
    crop_alerts, irrigation_need, planting_recommendation, AlertKind, AlertSeverity, CropAlert,
    IrrigationSchedule, PlantingRecommendation, PlantingStatus,
};
pub use catalog::Catalog;
pub use scoring::{best_day, rank, score, score_day, ScoreBand};
pub use types::*;
