//! Weather-suitability scoring.
//!
//! Ranks forecast days against an activity's ideal conditions. Every day
//! starts at 100 and loses a fixed penalty per violated check; the checks
//! are independent and all of them run. Scoring is pure: no I/O, no shared
//! state, and identical inputs always give identical outputs.

use crate::types::{ActivityProfile, ForecastDay, Reason, ScoredDay};

/// Score of a day that violates nothing
pub const MAX_SCORE: u8 = 100;
/// Deduction when the temperature leaves the ideal band
pub const TEMPERATURE_PENALTY: u8 = 20;
/// Deduction when the rain chance exceeds the profile maximum
pub const PRECIPITATION_PENALTY: u8 = 30;
/// Deduction when the wind exceeds the profile maximum
pub const WIND_PENALTY: u8 = 15;
/// Lowest score summarized as excellent
pub const EXCELLENT_THRESHOLD: u8 = 80;
/// Lowest score summarized as acceptable
pub const ACCEPTABLE_THRESHOLD: u8 = 60;

/// Score every day of `forecast` against `profile`.
///
/// Output order matches input order; nothing is sorted. An empty forecast
/// yields an empty result.
pub fn score(forecast: &[ForecastDay], profile: &ActivityProfile) -> Vec<ScoredDay> {
    forecast.iter().map(|day| score_day(day, profile)).collect()
}

/// Score a single day.
///
/// Comparisons involving NaN are false, so a NaN field never triggers a
/// deduction.
pub fn score_day(day: &ForecastDay, profile: &ActivityProfile) -> ScoredDay {
    let mut score = MAX_SCORE;
    let mut reasons = Vec::with_capacity(4);

    if day.temp_min < profile.temp_min || day.temp_max > profile.temp_max {
        score = score.saturating_sub(TEMPERATURE_PENALTY);
        reasons.push(Reason::TempOutOfRange);
    }

    if day.precipitation_chance > profile.precipitation_max {
        score = score.saturating_sub(PRECIPITATION_PENALTY);
        reasons.push(Reason::PrecipTooHigh);
    }

    if day.wind_speed > profile.wind_speed_max {
        score = score.saturating_sub(WIND_PENALTY);
        reasons.push(Reason::WindTooHigh);
    }

    if let Some(summary) = ScoreBand::from_score(score).summary() {
        reasons.push(summary);
    }

    ScoredDay {
        date: day.date,
        score,
        reasons,
    }
}

/// Coarse verdict for a score, used for summaries and display colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Excellent,
    Acceptable,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= ACCEPTABLE_THRESHOLD {
            Self::Acceptable
        } else {
            Self::Poor
        }
    }

    /// Summary reason appended after the deductions, if any
    pub fn summary(&self) -> Option<Reason> {
        match self {
            Self::Excellent => Some(Reason::Excellent),
            Self::Acceptable => Some(Reason::Acceptable),
            Self::Poor => None,
        }
    }
}

/// Copy of `scored` ordered best first. Equal scores keep forecast order.
pub fn rank(scored: &[ScoredDay]) -> Vec<ScoredDay> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Highest-scoring day; the earliest one wins a tie.
pub fn best_day(scored: &[ScoredDay]) -> Option<&ScoredDay> {
    scored
        .iter()
        .reduce(|best, day| if day.score > best.score { day } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Locale;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn day(temp_min: f64, temp_max: f64, precip: u8, wind: f64) -> ForecastDay {
        ForecastDay {
            date: date(1),
            temp_min,
            temp_max,
            precipitation_chance: precip,
            wind_speed: wind,
            humidity: 60,
        }
    }

    fn reference_profile() -> ActivityProfile {
        ActivityProfile {
            temp_min: 15.0,
            temp_max: 30.0,
            precipitation_max: 40,
            wind_speed_max: 20.0,
        }
    }

    fn scored(d: u32, score: u8) -> ScoredDay {
        ScoredDay {
            date: date(d),
            score,
            reasons: Vec::new(),
        }
    }

    #[test]
    fn test_ideal_day_scores_full() {
        let result = score_day(&day(18.0, 22.0, 10, 5.0), &reference_profile());
        assert_eq!(result.score, 100);
        assert_eq!(result.reason_labels(Locale::French), vec!["Conditions excellentes"]);
    }

    #[test]
    fn test_all_checks_violated() {
        let result = score_day(&day(10.0, 35.0, 80, 30.0), &reference_profile());
        assert_eq!(result.score, 35);
        assert_eq!(
            result.reason_labels(Locale::French),
            vec!["Température non optimale", "Risque de pluie élevé", "Vent trop fort"]
        );
    }

    #[test]
    fn test_rain_only_is_acceptable() {
        let result = score_day(&day(18.0, 22.0, 50, 5.0), &reference_profile());
        assert_eq!(result.score, 70);
        assert_eq!(
            result.reason_labels(Locale::French),
            vec!["Risque de pluie élevé", "Conditions acceptables"]
        );
    }

    #[test]
    fn test_temperature_only_stays_excellent() {
        let result = score_day(&day(10.0, 22.0, 10, 5.0), &reference_profile());
        assert_eq!(result.score, 80);
        assert_eq!(result.reasons, vec![Reason::TempOutOfRange, Reason::Excellent]);
    }

    #[test]
    fn test_wind_only() {
        let result = score_day(&day(18.0, 22.0, 10, 25.0), &reference_profile());
        assert_eq!(result.score, 85);
        assert_eq!(result.reasons, vec![Reason::WindTooHigh, Reason::Excellent]);
    }

    #[test]
    fn test_rain_and_wind_is_poor() {
        let result = score_day(&day(18.0, 22.0, 90, 25.0), &reference_profile());
        assert_eq!(result.score, 55);
        assert_eq!(result.reasons, vec![Reason::PrecipTooHigh, Reason::WindTooHigh]);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        // Values equal to the limits do not violate anything
        let result = score_day(&day(15.0, 30.0, 40, 20.0), &reference_profile());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_empty_forecast() {
        assert!(score(&[], &reference_profile()).is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let mut first = day(18.0, 22.0, 90, 30.0);
        first.date = date(3);
        let mut second = day(18.0, 22.0, 10, 5.0);
        second.date = date(1);
        let result = score(&[first, second], &reference_profile());
        assert_eq!(result[0].date, date(3));
        assert_eq!(result[1].date, date(1));
    }

    #[test]
    fn test_nan_never_deducts() {
        let result = score_day(&day(f64::NAN, f64::NAN, 10, f64::NAN), &reference_profile());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_inverted_profile_does_not_panic() {
        let profile = ActivityProfile {
            temp_min: 30.0,
            temp_max: 15.0,
            precipitation_max: 40,
            wind_speed_max: 20.0,
        };
        let result = score_day(&day(18.0, 22.0, 10, 5.0), &profile);
        assert_eq!(result.score, 80);
        assert_eq!(result.reasons[0], Reason::TempOutOfRange);
    }

    #[test]
    fn test_score_band() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Acceptable);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Acceptable);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
        assert_eq!(ScoreBand::Poor.summary(), None);
    }

    #[test]
    fn test_rank_is_stable() {
        let days = vec![scored(1, 70), scored(2, 100), scored(3, 70), scored(4, 35)];
        let ranked = rank(&days);
        let order: Vec<_> = ranked.iter().map(|d| d.date).collect();
        assert_eq!(order, vec![date(2), date(1), date(3), date(4)]);
        // input untouched
        assert_eq!(days[0].date, date(1));
    }

    #[test]
    fn test_best_day_first_wins_tie() {
        let days = vec![scored(1, 55), scored(2, 85), scored(3, 85)];
        assert_eq!(best_day(&days).map(|d| d.date), Some(date(2)));
        assert!(best_day(&[]).is_none());
    }

    #[test]
    fn test_scored_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastDay>();
        assert_send_sync::<ActivityProfile>();
        assert_send_sync::<ScoredDay>();
    }
}
