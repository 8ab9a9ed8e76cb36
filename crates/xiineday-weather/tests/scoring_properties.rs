//! Property tests for the suitability scorer.

use chrono::NaiveDate;
use proptest::prelude::*;
use xiineday_weather::scoring::{PRECIPITATION_PENALTY, TEMPERATURE_PENALTY, WIND_PENALTY};
use xiineday_weather::{score, score_day, ActivityProfile, ForecastDay, Locale, Reason};

fn reference_profile() -> ActivityProfile {
    ActivityProfile {
        temp_min: 15.0,
        temp_max: 30.0,
        precipitation_max: 40,
        wind_speed_max: 20.0,
    }
}

fn forecast_day(temp_min: f64, temp_max: f64, precip: u8, wind: f64) -> ForecastDay {
    ForecastDay {
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        temp_min,
        temp_max,
        precipitation_chance: precip,
        wind_speed: wind,
        humidity: 60,
    }
}

fn arb_day() -> impl Strategy<Value = ForecastDay> {
    (-10.0..45.0f64, 0.0..15.0f64, 0u8..=100, 0.0..80.0f64, 0u8..=100, 0i64..3650).prop_map(
        |(temp_min, spread, precip, wind, humidity, offset)| ForecastDay {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(offset),
            temp_min,
            temp_max: temp_min + spread,
            precipitation_chance: precip,
            wind_speed: wind,
            humidity,
        },
    )
}

fn arb_profile() -> impl Strategy<Value = ActivityProfile> {
    (-5.0..30.0f64, 0.0..25.0f64, 0u8..=100, 0.0..60.0f64).prop_map(
        |(temp_min, spread, precipitation_max, wind_speed_max)| ActivityProfile {
            temp_min,
            temp_max: temp_min + spread,
            precipitation_max,
            wind_speed_max,
        },
    )
}

#[test]
fn scenario_ideal_day() {
    let result = score(&[forecast_day(18.0, 22.0, 10, 5.0)], &reference_profile());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].score, 100);
    assert_eq!(result[0].reason_labels(Locale::French), vec!["Conditions excellentes"]);
}

#[test]
fn scenario_every_check_violated() {
    let result = score_day(&forecast_day(10.0, 35.0, 80, 30.0), &reference_profile());
    assert_eq!(result.score, 35);
    assert_eq!(
        result.reason_labels(Locale::French),
        vec!["Température non optimale", "Risque de pluie élevé", "Vent trop fort"]
    );
}

#[test]
fn scenario_rain_only() {
    let result = score_day(&forecast_day(18.0, 22.0, 50, 5.0), &reference_profile());
    assert_eq!(result.score, 70);
    assert_eq!(
        result.reason_labels(Locale::French),
        vec!["Risque de pluie élevé", "Conditions acceptables"]
    );
}

#[test]
fn single_violation_costs_its_penalty() {
    let profile = reference_profile();
    let cases = [
        (forecast_day(10.0, 22.0, 10, 5.0), TEMPERATURE_PENALTY),
        (forecast_day(18.0, 22.0, 90, 5.0), PRECIPITATION_PENALTY),
        (forecast_day(18.0, 22.0, 10, 45.0), WIND_PENALTY),
    ];
    for (day, penalty) in cases {
        assert_eq!(score_day(&day, &profile).score, 100 - penalty);
    }
}

proptest! {
    #[test]
    fn empty_forecast_scores_nothing(profile in arb_profile()) {
        prop_assert!(score(&[], &profile).is_empty());
    }

    #[test]
    fn score_stays_in_bounds(day in arb_day(), profile in arb_profile()) {
        let result = score_day(&day, &profile);
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn passing_day_is_excellent(profile in arb_profile(), a in 0.0..1.0f64, b in 0.0..1.0f64, w in 0.0..1.0f64, p in 0u8..=100) {
        let span = profile.temp_max - profile.temp_min;
        let low = (profile.temp_min + span * a.min(b)).max(profile.temp_min);
        let high = (profile.temp_min + span * a.max(b)).min(profile.temp_max);
        let day = forecast_day(low, high, p.min(profile.precipitation_max), profile.wind_speed_max * w);
        let result = score_day(&day, &profile);
        prop_assert_eq!(result.score, 100);
        prop_assert_eq!(result.reasons, vec![Reason::Excellent]);
    }

    #[test]
    fn reasons_follow_violations(day in arb_day(), profile in arb_profile()) {
        let result = score_day(&day, &profile);
        let violations: Vec<Reason> = result.reasons.iter().copied().filter(Reason::is_violation).collect();

        let mut expected = Vec::new();
        if day.temp_min < profile.temp_min || day.temp_max > profile.temp_max {
            expected.push(Reason::TempOutOfRange);
        }
        if day.precipitation_chance > profile.precipitation_max {
            expected.push(Reason::PrecipTooHigh);
        }
        if day.wind_speed > profile.wind_speed_max {
            expected.push(Reason::WindTooHigh);
        }
        prop_assert_eq!(&violations, &expected);

        let summaries = result.reasons.len() - violations.len();
        prop_assert!(summaries <= 1);
        // the summary, when present, comes last
        if summaries == 1 {
            prop_assert!(!result.reasons[result.reasons.len() - 1].is_violation());
        }
        prop_assert_eq!(summaries == 1, result.score >= 60);
    }

    #[test]
    fn scoring_is_deterministic(days in proptest::collection::vec(arb_day(), 0..10), profile in arb_profile()) {
        let first = score(&days, &profile);
        let second = score(&days, &profile);
        prop_assert_eq!(first.len(), days.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_order_matches_input(days in proptest::collection::vec(arb_day(), 0..10), profile in arb_profile()) {
        let result = score(&days, &profile);
        let input_dates: Vec<_> = days.iter().map(|d| d.date).collect();
        let output_dates: Vec<_> = result.iter().map(|d| d.date).collect();
        prop_assert_eq!(input_dates, output_dates);
    }
}
