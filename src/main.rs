use anyhow::Result;
use xiineday_core::{AppError, Config, ConfigError};
use xiineday_weather::{
    best_day, crop_alerts, irrigation_need, planting_recommendation, rank, score, Catalog,
    IrrigationSchedule, Locale, LocationWeather, ScoreBand,
};

fn main() -> Result<()> {
    xiineday_core::init()?;

    let (config, _) = Config::load_validated()?;
    tracing::info!(
        "XiineDay started (location: {}, config: {})",
        config.dashboard.location,
        config.config_dir.display()
    );

    if let Err(e) = run(&config) {
        tracing::error!("Dashboard failed: {}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }

    Ok(())
}

fn run(config: &Config) -> Result<(), AppError> {
    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    let locale = config.dashboard.locale;

    let weather = catalog
        .weather_for(&config.dashboard.location)
        .map_err(ConfigError::from)?;

    println!("XiineDay - {}, {}", weather.city, weather.country);
    println!("Theme: {:?}", config.dashboard.theme);
    print_current(weather);
    print_events(&catalog, weather, locale);

    let crop = match config.agronomy.crop_id {
        Some(id) => Some(catalog.crop(id).map_err(ConfigError::from)?),
        None => catalog.crops().first(),
    };
    match crop {
        Some(crop) => print_crop(crop, weather, locale),
        None => tracing::warn!("Catalog has no crops, skipping agronomy section"),
    }

    Ok(())
}

fn print_current(weather: &LocationWeather) {
    let current = &weather.current;
    println!("\nNow: {}", current.condition);
    println!(
        "  {:.0}°C (feels like {:.0}°C), humidity {}%, wind {:.0} km/h {}",
        current.temp, current.feels_like, current.humidity, current.wind_speed, current.wind_direction
    );
}

fn print_events(catalog: &Catalog, weather: &LocationWeather, locale: Locale) {
    for event in catalog.event_types() {
        let scored = score(&weather.forecast, &event.profile());
        tracing::debug!("Scored {} days for {}", scored.len(), event.name);

        println!("\n{} ({}h)", event.name, event.duration);
        if let Some(best) = best_day(&scored) {
            println!(
                "  Best: {} {} - {}/100",
                locale.weekday_name(best.date),
                best.date,
                best.score
            );
        }
        for day in rank(&scored) {
            let marker = match ScoreBand::from_score(day.score) {
                ScoreBand::Excellent => "+",
                ScoreBand::Acceptable => "~",
                ScoreBand::Poor => "-",
            };
            println!(
                "  {} {} {:>3}  {}",
                marker,
                day.date,
                day.score,
                day.reason_labels(locale).join(", ")
            );
        }
    }
}

fn print_crop(crop: &xiineday_weather::Crop, weather: &LocationWeather, locale: Locale) {
    println!("\n{} ({})", crop.name, crop.planting_period);

    let need = irrigation_need(&weather.forecast);
    let schedule = IrrigationSchedule::for_need(need);
    println!("  Irrigation need: {}% - {}", need, schedule.advice(locale));
    println!(
        "  Watering: {}, {}",
        schedule.frequency(locale),
        schedule.volume()
    );

    if let Some(planting) = planting_recommendation(&weather.forecast, &crop.ideal_conditions) {
        println!(
            "  Planting: {} (avg {:.1}°C)",
            planting.message(locale),
            planting.average_temp
        );
    }

    let alerts = crop_alerts(&weather.forecast);
    if alerts.is_empty() {
        println!("  No alerts");
    }
    for alert in alerts {
        println!("  [{:?}] {}", alert.severity(), alert.message(locale));
    }
}
