use crate::core::geo::azimuth_direction;
use crate::core::rotation::{select_page, IntervalCursor};
use crate::core::weather::{Airport, Conditions, WeatherClient, WeatherReport};
use crate::core::{Catalog, Config};
use crate::error::{Result as StrikerResult, StrikerError};
use crate::ui::formatters::title_case;
use crate::ui::markup::error_line;
use anyhow::{Context, Result};
use log::warn;
use std::time::Duration;

/// Distance and initial bearing from the home airport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub miles: f64,
    pub bearing_deg: f64,
}

pub fn execute(config: &Config) -> Result<()> {
    println!("{}", super::render_or_report(body(config)));
    Ok(())
}

fn body(config: &Config) -> Result<String> {
    let paths = config.paths();
    let airports = Catalog::<Airport>::load(&paths.airport_data)
        .context("Failed to load airport data")?;

    let code = config.airport_code.as_str();
    let home = airports
        .get(code)
        .cloned()
        .ok_or_else(|| {
            StrikerError::missing_data(format!(
                "Airport {} not found in {}",
                code,
                paths.airport_data.display()
            ))
        })?;

    let key = config.open_weather_key.as_deref().ok_or_else(|| {
        StrikerError::config("No OpenWeather API key (set KEY_OPEN_WEATHER_API or `striker set open-weather-key`)")
    })?;
    let client = WeatherClient::new(key)?;

    let mut blocks = vec![airport_block(code, &home, None, &client.current(home.coordinates()))];

    let others = airports.without(code);
    let mut cursor = IntervalCursor::now(Duration::from_secs(config.airport_rotation_secs));
    let page = select_page(others.entries(), &mut cursor, config.airport_page_size);

    for (other_code, airport) in page.iter() {
        let leg = leg_between(&home, airport);
        let weather = client.current(airport.coordinates());
        if let Err(e) = &weather {
            warn!("Weather for {} unavailable: {}", other_code, e);
        }
        blocks.push(airport_block(other_code, airport, Some(leg), &weather));
    }

    Ok(blocks.join("\n"))
}

pub fn leg_between(home: &Airport, other: &Airport) -> Leg {
    let from = home.coordinates();
    let to = other.coordinates();
    Leg {
        miles: from.distance_miles_to(&to),
        bearing_deg: from.bearing_to(&to),
    }
}

/// Heading plus either three lines of conditions or one red line
pub fn airport_block(
    code: &str,
    airport: &Airport,
    leg: Option<Leg>,
    weather: &StrikerResult<WeatherReport>,
) -> String {
    let heading = match leg {
        None => format!("{} - {} ({})", airport.name, airport.location, code),
        Some(leg) => format!(
            "{} - {} ({}, {:.0} miles {} at {:.0}°)",
            airport.name,
            airport.location,
            code,
            leg.miles,
            azimuth_direction(leg.bearing_deg),
            leg.bearing_deg
        ),
    };
    let heading = format!(
        "${{goto 20}}${{color yellow}}${{font3}}{} ${{hr 2}}${{font}}",
        heading
    );

    match weather {
        Ok(report) => format!("{}\n{}", heading, render_conditions(&Conditions::from_report(report))),
        Err(e) => format!("{}\n{}", heading, error_line(&e.to_string())),
    }
}

pub fn render_conditions(conditions: &Conditions) -> String {
    let wind_from = conditions
        .wind_deg
        .map(|deg| format!("{:.0}", deg))
        .unwrap_or_else(|| "N/A".to_string());
    let visibility = conditions
        .visibility_miles
        .map(|miles| format!("{:.1} miles", miles))
        .unwrap_or_else(|| "unknown".to_string());

    [
        format!(
            "${{goto 30}}${{color cyan}}Temperature | Dew Point | Humidity | Pressure: ${{alignr}}${{{}}}{:.0}°C ({:.0}°F) | ${{color white}}{:.0}°C ({:.0}°F) | {:.0}% | ${{{}}}{:.2} inHg",
            conditions.temperature_color(),
            conditions.temp_c,
            conditions.temp_f,
            conditions.dew_c,
            conditions.dew_f,
            conditions.humidity,
            conditions.pressure_color(),
            conditions.pressure_inhg
        ),
        format!(
            "${{goto 30}}${{color cyan}}Conditions: ${{alignr}}${{color white}}{:.0} mph from {}°, {} with {} visibility",
            conditions.wind_mph, wind_from, conditions.precipitation, visibility
        ),
        format!(
            "${{goto 30}}${{color cyan}}Sky (clouds): ${{alignr}}${{color white}}{}",
            title_case(&conditions.sky)
        ),
    ]
    .join("\n")
}
