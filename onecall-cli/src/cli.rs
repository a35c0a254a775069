use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};

use onecall_core::{
    ApiResponse, CurrentWeatherResponse, OpenWeatherClient, WeatherGateway,
    WeeklyWeatherResponse, current_request, model, weekly_request,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "onecall", version, about = "OpenWeather One Call CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand: credential plus target coordinates.
#[derive(Debug, Args)]
pub struct Target {
    /// OpenWeather API key.
    #[arg(long)]
    pub api_key: String,

    /// Latitude, -90 to 90.
    #[arg(long, value_parser = parse_latitude)]
    pub lat: f64,

    /// Longitude, -180 to 180.
    #[arg(long, value_parser = parse_longitude)]
    pub lon: f64,

    /// Print the raw result wrapped in the JSON envelope instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current weather at the given coordinates.
    Current {
        #[command(flatten)]
        target: Target,
    },

    /// Show the 7-day forecast for the given coordinates.
    Weekly {
        #[command(flatten)]
        target: Target,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = OpenWeatherClient::new();

        match self.command {
            Command::Current { target } => {
                let request = current_request(target.api_key, target.lat, target.lon)?;
                let report = client.current_weather(&request).await?;

                if target.json {
                    println!("{}", serde_json::to_string_pretty(&ApiResponse::ok(report))?);
                } else {
                    print_current(&report);
                }
            }
            Command::Weekly { target } => {
                let request = weekly_request(target.api_key, target.lat, target.lon)?;
                let forecast = client.weekly_forecast(&request).await?;

                if target.json {
                    println!("{}", serde_json::to_string_pretty(&ApiResponse::ok(forecast))?);
                } else {
                    print_weekly(&forecast);
                }
            }
        }

        Ok(())
    }
}

fn parse_latitude(input: &str) -> Result<f64, String> {
    let lat: f64 = input
        .parse()
        .map_err(|_| format!("'{input}' is not a valid latitude"))?;
    model::validate_latitude(lat).map_err(|err| err.to_string())?;
    Ok(lat)
}

fn parse_longitude(input: &str) -> Result<f64, String> {
    let lon: f64 = input
        .parse()
        .map_err(|_| format!("'{input}' is not a valid longitude"))?;
    model::validate_longitude(lon).map_err(|err| err.to_string())?;
    Ok(lon)
}

/// Render a unix timestamp in the location's local time, falling back to the
/// raw value if the provider sent a nonsense offset.
fn local_time(ts: i64, offset_secs: i64, fmt: &str) -> String {
    let offset = i32::try_from(offset_secs)
        .ok()
        .and_then(FixedOffset::east_opt);

    match (DateTime::from_timestamp(ts, 0), offset) {
        (Some(utc), Some(offset)) => utc.with_timezone(&offset).format(fmt).to_string(),
        _ => ts.to_string(),
    }
}

fn condition(weather: &[onecall_core::WeatherDescription]) -> &str {
    weather
        .first()
        .map(|w| w.description.as_str())
        .unwrap_or("—")
}

fn print_current(report: &CurrentWeatherResponse) {
    println!("{}, {}", report.name, report.sys.country);
    println!("  {}", condition(&report.weather));
    println!(
        "  temperature: {:.1}° (feels like {:.1}°)",
        report.main.temp, report.main.feels_like
    );
    println!("  humidity: {:.0}%", report.main.humidity);
    println!("  pressure: {} hPa", report.main.pressure);
    println!("  wind: {:.1} m/s at {:.0}°", report.wind.speed, report.wind.deg);

    if let Some(visibility) = report.visibility {
        println!("  visibility: {visibility} m");
    }

    println!(
        "  sunrise: {}  sunset: {}",
        local_time(report.sys.sunrise, report.timezone, "%H:%M"),
        local_time(report.sys.sunset, report.timezone, "%H:%M"),
    );
}

fn print_weekly(forecast: &WeeklyWeatherResponse) {
    println!(
        "7-day forecast for ({:.2}, {:.2}), {}",
        forecast.lat, forecast.lon, forecast.timezone
    );

    for day in &forecast.daily {
        println!(
            "  {}  {:>5.1}° / {:>5.1}°  {} (precipitation {:.0}%)",
            local_time(day.dt, forecast.timezone_offset, "%Y-%m-%d %a"),
            day.temp.min,
            day.temp.max,
            condition(&day.weather),
            day.pop * 100.0,
        );
    }
}
