//! Core library for the OpenWeather One Call client.
//!
//! This crate defines:
//! - Validated request/response schemas for the One Call and current-weather
//!   endpoints (construction either yields a fully valid value or a
//!   [`ValidationError`], never a half-checked one)
//! - Factory functions building pre-configured requests for the common use
//!   cases (current, hourly, weekly, everything)
//! - The HTTP gateway that performs the actual call
//!
//! It is used by `onecall-cli`, but can also be reused by other binaries or
//! services.

pub mod error;
pub mod model;
pub mod provider;
pub mod request;

pub use error::ValidationError;
pub use model::{
    ApiResponse, Coordinates, CurrentWeatherResponse, DailyForecast, DailyTemperature,
    ExcludePart, Language, MainData, SysData, Units, WeatherDescription, WeatherRequest,
    WeeklyWeatherResponse, WindData,
};
pub use provider::{WeatherGateway, openweather::OpenWeatherClient};
pub use request::{all_weather_request, current_request, hourly_request, weekly_request};
