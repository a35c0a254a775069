use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{CurrentWeatherResponse, WeatherRequest, WeeklyWeatherResponse};

pub mod openweather;

/// The network seam: takes an already-validated request and performs the
/// actual call. Everything behind this trait may block, retry, or fail for
/// transport reasons; nothing in front of it does any I/O.
#[async_trait]
pub trait WeatherGateway: Send + Sync + Debug {
    async fn current_weather(&self, request: &WeatherRequest)
    -> anyhow::Result<CurrentWeatherResponse>;

    async fn weekly_forecast(&self, request: &WeatherRequest)
    -> anyhow::Result<WeeklyWeatherResponse>;
}
