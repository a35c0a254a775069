use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::model::{CurrentWeatherResponse, ExcludePart, WeatherRequest, WeeklyWeatherResponse};

use super::WeatherGateway;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const ONE_CALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// HTTP client for the OpenWeather endpoints. Holds no credentials: the API
/// key travels inside each [`WeatherRequest`].
#[derive(Debug, Clone, Default)]
pub struct OpenWeatherClient {
    http: Client,
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Map a validated request onto the query string both endpoints share.
    /// The exclusion list is comma-joined, the way One Call expects it.
    fn query_params(request: &WeatherRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("lat", request.lat.to_string()),
            ("lon", request.lon.to_string()),
            ("appid", request.api_key.clone()),
            ("units", request.units.as_str().to_string()),
            ("lang", request.lang.as_str().to_string()),
        ];

        if let Some(exclude) = &request.exclude {
            let joined = exclude
                .iter()
                .map(ExcludePart::as_str)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("exclude", joined));
        }

        params
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        request: &WeatherRequest,
        what: &str,
    ) -> Result<T> {
        let res = self
            .http
            .get(url)
            .query(&Self::query_params(request))
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({what})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                what,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {what} JSON"))
    }
}

#[async_trait]
impl WeatherGateway for OpenWeatherClient {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<CurrentWeatherResponse> {
        self.fetch(CURRENT_URL, request, "current weather").await
    }

    async fn weekly_forecast(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeeklyWeatherResponse> {
        self.fetch(ONE_CALL_URL, request, "weekly forecast").await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
