use std::collections::HashMap;
use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Measurement units accepted by OpenWeather. Closed set; anything else is
/// rejected at the string boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Standard,
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Standard, Units::Metric, Units::Imperial]
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "standard" => Ok(Units::Standard),
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(ValidationError::UnknownUnits(value.to_string())),
        }
    }
}

/// Response language. Closed set, wire names are the two-letter codes
/// OpenWeather expects in the `lang` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Language {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ru" => Ok(Language::Russian),
            "en" => Ok(Language::English),
            "de" => Ok(Language::German),
            "fr" => Ok(Language::French),
            "es" => Ok(Language::Spanish),
            _ => Err(ValidationError::UnknownLanguage(value.to_string())),
        }
    }
}

/// One part of a One Call response that a request may exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcludePart {
    Current,
    Minutely,
    Hourly,
    Daily,
    Alerts,
}

impl ExcludePart {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExcludePart::Current => "current",
            ExcludePart::Minutely => "minutely",
            ExcludePart::Hourly => "hourly",
            ExcludePart::Daily => "daily",
            ExcludePart::Alerts => "alerts",
        }
    }

    /// Parse a list of exclude items coming from an untyped boundary
    /// (CLI flags, JSON strings). Fails on the first item outside the
    /// vocabulary.
    pub fn parse_list<I, S>(items: I) -> Result<Vec<ExcludePart>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|item| ExcludePart::try_from(item.as_ref()))
            .collect()
    }
}

impl std::fmt::Display for ExcludePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ExcludePart {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "current" => Ok(ExcludePart::Current),
            "minutely" => Ok(ExcludePart::Minutely),
            "hourly" => Ok(ExcludePart::Hourly),
            "daily" => Ok(ExcludePart::Daily),
            "alerts" => Ok(ExcludePart::Alerts),
            _ => Err(ValidationError::InvalidExcludeItem(value.to_string())),
        }
    }
}

/// A validated One Call request. Construct through [`WeatherRequest::new`];
/// an instance in hand has already passed every field check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRequest {
    pub api_key: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<ExcludePart>>,
    pub lang: Language,
    pub units: Units,
}

impl WeatherRequest {
    /// Validate and build a request. `lang` defaults to Russian and `units`
    /// to metric when not given; `exclude = None` means "return everything".
    pub fn new(
        api_key: impl Into<String>,
        lat: f64,
        lon: f64,
        exclude: Option<Vec<ExcludePart>>,
        lang: Option<Language>,
        units: Option<Units>,
    ) -> Result<Self, ValidationError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ValidationError::MissingApiKey);
        }

        validate_latitude(lat)?;
        validate_longitude(lon)?;

        Ok(Self {
            api_key,
            lat,
            lon,
            exclude,
            lang: lang.unwrap_or_default(),
            units: units.unwrap_or_default(),
        })
    }
}

/// Range check for a request latitude, bounds inclusive.
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(ValidationError::LatitudeOutOfRange(lat))
    }
}

/// Range check for a request longitude, bounds inclusive.
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(ValidationError::LongitudeOutOfRange(lon))
    }
}

/// Coordinates as they appear inside provider responses. Deliberately not
/// range-checked, unlike the request's `lat`/`lon`: response coordinates are
/// provider-trusted and carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A single weather condition code (e.g. "Rain", "Clouds") with its icon id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDescription {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Current atmospheric readings. The optional pressure fields are absent when
/// the provider does not report them, which is distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainData {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: f64,
    pub sea_level: Option<i64>,
    pub grnd_level: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindData {
    pub speed: f64,
    pub deg: f64,
}

/// Location metadata attached to a current-weather report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysData {
    pub id: Option<i64>,
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
    #[serde(rename = "type")]
    pub kind: Option<i64>,
}

/// The `/data/2.5/weather` response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    /// Offset from UTC in seconds.
    pub timezone: i64,
    pub coord: Coordinates,
    pub main: MainData,
    pub weather: Vec<WeatherDescription>,
    pub wind: WindData,
    pub sys: SysData,
    /// Unix timestamp of the observation.
    pub dt: i64,
    pub visibility: Option<i64>,
    pub clouds: Option<HashMap<String, serde_json::Value>>,
    /// Precipitation probability in [0, 1].
    pub pop: Option<f64>,
}

/// Temperature breakdown over one forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperature {
    pub day: f64,
    pub min: f64,
    pub max: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

/// One day of the weekly forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub dt: i64,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    pub temp: DailyTemperature,
    pub feels_like: Option<HashMap<String, f64>>,
    pub pressure: i64,
    pub humidity: i64,
    pub weather: Vec<WeatherDescription>,
    pub speed: f64,
    pub deg: f64,
    pub gust: Option<f64>,
    /// Cloudiness in percent.
    pub clouds: i64,
    /// Precipitation probability in [0, 1].
    pub pop: f64,
    /// Rain volume in mm, absent when none is forecast.
    pub rain: Option<f64>,
    pub snow: Option<f64>,
    pub uvi: Option<f64>,
}

/// The One Call response restricted to the daily block: up to 7 entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWeatherResponse {
    pub lat: f64,
    pub lon: f64,
    /// IANA timezone name, e.g. "Europe/Moscow".
    pub timezone: String,
    pub timezone_offset: i64,
    pub daily: Vec<DailyForecast>,
}

/// Generic envelope for handing any provider result to a downstream caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
