use thiserror::Error;

/// Construction-time rejection of a field that violates its declared
/// constraint. Every schema type reports bad input through this one type;
/// nothing is deferred to the network call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("api_key must not be empty")]
    MissingApiKey,

    #[error("latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error(
        "invalid exclude item '{0}'. Valid items: current, minutely, hourly, daily, alerts."
    )]
    InvalidExcludeItem(String),

    #[error("unknown units '{0}'. Valid units: standard, metric, imperial.")]
    UnknownUnits(String),

    #[error("unknown language '{0}'. Valid languages: ru, en, de, fr, es.")]
    UnknownLanguage(String),
}
