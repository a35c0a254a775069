//! Factory functions producing pre-configured [`WeatherRequest`]s for the
//! common use cases: each fixes language to Russian and units to metric and
//! sets the exclusion list so only the wanted response block remains.

use crate::error::ValidationError;
use crate::model::{ExcludePart, Language, Units, WeatherRequest};

/// Request for the 7-day forecast: everything but the daily block excluded.
pub fn weekly_request(
    api_key: impl Into<String>,
    lat: f64,
    lon: f64,
) -> Result<WeatherRequest, ValidationError> {
    WeatherRequest::new(
        api_key,
        lat,
        lon,
        Some(vec![
            ExcludePart::Current,
            ExcludePart::Minutely,
            ExcludePart::Hourly,
            ExcludePart::Alerts,
        ]),
        Some(Language::Russian),
        Some(Units::Metric),
    )
}

/// Request for the current weather: everything but the current block excluded.
pub fn current_request(
    api_key: impl Into<String>,
    lat: f64,
    lon: f64,
) -> Result<WeatherRequest, ValidationError> {
    WeatherRequest::new(
        api_key,
        lat,
        lon,
        Some(vec![
            ExcludePart::Daily,
            ExcludePart::Minutely,
            ExcludePart::Hourly,
            ExcludePart::Alerts,
        ]),
        Some(Language::Russian),
        Some(Units::Metric),
    )
}

/// Request for the 48-hour forecast: everything but the hourly block excluded.
pub fn hourly_request(
    api_key: impl Into<String>,
    lat: f64,
    lon: f64,
) -> Result<WeatherRequest, ValidationError> {
    WeatherRequest::new(
        api_key,
        lat,
        lon,
        Some(vec![
            ExcludePart::Current,
            ExcludePart::Daily,
            ExcludePart::Minutely,
            ExcludePart::Alerts,
        ]),
        Some(Language::Russian),
        Some(Units::Metric),
    )
}

/// Request for all available weather data: no exclusions.
pub fn all_weather_request(
    api_key: impl Into<String>,
    lat: f64,
    lon: f64,
) -> Result<WeatherRequest, ValidationError> {
    WeatherRequest::new(api_key, lat, lon, None, Some(Language::Russian), Some(Units::Metric))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const KEY: &str = "TEST_KEY";

    fn exclude_set(req: &WeatherRequest) -> HashSet<ExcludePart> {
        req.exclude
            .as_ref()
            .expect("request should carry exclusions")
            .iter()
            .copied()
            .collect()
    }

    #[test]
    fn weekly_keeps_only_daily() {
        let req = weekly_request(KEY, 55.0, 37.0).unwrap();

        assert_eq!(
            exclude_set(&req),
            HashSet::from([
                ExcludePart::Current,
                ExcludePart::Minutely,
                ExcludePart::Hourly,
                ExcludePart::Alerts,
            ])
        );
        assert_eq!(req.lang, Language::Russian);
        assert_eq!(req.units, Units::Metric);
    }

    #[test]
    fn current_keeps_only_current() {
        let req = current_request(KEY, 55.0, 37.0).unwrap();

        assert_eq!(
            exclude_set(&req),
            HashSet::from([
                ExcludePart::Daily,
                ExcludePart::Minutely,
                ExcludePart::Hourly,
                ExcludePart::Alerts,
            ])
        );
        assert_eq!(req.lang, Language::Russian);
        assert_eq!(req.units, Units::Metric);
    }

    #[test]
    fn hourly_keeps_only_hourly() {
        let req = hourly_request(KEY, 55.0, 37.0).unwrap();

        assert_eq!(
            exclude_set(&req),
            HashSet::from([
                ExcludePart::Current,
                ExcludePart::Daily,
                ExcludePart::Minutely,
                ExcludePart::Alerts,
            ])
        );
    }

    #[test]
    fn all_weather_excludes_nothing() {
        let req = all_weather_request(KEY, 55.0, 37.0).unwrap();

        assert_eq!(req.exclude, None);
        assert_eq!(req.lang, Language::Russian);
        assert_eq!(req.units, Units::Metric);
    }

    #[test]
    fn factories_carry_the_given_credential_and_coordinates() {
        let req = current_request(KEY, 55.75, 37.62).unwrap();

        assert_eq!(req.api_key, KEY);
        assert_eq!(req.lat, 55.75);
        assert_eq!(req.lon, 37.62);
    }

    #[test]
    fn factories_propagate_validation_failures() {
        use crate::error::ValidationError;

        let err = weekly_request(KEY, 120.0, 37.0).unwrap_err();
        assert_eq!(err, ValidationError::LatitudeOutOfRange(120.0));

        let err = all_weather_request(KEY, 55.0, -200.0).unwrap_err();
        assert_eq!(err, ValidationError::LongitudeOutOfRange(-200.0));

        assert!(hourly_request("", 55.0, 37.0).is_err());
    }
}
