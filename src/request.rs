//! Request builders and query-string serialization.
//!
//! Metric sets are deduplicated and sorted lexicographically before being
//! joined, so the serialized URL is identical regardless of the order (or
//! repetition) of `with_*` calls. Deterministic URLs keep responses
//! cache-friendly and tests reproducible.

use crate::error::{Error, Result};
use crate::location::Location;
use crate::metrics::{CurrentMetric, DailyMetric, HourlyMetric, Minutely15Metric};
use crate::units::{CellSelection, PrecipitationUnit, TemperatureUnit, WindSpeedUnit};

/// A request to the forecast API.
#[derive(Debug, Clone, Default)]
pub struct ForecastRequest {
    location: Location,

    hourly: Vec<HourlyMetric>,
    daily: Vec<DailyMetric>,
    current: Vec<CurrentMetric>,
    minutely_15: Vec<Minutely15Metric>,

    temperature_unit: Option<TemperatureUnit>,
    wind_speed_unit: Option<WindSpeedUnit>,
    precipitation_unit: Option<PrecipitationUnit>,

    timezone: Option<String>,
    forecast_days: Option<u16>,
    past_days: Option<u16>,
    forecast_hours: Option<u32>,
    past_hours: Option<u32>,

    start_date: Option<String>,
    end_date: Option<String>,
    start_hour: Option<String>,
    end_hour: Option<String>,

    cell_selection: Option<CellSelection>,
    models: Vec<String>,

    tilt: Option<f64>,
    azimuth: Option<f64>,
}

impl ForecastRequest {
    /// Create a forecast request for the given coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            location: Location::new(latitude, longitude)?,
            ..Self::default()
        })
    }

    /// Replace the location with an existing [`Location`].
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Add hourly metrics. Cumulative across calls; duplicates are removed
    /// at serialization time.
    #[must_use]
    pub fn with_hourly(mut self, metrics: impl IntoIterator<Item = HourlyMetric>) -> Self {
        self.hourly.extend(metrics);
        self
    }

    /// Add daily metrics. Cumulative across calls.
    #[must_use]
    pub fn with_daily(mut self, metrics: impl IntoIterator<Item = DailyMetric>) -> Self {
        self.daily.extend(metrics);
        self
    }

    /// Add current weather metrics. Cumulative across calls.
    #[must_use]
    pub fn with_current(mut self, metrics: impl IntoIterator<Item = CurrentMetric>) -> Self {
        self.current.extend(metrics);
        self
    }

    /// Add 15-minutely metrics. Cumulative across calls.
    #[must_use]
    pub fn with_minutely_15(
        mut self,
        metrics: impl IntoIterator<Item = Minutely15Metric>,
    ) -> Self {
        self.minutely_15.extend(metrics);
        self
    }

    #[must_use]
    pub fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_wind_speed_unit(mut self, unit: WindSpeedUnit) -> Self {
        self.wind_speed_unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_precipitation_unit(mut self, unit: PrecipitationUnit) -> Self {
        self.precipitation_unit = Some(unit);
        self
    }

    /// Set the response timezone. Use `"auto"` to derive it from the
    /// coordinates; any IANA timezone name is accepted.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Number of forecast days (0-16).
    #[must_use]
    pub fn with_forecast_days(mut self, days: u16) -> Self {
        self.forecast_days = Some(days);
        self
    }

    /// Number of past days to include (0-92).
    #[must_use]
    pub fn with_past_days(mut self, days: u16) -> Self {
        self.past_days = Some(days);
        self
    }

    #[must_use]
    pub fn with_forecast_hours(mut self, hours: u32) -> Self {
        self.forecast_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn with_past_hours(mut self, hours: u32) -> Self {
        self.past_hours = Some(hours);
        self
    }

    /// Restrict the forecast to a date range (`yyyy-mm-dd`).
    #[must_use]
    pub fn with_date_range(
        mut self,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        self.start_date = Some(start_date.into());
        self.end_date = Some(end_date.into());
        self
    }

    /// Restrict the forecast to an hour range (`yyyy-mm-ddThh:mm`).
    #[must_use]
    pub fn with_hour_range(
        mut self,
        start_hour: impl Into<String>,
        end_hour: impl Into<String>,
    ) -> Self {
        self.start_hour = Some(start_hour.into());
        self.end_hour = Some(end_hour.into());
        self
    }

    #[must_use]
    pub fn with_cell_selection(mut self, selection: CellSelection) -> Self {
        self.cell_selection = Some(selection);
        self
    }

    /// Select specific weather models. Cumulative; emitted in insertion
    /// order without deduplication.
    #[must_use]
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models.extend(models.into_iter().map(Into::into));
        self
    }

    /// Panel tilt in degrees (0-90) for global tilted irradiance.
    #[must_use]
    pub fn with_tilt(mut self, degrees: f64) -> Self {
        self.tilt = Some(degrees);
        self
    }

    /// Panel azimuth in degrees for global tilted irradiance.
    /// 0° = south, -90° = east, 90° = west, ±180° = north.
    #[must_use]
    pub fn with_azimuth(mut self, degrees: f64) -> Self {
        self.azimuth = Some(degrees);
        self
    }

    pub(crate) fn build_url(&self, base_url: &str, api_key: Option<&str>) -> String {
        let mut params = QueryString::new();

        params.push("latitude", format_float(self.location.latitude));
        params.push("longitude", format_float(self.location.longitude));
        if let Some(elevation) = self.location.elevation {
            params.push("elevation", format_float(elevation));
        }

        if !self.hourly.is_empty() {
            params.push("hourly", join_sorted(self.hourly.iter().map(|m| m.as_str())));
        }
        if !self.daily.is_empty() {
            params.push("daily", join_sorted(self.daily.iter().map(|m| m.as_str())));
        }
        if !self.current.is_empty() {
            params.push(
                "current",
                join_sorted(self.current.iter().map(|m| m.as_str())),
            );
        }
        if !self.minutely_15.is_empty() {
            params.push(
                "minutely_15",
                join_sorted(self.minutely_15.iter().map(|m| m.as_str())),
            );
        }

        if let Some(unit) = self.temperature_unit {
            params.push("temperature_unit", unit.as_str());
        }
        if let Some(unit) = self.wind_speed_unit {
            params.push("wind_speed_unit", unit.as_str());
        }
        if let Some(unit) = self.precipitation_unit {
            params.push("precipitation_unit", unit.as_str());
        }

        if let Some(timezone) = &self.timezone {
            params.push("timezone", timezone.clone());
        }
        if let Some(days) = self.forecast_days {
            params.push("forecast_days", days.to_string());
        }
        if let Some(days) = self.past_days {
            params.push("past_days", days.to_string());
        }
        if let Some(hours) = self.forecast_hours {
            params.push("forecast_hours", hours.to_string());
        }
        if let Some(hours) = self.past_hours {
            params.push("past_hours", hours.to_string());
        }

        if let Some(date) = &self.start_date {
            params.push("start_date", date.clone());
        }
        if let Some(date) = &self.end_date {
            params.push("end_date", date.clone());
        }
        if let Some(hour) = &self.start_hour {
            params.push("start_hour", hour.clone());
        }
        if let Some(hour) = &self.end_hour {
            params.push("end_hour", hour.clone());
        }

        if let Some(selection) = self.cell_selection {
            params.push("cell_selection", selection.as_str());
        }
        if !self.models.is_empty() {
            params.push("models", self.models.join(","));
        }

        if let Some(tilt) = self.tilt {
            params.push("tilt", format_float(tilt));
        }
        if let Some(azimuth) = self.azimuth {
            params.push("azimuth", format_float(azimuth));
        }

        if let Some(key) = api_key {
            params.push("apikey", key);
        }

        format!("{base_url}?{}", params.encode())
    }
}

/// A request to the historical (archive) API. Requires a date range at
/// construction.
#[derive(Debug, Clone)]
pub struct HistoricalRequest {
    location: Location,

    start_date: String,
    end_date: String,

    hourly: Vec<HourlyMetric>,
    daily: Vec<DailyMetric>,

    temperature_unit: Option<TemperatureUnit>,
    wind_speed_unit: Option<WindSpeedUnit>,
    precipitation_unit: Option<PrecipitationUnit>,

    timezone: Option<String>,
    cell_selection: Option<CellSelection>,

    tilt: Option<f64>,
    azimuth: Option<f64>,
}

impl HistoricalRequest {
    /// Create a historical request for the given coordinates and date range
    /// (`yyyy-mm-dd`). Both dates are required.
    pub fn new(
        latitude: f64,
        longitude: f64,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self> {
        let location = Location::new(latitude, longitude)?;
        let start_date = start_date.into();
        let end_date = end_date.into();
        if start_date.is_empty() {
            return Err(Error::validation(
                "start_date is required for historical requests",
            ));
        }
        if end_date.is_empty() {
            return Err(Error::validation(
                "end_date is required for historical requests",
            ));
        }
        Ok(Self {
            location,
            start_date,
            end_date,
            hourly: Vec::new(),
            daily: Vec::new(),
            temperature_unit: None,
            wind_speed_unit: None,
            precipitation_unit: None,
            timezone: None,
            cell_selection: None,
            tilt: None,
            azimuth: None,
        })
    }

    /// Replace the location with an existing [`Location`].
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Add hourly metrics. Cumulative across calls.
    #[must_use]
    pub fn with_hourly(mut self, metrics: impl IntoIterator<Item = HourlyMetric>) -> Self {
        self.hourly.extend(metrics);
        self
    }

    /// Add daily metrics. Cumulative across calls.
    #[must_use]
    pub fn with_daily(mut self, metrics: impl IntoIterator<Item = DailyMetric>) -> Self {
        self.daily.extend(metrics);
        self
    }

    #[must_use]
    pub fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_wind_speed_unit(mut self, unit: WindSpeedUnit) -> Self {
        self.wind_speed_unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_precipitation_unit(mut self, unit: PrecipitationUnit) -> Self {
        self.precipitation_unit = Some(unit);
        self
    }

    /// Set the response timezone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    #[must_use]
    pub fn with_cell_selection(mut self, selection: CellSelection) -> Self {
        self.cell_selection = Some(selection);
        self
    }

    /// Panel tilt in degrees (0-90) for global tilted irradiance.
    #[must_use]
    pub fn with_tilt(mut self, degrees: f64) -> Self {
        self.tilt = Some(degrees);
        self
    }

    /// Panel azimuth in degrees for global tilted irradiance.
    #[must_use]
    pub fn with_azimuth(mut self, degrees: f64) -> Self {
        self.azimuth = Some(degrees);
        self
    }

    pub(crate) fn build_url(&self, base_url: &str, api_key: Option<&str>) -> String {
        let mut params = QueryString::new();

        params.push("latitude", format_float(self.location.latitude));
        params.push("longitude", format_float(self.location.longitude));
        if let Some(elevation) = self.location.elevation {
            params.push("elevation", format_float(elevation));
        }

        // Always emitted: the range is mandatory for archive queries.
        params.push("start_date", self.start_date.clone());
        params.push("end_date", self.end_date.clone());

        if !self.hourly.is_empty() {
            params.push("hourly", join_sorted(self.hourly.iter().map(|m| m.as_str())));
        }
        if !self.daily.is_empty() {
            params.push("daily", join_sorted(self.daily.iter().map(|m| m.as_str())));
        }

        if let Some(unit) = self.temperature_unit {
            params.push("temperature_unit", unit.as_str());
        }
        if let Some(unit) = self.wind_speed_unit {
            params.push("wind_speed_unit", unit.as_str());
        }
        if let Some(unit) = self.precipitation_unit {
            params.push("precipitation_unit", unit.as_str());
        }

        if let Some(timezone) = &self.timezone {
            params.push("timezone", timezone.clone());
        }
        if let Some(selection) = self.cell_selection {
            params.push("cell_selection", selection.as_str());
        }

        if let Some(tilt) = self.tilt {
            params.push("tilt", format_float(tilt));
        }
        if let Some(azimuth) = self.azimuth {
            params.push("azimuth", format_float(azimuth));
        }

        if let Some(key) = api_key {
            params.push("apikey", key);
        }

        format!("{base_url}?{}", params.encode())
    }
}

/// Ordered query parameter list with percent-encoded values.
struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Shortest round-trippable decimal representation, no trailing zeros.
fn format_float(value: f64) -> String {
    format!("{value}")
}

fn join_sorted<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.collect();
    names.sort_unstable();
    names.dedup();
    names.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn forecast_url_basic() {
        let request = ForecastRequest::new(52.52, 13.41)
            .unwrap()
            .with_hourly([HourlyMetric::Temperature2m, HourlyMetric::Precipitation])
            .with_daily([DailyMetric::Temperature2mMax])
            .with_temperature_unit(TemperatureUnit::Celsius)
            .with_timezone("Europe/Berlin")
            .with_forecast_days(7);

        let url = request.build_url("https://api.open-meteo.com/v1/forecast", None);

        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?"));
        assert_eq!(param(&url, "latitude"), Some("52.52"));
        assert_eq!(param(&url, "longitude"), Some("13.41"));
        // Sorted regardless of insertion order.
        assert_eq!(param(&url, "hourly"), Some("precipitation%2Ctemperature_2m"));
        assert_eq!(param(&url, "daily"), Some("temperature_2m_max"));
        assert_eq!(param(&url, "temperature_unit"), Some("celsius"));
        assert_eq!(param(&url, "timezone"), Some("Europe%2FBerlin"));
        assert_eq!(param(&url, "forecast_days"), Some("7"));
        assert_eq!(param(&url, "apikey"), None);
    }

    #[test]
    fn forecast_url_all_options() {
        let request = ForecastRequest::new(40.7128, -74.0060)
            .unwrap()
            .with_hourly([HourlyMetric::Temperature2m])
            .with_daily([DailyMetric::Sunrise, DailyMetric::Sunset])
            .with_current([CurrentMetric::Temperature2m, CurrentMetric::WeatherCode])
            .with_minutely_15([Minutely15Metric::Precipitation])
            .with_temperature_unit(TemperatureUnit::Fahrenheit)
            .with_wind_speed_unit(WindSpeedUnit::MilesPerHour)
            .with_precipitation_unit(PrecipitationUnit::Inches)
            .with_timezone("America/New_York")
            .with_forecast_days(14)
            .with_past_days(2)
            .with_cell_selection(CellSelection::Nearest)
            .with_tilt(45.0)
            .with_azimuth(180.0);

        let url = request.build_url("https://api.open-meteo.com/v1/forecast", None);

        assert_eq!(param(&url, "latitude"), Some("40.7128"));
        assert_eq!(param(&url, "longitude"), Some("-74.006"));
        assert_eq!(param(&url, "hourly"), Some("temperature_2m"));
        assert_eq!(param(&url, "daily"), Some("sunrise%2Csunset"));
        assert_eq!(param(&url, "current"), Some("temperature_2m%2Cweather_code"));
        assert_eq!(param(&url, "minutely_15"), Some("precipitation"));
        assert_eq!(param(&url, "temperature_unit"), Some("fahrenheit"));
        assert_eq!(param(&url, "wind_speed_unit"), Some("mph"));
        assert_eq!(param(&url, "precipitation_unit"), Some("inch"));
        assert_eq!(param(&url, "forecast_days"), Some("14"));
        assert_eq!(param(&url, "past_days"), Some("2"));
        assert_eq!(param(&url, "cell_selection"), Some("nearest"));
        assert_eq!(param(&url, "tilt"), Some("45"));
        assert_eq!(param(&url, "azimuth"), Some("180"));
    }

    #[test]
    fn metric_sets_are_deduplicated_and_sorted() {
        let request = ForecastRequest::new(52.52, 13.41)
            .unwrap()
            .with_hourly([HourlyMetric::Temperature2m, HourlyMetric::Precipitation])
            .with_hourly([HourlyMetric::Temperature2m])
            .with_hourly([HourlyMetric::WindSpeed10m, HourlyMetric::Precipitation]);

        let url = request.build_url("https://api.open-meteo.com/v1/forecast", None);
        assert_eq!(
            param(&url, "hourly"),
            Some("precipitation%2Ctemperature_2m%2Cwind_speed_10m")
        );
    }

    #[test]
    fn models_keep_insertion_order_and_duplicates() {
        let request = ForecastRequest::new(52.52, 13.41)
            .unwrap()
            .with_models(["icon_seamless", "gfs_seamless", "icon_seamless"]);

        let url = request.build_url("https://api.open-meteo.com/v1/forecast", None);
        assert_eq!(
            param(&url, "models"),
            Some("icon_seamless%2Cgfs_seamless%2Cicon_seamless")
        );
    }

    #[test]
    fn float_formatting_is_shortest_round_trip() {
        assert_eq!(format_float(52.52), "52.52");
        assert_eq!(format_float(-74.0060), "-74.006");
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(45.0), "45");
    }

    #[test]
    fn elevation_emitted_only_when_set() {
        let plain = ForecastRequest::new(52.52, 13.41).unwrap();
        let url = plain.build_url("https://api.open-meteo.com/v1/forecast", None);
        assert_eq!(param(&url, "elevation"), None);

        let raised = ForecastRequest::new(52.52, 13.41)
            .unwrap()
            .with_location(Location::new(52.52, 13.41).unwrap().with_elevation(100.5));
        let url = raised.build_url("https://api.open-meteo.com/v1/forecast", None);
        assert_eq!(param(&url, "elevation"), Some("100.5"));
    }

    #[test]
    fn api_key_is_last_parameter() {
        let request = ForecastRequest::new(52.52, 13.41)
            .unwrap()
            .with_hourly([HourlyMetric::Temperature2m]);

        let url = request.build_url("https://api.open-meteo.com/v1/forecast", Some("test-key"));
        assert_eq!(param(&url, "apikey"), Some("test-key"));
        assert!(url.ends_with("apikey=test-key"));
    }

    #[test]
    fn historical_url_always_emits_date_range() {
        let request = HistoricalRequest::new(52.52, 13.41, "2023-01-01", "2023-01-31")
            .unwrap()
            .with_hourly([HourlyMetric::Precipitation, HourlyMetric::Temperature2m])
            .with_daily([
                DailyMetric::Temperature2mMax,
                DailyMetric::Temperature2mMin,
            ])
            .with_timezone("Europe/Berlin");

        let url = request.build_url("https://archive-api.open-meteo.com/v1/archive", None);

        assert_eq!(param(&url, "start_date"), Some("2023-01-01"));
        assert_eq!(param(&url, "end_date"), Some("2023-01-31"));
        assert_eq!(param(&url, "hourly"), Some("precipitation%2Ctemperature_2m"));
        assert_eq!(
            param(&url, "daily"),
            Some("temperature_2m_max%2Ctemperature_2m_min")
        );
        assert_eq!(param(&url, "timezone"), Some("Europe%2FBerlin"));
    }

    #[test]
    fn historical_requires_date_range() {
        let err = HistoricalRequest::new(52.52, 13.41, "", "2023-01-31").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("start_date"));

        let err = HistoricalRequest::new(52.52, 13.41, "2023-01-01", "").unwrap_err();
        assert!(err.to_string().contains("end_date"));

        assert!(HistoricalRequest::new(52.52, 13.41, "2023-01-01", "2023-01-31").is_ok());
    }

    #[test]
    fn historical_url_carries_api_key_last() {
        let request = HistoricalRequest::new(52.52, 13.41, "2023-01-01", "2023-01-31").unwrap();
        let url = request.build_url(
            "https://archive-api.open-meteo.com/v1/archive",
            Some("test-key"),
        );
        assert!(url.ends_with("apikey=test-key"));
    }
}
