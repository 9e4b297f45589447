//! Typed weather response model.
//!
//! A granularity block is present if and only if the API returned the
//! corresponding JSON key; within one block, index `i` of every metric
//! array refers to the same point in time as `time[i]`.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::units::{CurrentUnits, DailyUnits, HourlyUnits, Minutely15Units};
use crate::weather_code::WeatherCode;

/// Response from the forecast and historical APIs.
#[derive(Debug, Clone, Serialize)]
pub struct Weather {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,

    /// IANA timezone name as reported by the API, e.g. `Europe/Berlin`.
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub utc_offset_seconds: i32,

    /// Server-side generation time in milliseconds.
    pub generation_time_ms: f64,

    pub current: Option<CurrentData>,
    pub current_units: Option<CurrentUnits>,

    pub hourly: Option<HourlyData>,
    pub hourly_units: Option<HourlyUnits>,

    pub minutely_15: Option<Minutely15Data>,
    pub minutely_15_units: Option<Minutely15Units>,

    pub daily: Option<DailyData>,
    pub daily_units: Option<DailyUnits>,
}

/// Metric series shared between hourly and 15-minutely blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseSeries {
    pub temperature_2m: Option<Vec<f64>>,
    pub relative_humidity_2m: Option<Vec<f64>>,
    pub dew_point_2m: Option<Vec<f64>>,
    pub apparent_temperature: Option<Vec<f64>>,

    pub precipitation: Option<Vec<f64>>,
    pub rain: Option<Vec<f64>>,
    pub snowfall: Option<Vec<f64>>,

    pub weather_code: Option<Vec<WeatherCode>>,

    pub cloud_cover: Option<Vec<f64>>,
    pub cloud_cover_low: Option<Vec<f64>>,
    pub cloud_cover_mid: Option<Vec<f64>>,
    pub cloud_cover_high: Option<Vec<f64>>,

    pub wind_speed_10m: Option<Vec<f64>>,
    pub wind_speed_80m: Option<Vec<f64>>,
    pub wind_direction_10m: Option<Vec<f64>>,
    pub wind_direction_80m: Option<Vec<f64>>,
    pub wind_gusts_10m: Option<Vec<f64>>,

    pub shortwave_radiation: Option<Vec<f64>>,
    pub direct_radiation: Option<Vec<f64>>,
    pub direct_normal_irradiance: Option<Vec<f64>>,
    pub diffuse_radiation: Option<Vec<f64>>,
    pub global_tilted_irradiance: Option<Vec<f64>>,

    pub visibility: Option<Vec<f64>>,
    pub evapotranspiration: Option<Vec<f64>>,
    pub et0_fao_evapotranspiration: Option<Vec<f64>>,
    pub vapour_pressure_deficit: Option<Vec<f64>>,
    pub cape: Option<Vec<f64>>,
    pub freezing_level_height: Option<Vec<f64>>,
    pub sunshine_duration: Option<Vec<f64>>,
}

/// Hourly weather data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyData {
    /// Timestamps for each data point, reconstructed in the reporting
    /// timezone.
    #[serde(skip_deserializing)]
    pub time: Vec<DateTime<Tz>>,

    #[serde(flatten)]
    pub series: BaseSeries,

    pub pressure_msl: Option<Vec<f64>>,
    pub surface_pressure: Option<Vec<f64>>,

    pub wind_speed_120m: Option<Vec<f64>>,
    pub wind_speed_180m: Option<Vec<f64>>,
    pub wind_direction_120m: Option<Vec<f64>>,
    pub wind_direction_180m: Option<Vec<f64>>,

    pub snow_depth: Option<Vec<f64>>,
    pub precipitation_probability: Option<Vec<f64>>,
    pub showers: Option<Vec<f64>>,

    /// 1 = day, 0 = night
    pub is_day: Option<Vec<u8>>,

    pub soil_temperature_0cm: Option<Vec<f64>>,
    pub soil_temperature_6cm: Option<Vec<f64>>,
    pub soil_temperature_18cm: Option<Vec<f64>>,
    pub soil_temperature_54cm: Option<Vec<f64>>,
    pub soil_moisture_0_to_1cm: Option<Vec<f64>>,
    pub soil_moisture_1_to_3cm: Option<Vec<f64>>,
    pub soil_moisture_3_to_9cm: Option<Vec<f64>>,
    pub soil_moisture_9_to_27cm: Option<Vec<f64>>,
    pub soil_moisture_27_to_81cm: Option<Vec<f64>>,
}

/// 15-minutely weather data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Minutely15Data {
    /// Timestamps for each data point, reconstructed in the reporting
    /// timezone.
    #[serde(skip_deserializing)]
    pub time: Vec<DateTime<Tz>>,

    #[serde(flatten)]
    pub series: BaseSeries,

    pub lightning_potential: Option<Vec<f64>>,
    pub snowfall_height: Option<Vec<f64>>,
    pub showers: Option<Vec<f64>>,
    pub global_tilted_irradiance_instant: Option<Vec<f64>>,
}

/// Daily aggregated weather data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyData {
    /// One timestamp per day, at local midnight.
    #[serde(skip_deserializing)]
    pub time: Vec<DateTime<Tz>>,

    pub weather_code: Option<Vec<WeatherCode>>,

    pub temperature_2m_max: Option<Vec<f64>>,
    pub temperature_2m_min: Option<Vec<f64>>,
    pub temperature_2m_mean: Option<Vec<f64>>,

    pub apparent_temperature_max: Option<Vec<f64>>,
    pub apparent_temperature_min: Option<Vec<f64>>,
    pub apparent_temperature_mean: Option<Vec<f64>>,

    /// Sun times carry minute precision, unlike the date-only time index.
    #[serde(skip_deserializing)]
    pub sunrise: Vec<DateTime<Tz>>,
    #[serde(skip_deserializing)]
    pub sunset: Vec<DateTime<Tz>>,

    pub sunshine_duration: Option<Vec<f64>>,
    pub daylight_duration: Option<Vec<f64>>,

    pub precipitation_sum: Option<Vec<f64>>,
    pub rain_sum: Option<Vec<f64>>,
    pub showers_sum: Option<Vec<f64>>,
    pub snowfall_sum: Option<Vec<f64>>,
    pub precipitation_hours: Option<Vec<f64>>,

    pub precipitation_probability_max: Option<Vec<f64>>,
    pub precipitation_probability_min: Option<Vec<f64>>,
    pub precipitation_probability_mean: Option<Vec<f64>>,

    pub wind_speed_10m_max: Option<Vec<f64>>,
    pub wind_gusts_10m_max: Option<Vec<f64>>,
    pub wind_direction_10m_dominant: Option<Vec<f64>>,

    pub shortwave_radiation_sum: Option<Vec<f64>>,
    pub et0_fao_evapotranspiration: Option<Vec<f64>>,

    pub uv_index_max: Option<Vec<f64>>,
    pub uv_index_clear_sky_max: Option<Vec<f64>>,
}

/// Current weather conditions. Each metric is present only when it was
/// requested and returned; absence is never conflated with zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentData {
    /// Observation time in the reporting timezone.
    #[serde(skip_deserializing, default = "unix_epoch")]
    pub time: DateTime<Tz>,

    /// Aggregation interval in seconds.
    pub interval: Option<i64>,

    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub is_day: Option<u8>,
    pub precipitation: Option<f64>,
    pub rain: Option<f64>,
    pub showers: Option<f64>,
    pub snowfall: Option<f64>,
    pub weather_code: Option<WeatherCode>,
    pub cloud_cover: Option<f64>,
    pub pressure_msl: Option<f64>,
    pub surface_pressure: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub wind_gusts_10m: Option<f64>,
}

impl CurrentData {
    /// Whether it is currently daytime at the location.
    #[must_use]
    pub fn is_daytime(&self) -> bool {
        self.is_day == Some(1)
    }
}

fn unix_epoch() -> DateTime<Tz> {
    DateTime::UNIX_EPOCH.with_timezone(&Tz::UTC)
}
