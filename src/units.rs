//! Output unit selection and per-response unit description blocks

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit for temperature values. The API defaults to celsius when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

/// Unit for wind speed values. The API defaults to km/h when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindSpeedUnit {
    KilometersPerHour,
    MetersPerSecond,
    MilesPerHour,
    Knots,
}

impl WindSpeedUnit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KilometersPerHour => "kmh",
            Self::MetersPerSecond => "ms",
            Self::MilesPerHour => "mph",
            Self::Knots => "kn",
        }
    }
}

/// Unit for precipitation values. The API defaults to millimeters when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationUnit {
    Millimeters,
    Inches,
}

impl PrecipitationUnit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Inches => "inch",
        }
    }
}

/// Grid-cell selection preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSelection {
    Land,
    Sea,
    Nearest,
}

impl CellSelection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Sea => "sea",
            Self::Nearest => "nearest",
        }
    }
}

macro_rules! display_as_str {
    ($($name:ident),+) => {
        $(impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(TemperatureUnit, WindSpeedUnit, PrecipitationUnit, CellSelection);

/// Unit strings for metrics shared between hourly and 15-minutely blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseUnits {
    pub temperature_2m: Option<String>,
    pub relative_humidity_2m: Option<String>,
    pub dew_point_2m: Option<String>,
    pub apparent_temperature: Option<String>,
    pub precipitation: Option<String>,
    pub rain: Option<String>,
    pub snowfall: Option<String>,
    pub weather_code: Option<String>,
    pub cloud_cover: Option<String>,
    pub cloud_cover_low: Option<String>,
    pub cloud_cover_mid: Option<String>,
    pub cloud_cover_high: Option<String>,
    pub wind_speed_10m: Option<String>,
    pub wind_speed_80m: Option<String>,
    pub wind_direction_10m: Option<String>,
    pub wind_direction_80m: Option<String>,
    pub wind_gusts_10m: Option<String>,
    pub shortwave_radiation: Option<String>,
    pub direct_radiation: Option<String>,
    pub direct_normal_irradiance: Option<String>,
    pub diffuse_radiation: Option<String>,
    pub global_tilted_irradiance: Option<String>,
    pub visibility: Option<String>,
    pub evapotranspiration: Option<String>,
    pub et0_fao_evapotranspiration: Option<String>,
    pub vapour_pressure_deficit: Option<String>,
    pub cape: Option<String>,
    pub freezing_level_height: Option<String>,
    pub sunshine_duration: Option<String>,
}

/// Unit strings for hourly metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyUnits {
    #[serde(flatten)]
    pub base: BaseUnits,

    pub pressure_msl: Option<String>,
    pub surface_pressure: Option<String>,

    pub wind_speed_120m: Option<String>,
    pub wind_speed_180m: Option<String>,
    pub wind_direction_120m: Option<String>,
    pub wind_direction_180m: Option<String>,

    pub snow_depth: Option<String>,
    pub precipitation_probability: Option<String>,
    pub showers: Option<String>,
    pub is_day: Option<String>,

    pub soil_temperature_0cm: Option<String>,
    pub soil_temperature_6cm: Option<String>,
    pub soil_temperature_18cm: Option<String>,
    pub soil_temperature_54cm: Option<String>,
    pub soil_moisture_0_to_1cm: Option<String>,
    pub soil_moisture_1_to_3cm: Option<String>,
    pub soil_moisture_3_to_9cm: Option<String>,
    pub soil_moisture_9_to_27cm: Option<String>,
    pub soil_moisture_27_to_81cm: Option<String>,
}

/// Unit strings for 15-minutely metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Minutely15Units {
    #[serde(flatten)]
    pub base: BaseUnits,

    pub lightning_potential: Option<String>,
    pub snowfall_height: Option<String>,
}

/// Unit strings for daily metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyUnits {
    pub weather_code: Option<String>,
    pub temperature_2m_max: Option<String>,
    pub temperature_2m_min: Option<String>,
    pub temperature_2m_mean: Option<String>,
    pub apparent_temperature_max: Option<String>,
    pub apparent_temperature_min: Option<String>,
    pub apparent_temperature_mean: Option<String>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub sunshine_duration: Option<String>,
    pub daylight_duration: Option<String>,
    pub precipitation_sum: Option<String>,
    pub rain_sum: Option<String>,
    pub showers_sum: Option<String>,
    pub snowfall_sum: Option<String>,
    pub precipitation_hours: Option<String>,
    pub precipitation_probability_max: Option<String>,
    pub precipitation_probability_min: Option<String>,
    pub precipitation_probability_mean: Option<String>,
    pub wind_speed_10m_max: Option<String>,
    pub wind_gusts_10m_max: Option<String>,
    pub wind_direction_10m_dominant: Option<String>,
    pub shortwave_radiation_sum: Option<String>,
    pub et0_fao_evapotranspiration: Option<String>,
    pub uv_index_max: Option<String>,
    pub uv_index_clear_sky_max: Option<String>,
}

/// Unit strings for current weather metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUnits {
    pub time: Option<String>,
    pub interval: Option<String>,
    pub temperature_2m: Option<String>,
    pub relative_humidity_2m: Option<String>,
    pub apparent_temperature: Option<String>,
    pub is_day: Option<String>,
    pub precipitation: Option<String>,
    pub rain: Option<String>,
    pub showers: Option<String>,
    pub snowfall: Option<String>,
    pub weather_code: Option<String>,
    pub cloud_cover: Option<String>,
    pub pressure_msl: Option<String>,
    pub surface_pressure: Option<String>,
    pub wind_speed_10m: Option<String>,
    pub wind_direction_10m: Option<String>,
    pub wind_gusts_10m: Option<String>,
}
