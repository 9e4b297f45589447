//! Two-pass response decoding.
//!
//! The wire format mixes a string-typed `time` array with numeric metric
//! arrays inside each granularity object, so a single typed decode would
//! lose the timestamps. Pass 1 splits off each granularity key as an opaque
//! fragment and resolves the reporting timezone; pass 2 decodes every
//! fragment twice, once for the raw time strings and once for the typed
//! metric arrays, then overwrites the block's timestamps with the
//! zone-corrected values.

use serde::Deserialize;
use serde_json::value::RawValue;

use chrono_tz::Tz;
use tracing::warn;

use crate::error::{Error, Result};
use crate::time::{parse_date_array, parse_datetime, parse_datetime_array};
use crate::units::{CurrentUnits, DailyUnits, HourlyUnits, Minutely15Units};
use crate::weather::{CurrentData, DailyData, HourlyData, Minutely15Data, Weather};

/// Pass-1 decode target: scalar metadata plus opaque granularity fragments.
#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
    #[serde(default)]
    elevation: f64,
    #[serde(default)]
    timezone: String,
    #[serde(default)]
    timezone_abbreviation: String,
    #[serde(default)]
    utc_offset_seconds: i32,
    #[serde(default, rename = "generationtime_ms")]
    generation_time_ms: f64,

    current: Option<Box<RawValue>>,
    current_units: Option<CurrentUnits>,

    hourly: Option<Box<RawValue>>,
    hourly_units: Option<HourlyUnits>,

    minutely_15: Option<Box<RawValue>>,
    minutely_15_units: Option<Minutely15Units>,

    daily: Option<Box<RawValue>>,
    daily_units: Option<DailyUnits>,
}

/// Parse a 200-status response body into a [`Weather`] result.
pub(crate) fn parse_weather_response(body: &[u8]) -> Result<Weather> {
    let raw: RawResponse =
        serde_json::from_slice(body).map_err(|e| Error::decode("response", e))?;

    let tz = resolve_timezone(&raw.timezone);

    let current = raw
        .current
        .as_deref()
        .map(|fragment| parse_current(fragment, tz))
        .transpose()?;
    let hourly = raw
        .hourly
        .as_deref()
        .map(|fragment| parse_hourly(fragment, tz))
        .transpose()?;
    let minutely_15 = raw
        .minutely_15
        .as_deref()
        .map(|fragment| parse_minutely_15(fragment, tz))
        .transpose()?;
    let daily = raw
        .daily
        .as_deref()
        .map(|fragment| parse_daily(fragment, tz))
        .transpose()?;

    Ok(Weather {
        latitude: raw.latitude,
        longitude: raw.longitude,
        elevation: raw.elevation,
        timezone: raw.timezone,
        timezone_abbreviation: raw.timezone_abbreviation,
        utc_offset_seconds: raw.utc_offset_seconds,
        generation_time_ms: raw.generation_time_ms,
        current,
        current_units: raw.current_units,
        hourly,
        hourly_units: raw.hourly_units,
        minutely_15,
        minutely_15_units: raw.minutely_15_units,
        daily,
        daily_units: raw.daily_units,
    })
}

/// Resolve the reported timezone name, degrading to UTC when the name is
/// absent or not a known IANA identifier.
fn resolve_timezone(name: &str) -> Tz {
    if name.is_empty() {
        return Tz::UTC;
    }
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!(timezone = name, "unrecognized timezone, falling back to UTC");
            Tz::UTC
        }
    }
}

fn parse_current(fragment: &RawValue, tz: Tz) -> Result<CurrentData> {
    #[derive(Deserialize)]
    struct TimeOnly {
        #[serde(default)]
        time: String,
    }

    let raw_time: TimeOnly =
        serde_json::from_str(fragment.get()).map_err(|e| Error::decode("current", e))?;
    let mut current: CurrentData =
        serde_json::from_str(fragment.get()).map_err(|e| Error::decode("current", e))?;

    current.time = parse_datetime(&raw_time.time, tz, "current.time", 0)?;
    Ok(current)
}

fn parse_hourly(fragment: &RawValue, tz: Tz) -> Result<HourlyData> {
    #[derive(Deserialize)]
    struct TimeOnly {
        #[serde(default)]
        time: Vec<String>,
    }

    let raw_time: TimeOnly =
        serde_json::from_str(fragment.get()).map_err(|e| Error::decode("hourly", e))?;
    let mut hourly: HourlyData =
        serde_json::from_str(fragment.get()).map_err(|e| Error::decode("hourly", e))?;

    hourly.time = parse_datetime_array(&raw_time.time, tz, "hourly.time")?;
    Ok(hourly)
}

fn parse_minutely_15(fragment: &RawValue, tz: Tz) -> Result<Minutely15Data> {
    #[derive(Deserialize)]
    struct TimeOnly {
        #[serde(default)]
        time: Vec<String>,
    }

    let raw_time: TimeOnly =
        serde_json::from_str(fragment.get()).map_err(|e| Error::decode("minutely_15", e))?;
    let mut minutely_15: Minutely15Data =
        serde_json::from_str(fragment.get()).map_err(|e| Error::decode("minutely_15", e))?;

    minutely_15.time = parse_datetime_array(&raw_time.time, tz, "minutely_15.time")?;
    Ok(minutely_15)
}

fn parse_daily(fragment: &RawValue, tz: Tz) -> Result<DailyData> {
    // Daily needs the sun times as well: they use the datetime layout even
    // though the primary index is date-only.
    #[derive(Deserialize)]
    struct TimeAndSun {
        #[serde(default)]
        time: Vec<String>,
        #[serde(default)]
        sunrise: Vec<String>,
        #[serde(default)]
        sunset: Vec<String>,
    }

    let raw_time: TimeAndSun =
        serde_json::from_str(fragment.get()).map_err(|e| Error::decode("daily", e))?;
    let mut daily: DailyData =
        serde_json::from_str(fragment.get()).map_err(|e| Error::decode("daily", e))?;

    daily.time = parse_date_array(&raw_time.time, tz, "daily.time")?;
    daily.sunrise = parse_datetime_array(&raw_time.sunrise, tz, "daily.sunrise")?;
    daily.sunset = parse_datetime_array(&raw_time.sunset, tz, "daily.sunset")?;
    Ok(daily)
}
