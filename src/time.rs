//! Timestamp parsing for the API's wall-clock time formats.
//!
//! The API reports times already local to the requested location, so naive
//! parsed components are attached directly to the resolved timezone instead
//! of being reinterpreted from UTC.

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Layout for hourly/minutely timestamps and daily sunrise/sunset.
pub(crate) const DATETIME_LAYOUT: &str = "%Y-%m-%dT%H:%M";
/// Layout for the daily primary time index.
pub(crate) const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DDTHH:mm` string as wall-clock time in `tz`.
pub(crate) fn parse_datetime(
    value: &str,
    tz: Tz,
    field: &'static str,
    index: usize,
) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(value, DATETIME_LAYOUT)
        .map_err(|e| Error::timestamp(field, index, format!("{value:?}: {e}")))?;
    attach_zone(naive, tz, field, index)
}

/// Parse a `YYYY-MM-DD` string as midnight wall-clock time in `tz`.
pub(crate) fn parse_date(
    value: &str,
    tz: Tz,
    field: &'static str,
    index: usize,
) -> Result<DateTime<Tz>> {
    let date = NaiveDate::parse_from_str(value, DATE_LAYOUT)
        .map_err(|e| Error::timestamp(field, index, format!("{value:?}: {e}")))?;
    attach_zone(date.and_time(NaiveTime::MIN), tz, field, index)
}

pub(crate) fn parse_datetime_array(
    values: &[String],
    tz: Tz,
    field: &'static str,
) -> Result<Vec<DateTime<Tz>>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| parse_datetime(v, tz, field, i))
        .collect()
}

pub(crate) fn parse_date_array(
    values: &[String],
    tz: Tz,
    field: &'static str,
) -> Result<Vec<DateTime<Tz>>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| parse_date(v, tz, field, i))
        .collect()
}

/// Attach a naive local time to `tz`. Ambiguous times (DST fall-back) take
/// the earliest offset; times inside a DST gap do not exist and error.
fn attach_zone(
    naive: NaiveDateTime,
    tz: Tz,
    field: &'static str,
    index: usize,
) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(t) => Ok(t),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(Error::timestamp(
            field,
            index,
            format!("{naive} does not exist in timezone {tz}"),
        )),
    }
}
