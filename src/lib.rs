//! Async client for the [Open-Meteo](https://open-meteo.com) forecast and
//! historical weather APIs.
//!
//! Requests are assembled with fluent builders, serialized to deterministic
//! URLs, and decoded into typed structures whose timestamps carry the
//! reporting timezone.
//!
//! ```no_run
//! use open_meteo_client::{Client, ForecastRequest, HourlyMetric};
//!
//! # async fn run() -> open_meteo_client::Result<()> {
//! let client = Client::new();
//! let request = ForecastRequest::new(52.52, 13.41)?
//!     .with_hourly([HourlyMetric::Temperature2m, HourlyMetric::Precipitation])
//!     .with_timezone("Europe/Berlin");
//!
//! let weather = client.forecast(&request).await?;
//! if let Some(hourly) = weather.hourly {
//!     for (time, temp) in hourly
//!         .time
//!         .iter()
//!         .zip(hourly.series.temperature_2m.unwrap_or_default())
//!     {
//!         println!("{time}: {temp} °C");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod location;
mod metrics;
mod parse;
mod request;
mod time;
mod units;
mod weather;
mod weather_code;

pub use client::{
    Client, DEFAULT_USER_AGENT, FORECAST_BASE_URL, HISTORICAL_BASE_URL, ReqwestTransport,
    Transport, TransportResponse,
};
pub use error::{Error, Result};
pub use location::Location;
pub use metrics::{CurrentMetric, DailyMetric, HourlyMetric, Minutely15Metric};
pub use request::{ForecastRequest, HistoricalRequest};
pub use units::{
    BaseUnits, CellSelection, CurrentUnits, DailyUnits, HourlyUnits, Minutely15Units,
    PrecipitationUnit, TemperatureUnit, WindSpeedUnit,
};
pub use weather::{BaseSeries, CurrentData, DailyData, HourlyData, Minutely15Data, Weather};
pub use weather_code::WeatherCode;
