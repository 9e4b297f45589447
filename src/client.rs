//! HTTP client with a pluggable transport.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::parse::parse_weather_response;
use crate::request::{ForecastRequest, HistoricalRequest};
use crate::weather::Weather;

/// Default endpoint for forecast requests.
pub const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
/// Default endpoint for historical (archive) requests.
pub const HISTORICAL_BASE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str =
    concat!("open-meteo-client/", env!("CARGO_PKG_VERSION"));

/// Raw response produced by a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Abstraction over the HTTP layer, so tests can substitute canned
/// responses and applications can reuse their own HTTP stack.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, user_agent: &str) -> Result<TransportResponse>;
}

/// Default [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing client to share its connection pool and settings.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, user_agent: &str) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(TransportResponse { status, body })
    }
}

/// Client for the Open-Meteo forecast and historical APIs.
///
/// Cheap to clone; the underlying transport is shared.
#[derive(Clone)]
pub struct Client {
    forecast_url: String,
    historical_url: String,
    user_agent: String,
    api_key: Option<String>,
    transport: Arc<dyn Transport>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Create a client against the public API endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            forecast_url: FORECAST_BASE_URL.to_owned(),
            historical_url: HISTORICAL_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            api_key: None,
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// Override the forecast endpoint, e.g. for the customer API or a
    /// self-hosted instance.
    #[must_use]
    pub fn with_forecast_url(mut self, url: impl Into<String>) -> Self {
        self.forecast_url = url.into();
        self
    }

    /// Override the historical endpoint.
    #[must_use]
    pub fn with_historical_url(mut self, url: impl Into<String>) -> Self {
        self.historical_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Attach a commercial API key, appended as the `apikey` parameter.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Substitute the HTTP transport.
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Fetch a weather forecast.
    pub async fn forecast(&self, request: &ForecastRequest) -> Result<Weather> {
        let url = request.build_url(&self.forecast_url, self.api_key.as_deref());
        self.fetch(&url).await
    }

    /// Fetch historical weather data.
    pub async fn historical(&self, request: &HistoricalRequest) -> Result<Weather> {
        let url = request.build_url(&self.historical_url, self.api_key.as_deref());
        self.fetch(&url).await
    }

    async fn fetch(&self, url: &str) -> Result<Weather> {
        debug!(url, "requesting weather data");
        let response = self.transport.get(url, &self.user_agent).await?;
        if response.status != 200 {
            return Err(api_error(response.status, &response.body));
        }
        parse_weather_response(&response.body)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("forecast_url", &self.forecast_url)
            .field("historical_url", &self.historical_url)
            .field("user_agent", &self.user_agent)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: String,
}

/// Build an [`Error::Api`] from a non-200 response. The API reports errors
/// as `{"error": true, "reason": "..."}`; anything else is passed through
/// as raw text.
fn api_error(status: u16, body: &[u8]) -> Error {
    let reason = match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) if parsed.error => parsed.reason,
        _ => String::from_utf8_lossy(body).into_owned(),
    };
    Error::Api {
        status_code: status,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::metrics::HourlyMetric;

    use super::*;

    struct MockTransport {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl MockTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(&self, url: &str, user_agent: &str) -> Result<TransportResponse> {
            self.seen
                .lock()
                .unwrap()
                .push((url.to_owned(), user_agent.to_owned()));
            Ok(TransportResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    const OK_BODY: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.41,
        "elevation": 38.0,
        "generationtime_ms": 0.25,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Berlin",
        "timezone_abbreviation": "CET",
        "hourly": {
            "time": ["2024-01-15T00:00", "2024-01-15T01:00"],
            "temperature_2m": [2.5, 2.1]
        }
    }"#;

    fn request() -> ForecastRequest {
        ForecastRequest::new(52.52, 13.41)
            .unwrap()
            .with_hourly([HourlyMetric::Temperature2m])
    }

    #[tokio::test]
    async fn forecast_happy_path() {
        let client = Client::new().with_transport(MockTransport::new(200, OK_BODY));
        let weather = client.forecast(&request()).await.unwrap();

        assert_eq!(weather.timezone, "Europe/Berlin");
        let hourly = weather.hourly.unwrap();
        assert_eq!(hourly.time.len(), 2);
        assert_eq!(hourly.series.temperature_2m, Some(vec![2.5, 2.1]));
    }

    #[tokio::test]
    async fn structured_api_error_carries_reason() {
        let client = Client::new().with_transport(MockTransport::new(
            400,
            r#"{"error": true, "reason": "Latitude must be in range of -90 to 90°."}"#,
        ));
        let err = client.forecast(&request()).await.unwrap_err();

        match err {
            Error::Api {
                status_code,
                reason,
            } => {
                assert_eq!(status_code, 400);
                assert_eq!(reason, "Latitude must be in range of -90 to 90°.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_passed_through() {
        let client =
            Client::new().with_transport(MockTransport::new(502, "Bad Gateway"));
        let err = client.forecast(&request()).await.unwrap_err();

        match err {
            Error::Api {
                status_code,
                reason,
            } => {
                assert_eq!(status_code, 502);
                assert_eq!(reason, "Bad Gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn user_agent_and_api_key_are_sent() {
        let transport = Arc::new(MockTransport::new(200, OK_BODY));
        let client = Client {
            forecast_url: FORECAST_BASE_URL.to_owned(),
            historical_url: HISTORICAL_BASE_URL.to_owned(),
            user_agent: "weather-widget/2.0".to_owned(),
            api_key: Some("secret".to_owned()),
            transport: transport.clone(),
        };

        client.forecast(&request()).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        let (url, user_agent) = &seen[0];
        assert!(url.ends_with("apikey=secret"));
        assert_eq!(user_agent, "weather-widget/2.0");
    }

    #[tokio::test]
    async fn historical_uses_archive_endpoint() {
        let transport = Arc::new(MockTransport::new(200, OK_BODY));
        let client = Client {
            forecast_url: FORECAST_BASE_URL.to_owned(),
            historical_url: "https://example.test/v1/archive".to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            api_key: None,
            transport: transport.clone(),
        };

        let request =
            HistoricalRequest::new(52.52, 13.41, "2023-01-01", "2023-01-31").unwrap();
        client.historical(&request).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert!(seen[0].0.starts_with("https://example.test/v1/archive?"));
    }
}
