//! OpenWeatherMap client
//!
//! Uses two endpoints of the free tier:
//! - `/geo/1.0/direct` resolves a city name to coordinates
//! - `/data/2.5/air_pollution` returns current concentrations at a point
//!
//! Both take the API key as the `appid` query parameter.

use super::{Geocoder, PollutionSource};
use crate::error::AirqError;
use crate::model::{CurrentPollution, Location, PollutantReading};
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenWeatherMap connection settings.
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    pub api_key: String,
    /// Scheme and host, without a trailing path.
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    pub fn new(api_key: &str) -> Self {
        OpenWeatherConfig {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `OPENWEATHER_API_KEY` and optionally `OPENWEATHER_BASE_URL`.
    pub fn from_env() -> Result<Self, AirqError> {
        let api_key = std::env::var("OPENWEATHER_API_KEY").map_err(|_| AirqError::MissingApiKey)?;
        let mut config = Self::new(&api_key);
        if let Ok(base_url) = std::env::var("OPENWEATHER_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Client for the OpenWeatherMap geocoding and air pollution APIs.
pub struct OpenWeatherClient {
    config: OpenWeatherConfig,
    http_client: reqwest::Client,
}

impl OpenWeatherClient {
    pub fn new(config: OpenWeatherConfig) -> Result<Self, AirqError> {
        if config.api_key.trim().is_empty() {
            return Err(AirqError::MissingApiKey);
        }

        let http_client = reqwest::Client::builder()
            .user_agent(concat!("airq/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AirqError::Client(e.to_string()))?;

        Ok(OpenWeatherClient {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &OpenWeatherConfig {
        &self.config
    }

    /// GET `path` with `query` plus the API key, returning the body of a
    /// successful response or a message describing the failure.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, String> {
        let url = self.config.endpoint(path);
        debug!(%url, "requesting");

        // Errors carry the request URL, which includes the key.
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| error_chain(&e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| error_chain(&e.without_url()))?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "provider returned an error");
            return Err(format!("HTTP {}: {}", status.as_u16(), body.trim()));
        }
        Ok(body)
    }
}

/// Join an error with its `source()` chain, e.g.
/// "error sending request: client error (Connect): Connection refused".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[async_trait]
impl Geocoder for OpenWeatherClient {
    async fn locate(&self, city: &str) -> Result<Location, AirqError> {
        let body = self
            .get(
                "/geo/1.0/direct",
                &[("q", city.to_string()), ("limit", "1".to_string())],
            )
            .await
            .map_err(AirqError::Geocoding)?;
        parse_geocode(&body, city)
    }

    fn backend_name(&self) -> &str {
        "openweathermap"
    }
}

#[async_trait]
impl PollutionSource for OpenWeatherClient {
    async fn current(&self, location: &Location) -> Result<CurrentPollution, AirqError> {
        let body = self
            .get(
                "/data/2.5/air_pollution",
                &[
                    ("lat", location.lat.to_string()),
                    ("lon", location.lon.to_string()),
                ],
            )
            .await
            .map_err(AirqError::PollutionFetch)?;
        parse_air_pollution(&body)
    }

    fn backend_name(&self) -> &str {
        "openweathermap"
    }
}

#[derive(Debug, Deserialize)]
struct GeoHit {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: String,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    #[serde(default)]
    dt: Option<i64>,
    components: PollutantReading,
}

/// Decode a `/geo/1.0/direct` response, taking the first hit.
pub fn parse_geocode(body: &str, city: &str) -> Result<Location, AirqError> {
    let hits: Vec<GeoHit> = serde_json::from_str(body)
        .map_err(|e| AirqError::Geocoding(format!("unexpected response: {e}")))?;

    let hit = hits
        .into_iter()
        .next()
        .ok_or_else(|| AirqError::LocationNotFound {
            city: city.to_string(),
        })?;

    debug!(name = %hit.name, country = %hit.country, lat = hit.lat, lon = hit.lon, "geocoded");
    Ok(Location {
        name: hit.name,
        country: hit.country,
        state: hit.state,
        lat: hit.lat,
        lon: hit.lon,
    })
}

/// Decode a `/data/2.5/air_pollution` response, taking the first entry.
pub fn parse_air_pollution(body: &str) -> Result<CurrentPollution, AirqError> {
    let response: AirPollutionResponse = serde_json::from_str(body)
        .map_err(|e| AirqError::PollutionFetch(format!("unexpected response: {e}")))?;

    let entry = response
        .list
        .into_iter()
        .next()
        .ok_or_else(|| AirqError::PollutionFetch("response contained no measurements".into()))?;

    Ok(CurrentPollution {
        reading: entry.components,
        measured_at: entry.dt.and_then(|secs| DateTime::from_timestamp(secs, 0)),
    })
}
