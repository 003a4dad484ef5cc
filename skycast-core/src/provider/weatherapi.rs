use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Unit, WeatherRecord};

use super::{NotFoundError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Fetch client for WeatherAPI.com's current-conditions endpoint.
///
/// The API key is an explicit constructor argument rather than ambient
/// process state, so the client can be exercised against a mock server.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint, e.g. a wiremock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn fetch_current(&self, location: &str) -> Result<WeatherRecord, NotFoundError> {
        let url = format!("{}/current.json", self.base_url);

        // reqwest percent-encodes query values, so multi-word and
        // non-ASCII locations survive the trip.
        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "failed to send request to WeatherAPI.com");
                NotFoundError
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            debug!(error = %e, "failed to read WeatherAPI current response body");
            NotFoundError
        })?;

        if !status.is_success() {
            debug!(%status, body = %truncate_body(&body), "WeatherAPI current request failed");
            return Err(NotFoundError);
        }

        let parsed: WaResponse = serde_json::from_str(&body).map_err(|e| {
            debug!(error = %e, body = %truncate_body(&body), "failed to parse WeatherAPI current JSON");
            NotFoundError
        })?;

        Ok(WeatherRecord {
            temperature_c: parsed.current.temp_c,
            description: parsed.current.condition.text,
            location: parsed.location.name,
            unit: Unit::Celsius,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, location: &str) -> Result<WeatherRecord, NotFoundError> {
        self.fetch_current(location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Walk back to a char boundary so multi-byte bodies can't panic.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
