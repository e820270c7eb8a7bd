use anyhow::{Context, Result};
use std::time::Duration;
use tokio_retry::{strategy::ExponentialBackoff, Retry};

use super::types::{AirResponse, WeatherResponse};
use super::ProviderError;
use crate::geo::Coordinate;

const DEFAULT_BASE_URL: &str = "https://api.meersens.com/environment/public";

/// Per-call timeout, applied independently to each upstream request so a
/// single slow endpoint cannot stall the composite beyond this bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Meersens environmental-data API.
///
/// The API key is optional on purpose: a missing key surfaces as
/// `ProviderError::MissingCredential` per call, which the signal layer
/// degrades to a default reading instead of failing the run.
pub struct MeersensClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
}

/// Create a Meersens client with the shared request timeout
pub fn create_client(api_key: Option<String>) -> Result<MeersensClient> {
    let http = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")?;

    Ok(MeersensClient {
        http,
        base_url: DEFAULT_BASE_URL.to_string(),
        api_key,
    })
}

impl MeersensClient {
    /// Fetch current air quality for a coordinate.
    ///
    /// Retries transient failures with exponential backoff (3 attempts,
    /// 100ms initial delay, 5s cap) before giving up.
    pub async fn fetch_air(&self, coord: Coordinate) -> Result<AirResponse, ProviderError> {
        let key = self.require_key()?;

        let retry_strategy = ExponentialBackoff::from_millis(100)
            .max_delay(Duration::from_secs(5))
            .take(3);

        Retry::spawn(retry_strategy, || {
            self.get_json::<AirResponse>("air/current", key, coord)
        })
        .await
    }

    /// Fetch current weather for a coordinate. Single attempt.
    pub async fn fetch_weather(&self, coord: Coordinate) -> Result<WeatherResponse, ProviderError> {
        let key = self.require_key()?;
        self.get_json::<WeatherResponse>("weather/current", key, coord)
            .await
    }

    fn require_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingCredential)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        key: &str,
        coord: Coordinate,
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .header("apikey", key)
            .header("Accept", "application/json")
            .query(&[("lat", coord.lat), ("lng", coord.lng)])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_carries_key() {
        let client = create_client(Some("test-key".to_string())).unwrap();
        assert_eq!(client.require_key().unwrap(), "test-key");
    }

    #[test]
    fn test_missing_key_is_rejected_before_any_request() {
        let client = create_client(None).unwrap();
        assert!(matches!(
            client.require_key(),
            Err(ProviderError::MissingCredential)
        ));
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let client = create_client(Some(String::new())).unwrap();
        assert!(matches!(
            client.require_key(),
            Err(ProviderError::MissingCredential)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        // Port 1 on loopback refuses connections immediately, so the retry
        // loop stays fast and no real traffic leaves the machine.
        let mut client = create_client(Some("test-key".to_string())).unwrap();
        client.base_url = "http://127.0.0.1:1".to_string();

        let coord = Coordinate::new(51.045, -114.075);
        let result = client.fetch_weather(coord).await;
        assert!(matches!(result, Err(ProviderError::Network(_))));
    }
}
