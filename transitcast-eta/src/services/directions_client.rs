//! Routing-oracle client (Google Directions API)
//!
//! The pipeline only sees the `RouteOracle` trait; `DirectionsClient` is
//! the production implementation. The oracle is treated as a black box
//! with unreliable availability: every failure surfaces as an error or a
//! no-route and is absorbed by the resolver, never propagated as fatal.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
const USER_AGENT: &str = "transitcast/0.1.0 (https://github.com/transitcast/transitcast)";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Routing-oracle errors
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Oracle status: {0}")]
    Status(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Black-box travel-duration oracle
///
/// `drive_time` returns the driving duration in hours, `Ok(None)` when
/// no route exists between the two addresses, and an error for any
/// transport or protocol failure. No retries are performed at this
/// level.
#[async_trait]
pub trait RouteOracle: Send + Sync {
    async fn drive_time(&self, origin: &str, destination: &str)
        -> Result<Option<f64>, OracleError>;
}

/// Directions API response envelope
#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    duration: Option<DurationValue>,
}

#[derive(Debug, Deserialize)]
struct DurationValue {
    /// Duration in seconds
    value: u64,
}

/// Google Directions API client
pub struct DirectionsClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl DirectionsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, OracleError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| OracleError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl RouteOracle for DirectionsClient {
    async fn drive_time(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<f64>, OracleError> {
        let departure_time = chrono::Utc::now().timestamp().to_string();

        tracing::debug!(origin = %origin, destination = %destination, "Querying directions API");

        let response = self
            .http_client
            .get(DIRECTIONS_BASE_URL)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "driving"),
                ("departure_time", departure_time.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| OracleError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OracleError::Api(status.as_u16(), error_text));
        }

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Parse(e.to_string()))?;

        match body.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" | "NOT_FOUND" => return Ok(None),
            other => return Err(OracleError::Status(other.to_string())),
        }

        // A response with no routes or no legs carries no duration;
        // that is a no-route, not a protocol error.
        let hours = body
            .routes
            .first()
            .and_then(|route| route.legs.first())
            .and_then(|leg| leg.duration.as_ref())
            .map(|duration| duration.value as f64 / SECONDS_PER_HOUR);

        Ok(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DirectionsClient::new("test-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_response_parsing_converts_seconds_to_hours() {
        let json = r#"{
            "status": "OK",
            "routes": [{"legs": [{"duration": {"value": 7200, "text": "2 hours"}}]}]
        }"#;
        let body: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.status, "OK");

        let hours = body
            .routes
            .first()
            .and_then(|route| route.legs.first())
            .and_then(|leg| leg.duration.as_ref())
            .map(|duration| duration.value as f64 / SECONDS_PER_HOUR);
        assert_eq!(hours, Some(2.0));
    }

    #[test]
    fn test_response_with_empty_legs_has_no_duration() {
        let json = r#"{"status": "OK", "routes": [{"legs": []}]}"#;
        let body: DirectionsResponse = serde_json::from_str(json).unwrap();
        let hours = body
            .routes
            .first()
            .and_then(|route| route.legs.first())
            .and_then(|leg| leg.duration.as_ref())
            .map(|duration| duration.value as f64 / SECONDS_PER_HOUR);
        assert_eq!(hours, None);
    }

    #[test]
    fn test_zero_results_parses_without_routes() {
        let json = r#"{"status": "ZERO_RESULTS"}"#;
        let body: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.status, "ZERO_RESULTS");
        assert!(body.routes.is_empty());
    }
}
