//! REST client for the practice backend.
//!
//! Implements the core API traits (`ChallengeApi`, `SessionApi`,
//! `UserStatsApi`) over plain JSON-over-HTTP endpoints:
//!
//! - `GET  /api/challenge-progress`
//! - `GET  /api/challenge-progress/{day}`
//! - `POST /api/challenge-progress`
//! - `GET  /api/user/stats`
//! - `GET  /api/sessions`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shield_core::challenge::{ChallengeApi, ChallengeProgressEntry};
use shield_core::config::AppConfig;
use shield_core::session::{Session, SessionApi};
use shield_core::stats::{UserStats, UserStatsApi};
use shield_core::{Result, ShieldError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the practice backend.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteDayRequest {
    day_number: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayStatusResponse {
    is_completed: bool,
}

impl RestClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a client from the application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
            .with_timeout(Duration::from_secs(config.request_timeout_secs))
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .timeout(self.timeout)
            .send()
            .await?;

        Self::checked(response)
            .await?
            .json::<T>()
            .await
            .map_err(Into::into)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .timeout(self.timeout)
            .send()
            .await?;

        Self::checked(response)
            .await?
            .json::<T>()
            .await
            .map_err(Into::into)
    }

    /// Turns a non-2xx response into an API error carrying the body text.
    async fn checked(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ShieldError::api(Some(status.as_u16()), body));
        }
        Ok(response)
    }
}

#[async_trait]
impl ChallengeApi for RestClient {
    async fn list_progress(&self) -> Result<Vec<ChallengeProgressEntry>> {
        self.get_json("/api/challenge-progress").await
    }

    async fn is_day_completed(&self, day: u8) -> Result<bool> {
        let status: DayStatusResponse = self
            .get_json(&format!("/api/challenge-progress/{day}"))
            .await?;
        Ok(status.is_completed)
    }

    async fn complete_day(&self, day: u8) -> Result<ChallengeProgressEntry> {
        self.post_json(
            "/api/challenge-progress",
            &CompleteDayRequest { day_number: day },
        )
        .await
    }
}

#[async_trait]
impl SessionApi for RestClient {
    async fn list_sessions(&self) -> Result<Vec<Session>> {
        self.get_json("/api/sessions").await
    }
}

#[async_trait]
impl UserStatsApi for RestClient {
    async fn fetch_stats(&self) -> Result<UserStats> {
        self.get_json("/api/user/stats").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = RestClient::new("http://localhost:3000/");
        assert_eq!(
            client.url("/api/challenge-progress"),
            "http://localhost:3000/api/challenge-progress"
        );

        let client = RestClient::new("http://localhost:3000");
        assert_eq!(
            client.url("/api/challenge-progress/7"),
            "http://localhost:3000/api/challenge-progress/7"
        );
    }

    #[test]
    fn test_complete_day_request_wire_shape() {
        let body = serde_json::to_string(&CompleteDayRequest { day_number: 12 }).unwrap();
        assert_eq!(body, r#"{"dayNumber":12}"#);
    }

    #[test]
    fn test_day_status_response_wire_shape() {
        let status: DayStatusResponse = serde_json::from_str(r#"{"isCompleted":true}"#).unwrap();
        assert!(status.is_completed);
    }
}
