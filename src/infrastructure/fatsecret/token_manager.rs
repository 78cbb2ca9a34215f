use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::error::FatSecretError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// A bearer token and the instant after which it must not be handed out
#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Obtains and caches the client-credentials token used for every FatSecret call.
///
/// The lock is held while a refresh is in flight, so callers that find the
/// token stale at the same moment wait for one OAuth request instead of each
/// issuing their own.
pub struct TokenManager {
    http_client: reqwest::Client,
    oauth_url: String,
    client_id: String,
    client_secret: String,
    scope: String,
    safety_margin: Duration,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenManager {
    pub fn new(
        http_client: reqwest::Client,
        oauth_url: String,
        client_id: String,
        client_secret: String,
        scope: String,
        safety_margin: Duration,
    ) -> Self {
        Self {
            http_client,
            oauth_url,
            client_id,
            client_secret,
            scope,
            safety_margin,
            cached: Mutex::new(None),
        }
    }

    /// Return the cached token, refreshing it first if it is missing or about to expire
    pub async fn access_token(&self) -> Result<String, FatSecretError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            tracing::debug!("Using cached FatSecret access token");
            return Ok(token.value.clone());
        }

        let token = self.request_token().await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(value)
    }

    async fn request_token(&self) -> Result<CachedToken, FatSecretError> {
        tracing::debug!(scope = %self.scope, "Requesting FatSecret access token");

        let params = [
            ("grant_type", "client_credentials"),
            ("scope", self.scope.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.oauth_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "FatSecret token request rejected");
            return Err(FatSecretError::TokenRejected {
                status: status.as_u16(),
                body,
            });
        }

        let issued_at = Instant::now();
        let token: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| FatSecretError::InvalidResponse {
                    endpoint: "oauth token",
                    message: e.to_string(),
                })?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(self.safety_margin);
        tracing::info!(
            expires_in = token.expires_in,
            usable_for_secs = lifetime.as_secs(),
            "Obtained FatSecret access token"
        );

        Ok(CachedToken {
            value: token.access_token,
            expires_at: issued_at + lifetime,
        })
    }
}
