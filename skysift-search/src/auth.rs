use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::Deserialize;
use skysift_core::provider::{AuthError, TokenProvider};
use std::time::Duration;
use tokio::sync::Mutex;

/// Tokens are treated as expired this long before their reported expiry, so
/// an aggregation never starts with a token about to lapse mid-flight.
const EXPIRY_SLACK_SECONDS: i64 = 60;

#[derive(Debug, Clone)]
pub struct SupplierCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now + ChronoDuration::seconds(EXPIRY_SLACK_SECONDS) < self.expires_at
    }
}

/// OAuth2 client-credentials token provider for the flight supplier. The
/// token is cached in-process and reused until shortly before expiry.
pub struct OauthTokenProvider {
    http: reqwest::Client,
    base_url: String,
    credentials: SupplierCredentials,
    cache: Mutex<Option<CachedToken>>,
}

impl OauthTokenProvider {
    pub fn new(
        base_url: &str,
        credentials: SupplierCredentials,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            cache: Mutex::new(None),
        })
    }

    async fn request_token(&self) -> Result<CachedToken, AuthError> {
        let url = format!("{}/v1/security/oauth2/token", self.base_url);
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected(response.status().as_u16()));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        Ok(CachedToken {
            value: body.access_token,
            expires_at: Utc::now() + ChronoDuration::seconds(body.expires_in.max(0)),
        })
    }
}

#[async_trait]
impl TokenProvider for OauthTokenProvider {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        let mut cache = self.cache.lock().await;

        if let Some(token) = cache.as_ref() {
            if token.is_valid(Utc::now()) {
                return Ok(token.value.clone());
            }
            tracing::debug!("supplier token expired, requesting a fresh one");
        }

        let token = self.request_token().await?;
        tracing::info!(expires_at = %token.expires_at, "obtained supplier access token");
        let value = token.value.clone();
        *cache = Some(token);
        Ok(value)
    }
}
