use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(String),
    #[error("token endpoint returned status {0}")]
    Rejected(u16),
    #[error("token response unusable: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(String),
    #[error("provider returned status {0}")]
    Status(u16),
    #[error("provider response unusable: {0}")]
    Unusable(String),
}

/// Supplies a bearer token for the upstream flight-offer source. Failure
/// here is fatal to the aggregation that requested it.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String, AuthError>;
}

/// A generative-text backend asked to emit destination candidates. No
/// schema is guaranteed; callers must defensively parse the free text.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
