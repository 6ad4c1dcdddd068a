use async_trait::async_trait;

use super::prompt::PromptContext;

/// External generator producing free-form advisory text for a simulation.
///
/// Implementations may return anything: prose, fenced JSON, or JSON surrounded by
/// commentary. The normalizer treats the output as untrusted.
#[async_trait]
pub trait AdvisoryGenerator: Send + Sync {
    async fn generate(&self, context: &PromptContext) -> Result<String, AdvisorError>;
}

/// Failure modes of the advisory generator. None of these reach API clients.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("advisory generator is not configured")]
    NotConfigured,
    #[error("advisory request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
    #[error("advisory transport failed: {0}")]
    Transport(String),
    #[error("advisory service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("advisory service returned no text")]
    EmptyResponse,
    #[error("advisory response could not be decoded: {0}")]
    Decode(String),
}

/// Generator used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAdvisor;

#[async_trait]
impl AdvisoryGenerator for DisabledAdvisor {
    async fn generate(&self, _context: &PromptContext) -> Result<String, AdvisorError> {
        Err(AdvisorError::NotConfigured)
    }
}
