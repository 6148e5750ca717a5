use reticle_types::CrosshairConfig;

/// Inference provider interface
#[async_trait::async_trait]
pub trait CrosshairAnalyzer: Send + Sync {
    /// Infer the crosshair configuration from a screenshot.
    ///
    /// `image` is a `data:<mime>;base64,...` payload. One attempt, no
    /// retry; callers re-initiate by submitting another image.
    async fn analyze(&self, image: &str) -> Result<CrosshairConfig, AnalyzeError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("API key is missing")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    Authentication,

    #[error("API error: {0}")]
    Api(String),

    #[error("No data returned from the model")]
    EmptyResponse,

    #[error("Failed to parse model response: {0}")]
    Parse(String),
}
