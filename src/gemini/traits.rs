use crate::gemini::error::GenerationError;
use crate::gemini::types::{GenerateContentResponse, GenerationOptions};
use async_trait::async_trait;

/// Common trait for text-generation backends
/// Lets the oracle run against Gemini in production and a canned backend in tests
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Run one generation round-trip for `prompt` on `model`
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        options: GenerationOptions,
    ) -> Result<GenerateContentResponse, GenerationError>;

    /// Get the name of the backend
    fn backend_name(&self) -> &'static str;
}
