use async_trait::async_trait;

use super::errors::CompletionError;
use super::model::Prompt;

/// Service port for a hosted language model that answers a prompt.
///
/// Implementations perform exactly one request and return the trimmed text
/// of the first choice.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError>;
}
