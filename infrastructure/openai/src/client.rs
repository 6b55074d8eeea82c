use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Targets an OpenAI-compatible endpoint other than the public API.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_bearer_header_from_key() {
        let client = OpenAIClient::new("sk-test".to_string());

        assert_eq!(client.auth_header(), "Bearer sk-test");
    }

    #[test]
    fn should_default_to_public_chat_completions_endpoint() {
        let client = OpenAIClient::new("sk-test".to_string());

        assert_eq!(
            client.chat_completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn should_strip_trailing_slash_from_custom_base_url() {
        let client = OpenAIClient::with_base_url(
            "sk-test".to_string(),
            "http://localhost:9000/".to_string(),
        );

        assert_eq!(
            client.chat_completions_url(),
            "http://localhost:9000/chat/completions"
        );
    }
}
