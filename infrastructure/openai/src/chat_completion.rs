use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use business::domain::completion::errors::CompletionError;
use business::domain::completion::model::Prompt;
use business::domain::completion::services::CompletionService;

use crate::client::OpenAIClient;

const MODEL_ID: &str = "gpt-3.5-turbo";
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Answers prompts through the chat completions endpoint, one request per call.
pub struct ChatCompletionOpenAI {
    client: OpenAIClient,
}

impl ChatCompletionOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_request(prompt: &Prompt) -> ChatCompletionRequest<'static> {
        ChatCompletionRequest {
            model: MODEL_ID,
            messages: prompt
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: TEMPERATURE,
        }
    }

    fn parse_response(body: &[u8]) -> Result<String, CompletionError> {
        let data: ChatCompletionResponse =
            serde_json::from_slice(body).map_err(|_| CompletionError::Decode)?;

        data.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or(CompletionError::NoChoices)
    }
}

#[async_trait]
impl CompletionService for ChatCompletionOpenAI {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let body = Self::build_request(prompt);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| CompletionError::Network)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CompletionError::UnexpectedStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|_| CompletionError::Network)?;

        Self::parse_response(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::completion::model::{PromptMessage, Role};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_for(server: &MockServer) -> ChatCompletionOpenAI {
        ChatCompletionOpenAI::new(OpenAIClient::with_base_url(
            "test-key".to_string(),
            server.uri(),
        ))
    }

    fn question(text: &str) -> Prompt {
        Prompt::compose(text, None, None)
    }

    #[test]
    fn should_trim_first_choice_content() {
        let body = br#"{"id":"chatcmpl-1","object":"chat.completion","model":"gpt-3.5-turbo","choices":[{"message":{"role":"assistant","content":"\n\n  Hello there  \n"},"finish_reason":"stop"},{"message":{"role":"assistant","content":"second"},"finish_reason":"stop"}]}"#;

        let answer = ChatCompletionOpenAI::parse_response(body).unwrap();

        assert_eq!(answer, "Hello there");
    }

    #[test]
    fn should_fail_when_choices_are_empty() {
        let result = ChatCompletionOpenAI::parse_response(br#"{"choices":[]}"#);

        assert!(matches!(result, Err(CompletionError::NoChoices)));
    }

    #[test]
    fn should_fail_to_decode_non_json_body() {
        let result = ChatCompletionOpenAI::parse_response(b"<html>bad gateway</html>");

        assert!(matches!(result, Err(CompletionError::Decode)));
    }

    #[test]
    fn should_map_prompt_roles_into_request_messages() {
        let prompt = Prompt {
            messages: vec![
                PromptMessage {
                    role: Role::System,
                    content: "Be brief".to_string(),
                },
                PromptMessage {
                    role: Role::User,
                    content: "Hi".to_string(),
                },
            ],
        };

        let request = serde_json::to_value(ChatCompletionOpenAI::build_request(&prompt)).unwrap();

        assert_eq!(
            request,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "Be brief"},
                    {"role": "user", "content": "Hi"},
                ],
                "temperature": 0.7,
            })
        );
    }

    #[tokio::test]
    async fn should_post_bearer_authenticated_request_and_return_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Capital of France?"}],
                "temperature": 0.7,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "model": "gpt-3.5-turbo",
                "choices": [{
                    "message": {"role": "assistant", "content": " Paris. "},
                    "finish_reason": "stop",
                }],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let answer = completion_for(&server)
            .complete(&question("Capital of France?"))
            .await
            .unwrap();

        assert_eq!(answer, "Paris.");
    }

    #[tokio::test]
    async fn should_report_status_of_non_ok_response_without_retrying() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let result = completion_for(&server).complete(&question("Hi")).await;

        assert!(matches!(result, Err(CompletionError::UnexpectedStatus(429))));
    }

    #[tokio::test]
    async fn should_report_network_error_when_endpoint_is_unreachable() {
        let completion = ChatCompletionOpenAI::new(OpenAIClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:1".to_string(),
        ));

        let result = completion.complete(&question("Hi")).await;

        assert!(matches!(result, Err(CompletionError::Network)));
    }
}
