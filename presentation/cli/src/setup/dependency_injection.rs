use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::DEFAULT_BUCKET;
use persistence::qa::repository::QuestionAnswerRepositorySqlite;

use openai::chat_completion::ChatCompletionOpenAI;
use openai::client::OpenAIClient;

use business::application::qa::ask::AskQuestionUseCaseImpl;
use business::domain::qa::use_cases::ask::AskQuestionUseCase;

use crate::config::app_config::AppConfig;
use crate::config::database_config;
use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub ask_question: Arc<dyn AskQuestionUseCase>,
}

impl DependencyContainer {
    /// Opens the store and wires the completion adapter into the use case.
    pub fn new(config: &AppConfig, openai_config: OpenAIConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let conn = database_config::init_database(config)?;
        let repository = Arc::new(QuestionAnswerRepositorySqlite::new(
            conn,
            DEFAULT_BUCKET.to_string(),
        ));

        let openai_client =
            OpenAIClient::with_base_url(openai_config.api_key, config.base_url.clone());
        let completion = Arc::new(ChatCompletionOpenAI::new(openai_client));

        let ask_question = Arc::new(AskQuestionUseCaseImpl {
            completion,
            repository,
            logger,
        });

        Ok(Self { ask_question })
    }
}
