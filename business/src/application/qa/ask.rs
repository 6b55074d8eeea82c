use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::model::Prompt;
use crate::domain::completion::services::CompletionService;
use crate::domain::logger::Logger;
use crate::domain::qa::errors::QaError;
use crate::domain::qa::model::QuestionAnswer;
use crate::domain::qa::repository::QuestionAnswerRepository;
use crate::domain::qa::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};

pub struct AskQuestionUseCaseImpl {
    pub completion: Arc<dyn CompletionService>,
    pub repository: Arc<dyn QuestionAnswerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AskQuestionUseCase for AskQuestionUseCaseImpl {
    async fn execute(&self, params: AskQuestionParams) -> Result<QuestionAnswer, QaError> {
        if params.question.trim().is_empty() {
            return Err(QaError::QuestionEmpty);
        }

        self.logger
            .info(&format!("Asking question: {}", params.question));

        let prompt = Prompt::compose(
            &params.question,
            params.example.as_ref(),
            params.attachment.as_ref(),
        );
        self.logger.debug(&format!(
            "Prompt composed with {} message(s)",
            prompt.messages.len()
        ));

        let answer = match self.completion.complete(&prompt).await {
            Ok(answer) => answer,
            Err(err) => {
                self.logger
                    .error(&format!("Completion request failed: {}", err));
                return Err(err.into());
            }
        };
        self.logger
            .debug(&format!("Received answer of {} bytes", answer.len()));

        let qa = QuestionAnswer::new(params.question, answer)?;
        self.repository.save(&qa).await?;

        self.logger.info("Question and answer stored");
        Ok(qa)
    }
}
