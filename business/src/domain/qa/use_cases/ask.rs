use async_trait::async_trait;

use crate::domain::completion::model::{Attachment, Example};
use crate::domain::qa::errors::QaError;
use crate::domain::qa::model::QuestionAnswer;

pub struct AskQuestionParams {
    pub question: String,
    pub example: Option<Example>,
    pub attachment: Option<Attachment>,
}

#[async_trait]
pub trait AskQuestionUseCase: Send + Sync {
    async fn execute(&self, params: AskQuestionParams) -> Result<QuestionAnswer, QaError>;
}
