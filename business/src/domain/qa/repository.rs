use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::QuestionAnswer;

#[async_trait]
pub trait QuestionAnswerRepository: Send + Sync {
    /// Inserts the record, overwriting any record stored under the same question.
    async fn save(&self, qa: &QuestionAnswer) -> Result<(), RepositoryError>;
}
