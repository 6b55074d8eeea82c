use crate::domain::completion::errors::CompletionError;
use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum QaError {
    #[error("qa.question_empty")]
    QuestionEmpty,
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
