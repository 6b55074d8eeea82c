use super::errors::QaError;

/// A question and the answer the model gave for it.
///
/// Records are keyed by the exact question text; saving the same question
/// again replaces the previous answer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

impl QuestionAnswer {
    pub fn new(question: String, answer: String) -> Result<Self, QaError> {
        if question.trim().is_empty() {
            return Err(QaError::QuestionEmpty);
        }

        Ok(Self { question, answer })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(question: String, answer: String) -> Self {
        Self { question, answer }
    }

    /// Store key for this record.
    pub fn key(&self) -> &str {
        &self.question
    }
}
