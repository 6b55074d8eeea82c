use serde::{Deserialize, Serialize};

use business::domain::qa::model::QuestionAnswer;

/// JSON document stored as the bucket value.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionAnswerEntity {
    pub question: String,
    pub answer: String,
}

impl QuestionAnswerEntity {
    pub fn from_domain(qa: &QuestionAnswer) -> Self {
        Self {
            question: qa.question.clone(),
            answer: qa.answer.clone(),
        }
    }

    pub fn into_domain(self) -> QuestionAnswer {
        QuestionAnswer::from_repository(self.question, self.answer)
    }
}
