use std::sync::Mutex;

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};

use business::domain::errors::RepositoryError;
use business::domain::qa::model::QuestionAnswer;
use business::domain::qa::repository::QuestionAnswerRepository;

use super::entity::QuestionAnswerEntity;

pub struct QuestionAnswerRepositorySqlite {
    conn: Mutex<Connection>,
    bucket: String,
}

impl QuestionAnswerRepositorySqlite {
    /// Wraps a connection returned by `open_database`, whose bucket already exists.
    pub fn new(conn: Connection, bucket: String) -> Self {
        Self {
            conn: Mutex::new(conn),
            bucket,
        }
    }

    /// Looks up the record stored under `question`.
    pub fn find(&self, question: &str) -> Result<Option<QuestionAnswer>, RepositoryError> {
        let conn = self.conn.lock().map_err(|_| RepositoryError::Persistence)?;

        let value: Option<Vec<u8>> = conn
            .query_row(
                &format!("SELECT value FROM {} WHERE key = ?1", self.bucket),
                params![question],
                |row| row.get(0),
            )
            .optional()
            .map_err(|_| RepositoryError::DatabaseError)?;

        value
            .map(|bytes| {
                serde_json::from_slice::<QuestionAnswerEntity>(&bytes)
                    .map(|entity| entity.into_domain())
                    .map_err(|_| RepositoryError::Serialization)
            })
            .transpose()
    }
}

#[async_trait]
impl QuestionAnswerRepository for QuestionAnswerRepositorySqlite {
    async fn save(&self, qa: &QuestionAnswer) -> Result<(), RepositoryError> {
        let value = serde_json::to_vec(&QuestionAnswerEntity::from_domain(qa))
            .map_err(|_| RepositoryError::Serialization)?;

        let conn = self.conn.lock().map_err(|_| RepositoryError::Persistence)?;
        conn.execute(
            &format!(
                "INSERT INTO {} (key, value) VALUES (?1, ?2)
                ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
                self.bucket
            ),
            params![qa.key(), value],
        )
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DEFAULT_BUCKET, DatabaseConfig, open_database};
    use tempfile::TempDir;

    fn repository() -> (TempDir, QuestionAnswerRepositorySqlite) {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_database(&DatabaseConfig::new(dir.path().join("qa.db"))).unwrap();
        (
            dir,
            QuestionAnswerRepositorySqlite::new(conn, DEFAULT_BUCKET.to_string()),
        )
    }

    fn row_count(repository: &QuestionAnswerRepositorySqlite) -> i64 {
        let conn = repository.conn.lock().unwrap();
        conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", repository.bucket),
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    fn qa(question: &str, answer: &str) -> QuestionAnswer {
        QuestionAnswer::new(question.to_string(), answer.to_string()).unwrap()
    }

    #[tokio::test]
    async fn should_store_record_under_question_key() {
        let (_dir, repository) = repository();

        repository.save(&qa("What is 2+2?", "4")).await.unwrap();

        let stored = repository.find("What is 2+2?").unwrap();
        assert_eq!(stored, Some(qa("What is 2+2?", "4")));
    }

    #[tokio::test]
    async fn should_store_value_as_json_document() {
        let (_dir, repository) = repository();

        repository.save(&qa("Q", "A")).await.unwrap();

        let conn = repository.conn.lock().unwrap();
        let value: Vec<u8> = conn
            .query_row(
                &format!("SELECT value FROM {} WHERE key = 'Q'", DEFAULT_BUCKET),
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(value, br#"{"question":"Q","answer":"A"}"#.to_vec());
    }

    #[tokio::test]
    async fn should_overwrite_answer_when_question_repeats() {
        let (_dir, repository) = repository();

        repository.save(&qa("Best editor?", "vim")).await.unwrap();
        repository.save(&qa("Best editor?", "emacs")).await.unwrap();

        assert_eq!(row_count(&repository), 1);
        assert_eq!(
            repository.find("Best editor?").unwrap().unwrap().answer,
            "emacs"
        );
    }

    #[tokio::test]
    async fn should_treat_questions_differing_in_whitespace_as_distinct() {
        let (_dir, repository) = repository();

        repository.save(&qa("Why?", "one")).await.unwrap();
        repository.save(&qa("Why? ", "two")).await.unwrap();

        assert_eq!(row_count(&repository), 2);
    }

    #[test]
    fn should_return_none_for_unknown_question() {
        let (_dir, repository) = repository();

        assert_eq!(repository.find("never asked").unwrap(), None);
    }
}
