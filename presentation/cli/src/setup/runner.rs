use anyhow::{Context, bail};

use business::domain::qa::model::QuestionAnswer;
use business::domain::qa::use_cases::ask::AskQuestionParams;

use crate::cli::args::Cli;
use crate::cli::prompt_files::{load_attachment, load_example};
use crate::config::app_config::AppConfig;
use crate::config::openai_config::OpenAIConfig;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Runner;

impl Runner {
    /// Runs one question through completion and storage. Every failure is
    /// returned with the stage it happened in; nothing is retried.
    pub async fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<QuestionAnswer> {
        let question = match cli.question.as_deref() {
            Some(question) if !question.trim().is_empty() => question.to_string(),
            _ => bail!("a question is required, pass it with -question"),
        };

        let params = AskQuestionParams {
            question,
            example: load_example(cli)?,
            attachment: load_attachment(cli)?,
        };

        std::fs::create_dir_all(&config.config_dir).with_context(|| {
            format!(
                "failed to create config directory {}",
                config.config_dir.display()
            )
        })?;

        let openai_config =
            OpenAIConfig::load(&config.config_file()).context("failed to load configuration")?;
        tracing::debug!(config = %config.config_file().display(), "configuration loaded");

        let container = DependencyContainer::new(config, openai_config)
            .context("failed to open question store")?;

        let qa = container
            .ask_question
            .execute(params)
            .await
            .context("failed to answer question")?;

        Ok(qa)
    }
}
