use std::path::{Path, PathBuf};

use business::domain::completion::model::{Attachment, Example};

use super::args::Cli;

#[derive(Debug, thiserror::Error)]
pub enum PromptFileError {
    #[error("prompt.file_unreadable: {0}")]
    Unreadable(PathBuf),
}

fn read(path: &Path) -> Result<String, PromptFileError> {
    std::fs::read_to_string(path).map_err(|_| PromptFileError::Unreadable(path.to_path_buf()))
}

/// Reads the one-shot example named by `-example_prompt`/`-example_response`.
pub fn load_example(cli: &Cli) -> Result<Option<Example>, PromptFileError> {
    match (&cli.example_prompt, &cli.example_response) {
        (Some(prompt), Some(response)) => Ok(Some(Example {
            prompt: read(prompt)?,
            response: read(response)?,
        })),
        _ => Ok(None),
    }
}

/// Reads the file named by `-file_to_analyze`.
pub fn load_attachment(cli: &Cli) -> Result<Option<Attachment>, PromptFileError> {
    let Some(path) = cli.file_to_analyze.as_deref() else {
        return Ok(None);
    };

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Some(Attachment {
        name,
        contents: read(path)?,
    }))
}
