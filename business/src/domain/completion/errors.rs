/// Failures of a single completion round trip. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion.network")]
    Network,
    #[error("completion.unexpected_status: {0}")]
    UnexpectedStatus(u16),
    #[error("completion.decode")]
    Decode,
    #[error("completion.no_choices")]
    NoChoices,
}
