use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can end a run. None of these are retried.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(
        "OpenAI API key is not set. Use --api-key flag or set OPENAI_API_KEY environment variable."
    )]
    MissingCredential,

    #[error("failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The completer's error chain, kept whole for display.
    #[error("failed to get completion: {0:#}")]
    ServiceCall(anyhow::Error),

    #[error("failed to write updated file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
