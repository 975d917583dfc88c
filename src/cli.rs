use std::path::PathBuf;

use clap::Parser;

use crate::consts::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, MODEL_ENV};
use crate::error::ApplyError;

#[derive(Debug, Parser)]
#[command(
    name = "file-update",
    version,
    about = "A tool to update file content using natural language instructions with OpenAI"
)]
pub struct Cli {
    /// Path to the file to update
    #[arg(short, long)]
    pub file: PathBuf,

    /// Natural language instruction for the update
    #[arg(short, long)]
    pub instruction: String,

    /// OpenAI API key
    #[arg(short = 'k', long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat model to use
    #[arg(short, long, env = MODEL_ENV, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API root for an OpenAI-compatible endpoint
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl Cli {
    /// The credential from `--api-key` or the environment, passed on as given.
    /// Blank counts as unset.
    pub fn credential(&self) -> Result<String, ApplyError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key.to_string()),
            _ => Err(ApplyError::MissingCredential),
        }
    }
}
