//! Read a file, ask a [`Completer`] to rewrite it, write `<file>.updated`.
//!
//! The source file is never touched. The destination is only opened once a
//! completion has come back, so a failed call leaves nothing behind.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::completer::{Completer, TokenUsage};
use crate::consts::UPDATED_SUFFIX;
use crate::error::ApplyError;
use crate::prompts::update::{build_user_prompt, system_prompt};

/// One file plus the instruction to apply to it.
#[derive(Debug, Clone)]
pub struct Request {
    file_path: PathBuf,
    instruction: String,
}

impl Request {
    /// Both the path and the instruction must be non-empty.
    pub fn new(
        file_path: impl Into<PathBuf>,
        instruction: impl Into<String>,
    ) -> Result<Self, ApplyError> {
        let file_path = file_path.into();
        let instruction = instruction.into();

        if file_path.as_os_str().is_empty() {
            return Err(ApplyError::InvalidRequest("file path is empty".to_string()));
        }
        if instruction.trim().is_empty() {
            return Err(ApplyError::InvalidRequest("instruction is empty".to_string()));
        }

        Ok(Self {
            file_path,
            instruction,
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct Applied {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub usage: Option<TokenUsage>,
}

/// `notes.txt` → `notes.txt.updated`, next to the source.
pub fn updated_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(UPDATED_SUFFIX);
    PathBuf::from(name)
}

/// Run the whole read → prompt → submit → write chain once.
pub async fn apply(completer: &dyn Completer, request: &Request) -> Result<Applied, ApplyError> {
    let source = request.file_path();

    let bytes = tokio::fs::read(source)
        .await
        .map_err(|e| ApplyError::FileRead {
            path: source.to_path_buf(),
            source: e,
        })?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(
                path = %source.display(),
                valid_up_to = e.utf8_error().valid_up_to(),
                "source is not valid UTF-8, invalid bytes replaced with U+FFFD"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    tracing::debug!(path = %source.display(), bytes = content.len(), "read source file");

    let user = build_user_prompt(&content, request.instruction());
    let completion = completer
        .submit(system_prompt(), &user)
        .await
        .map_err(ApplyError::ServiceCall)?;

    let output_path = updated_path(source);
    write_output(&output_path, completion.text.as_bytes())
        .await
        .map_err(|e| ApplyError::FileWrite {
            path: output_path.clone(),
            source: e,
        })?;
    tracing::debug!(
        path = %output_path.display(),
        bytes = completion.text.len(),
        "wrote updated file"
    );

    Ok(Applied {
        output_path,
        bytes_written: completion.text.len(),
        usage: completion.usage,
    })
}

async fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(crate::consts::OUTPUT_MODE);

    let mut file = options.open(path).await?;
    file.write_all(data).await?;
    file.flush().await?;
    Ok(())
}
