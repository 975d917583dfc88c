pub mod mock;
pub mod openai;

use anyhow::Result;
use async_trait::async_trait;

/// Token usage from a single completion call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Total tokens (input + output).
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// The text a service returned, plus whatever usage it reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

/// Something that turns a system directive and a user message into text.
/// Could be a hosted model or a test stub.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn submit(&self, system: &str, user: &str) -> Result<Completion>;
}
