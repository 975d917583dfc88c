use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::Mutex;

use super::{Completer, Completion};

/// A scripted completer for tests. Always answers the same way and
/// remembers every prompt it was given.
pub struct MockCompleter {
    reply: std::result::Result<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockCompleter {
    /// Reply with `text` on every call.
    pub fn echo(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail with `message` on every call.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(system, user)` pair submitted so far, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Completer for MockCompleter {
    async fn submit(&self, system: &str, user: &str) -> Result<Completion> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        match &self.reply {
            Ok(text) => Ok(Completion {
                text: text.clone(),
                usage: None,
            }),
            Err(message) => bail!("MockCompleter: {message}"),
        }
    }
}
