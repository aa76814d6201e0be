//! Interactive input acquisition.
//!
//! The setup pipeline sources each field from a pre-supplied command-line
//! option or, when absent, from a [`Prompt`]. Prompting is raw acquisition
//! only; field validators are applied by the pipeline afterwards, and a
//! rejected value is not re-prompted.

use crate::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// Source of interactively supplied values.
#[async_trait]
pub trait Prompt: Send + Sync {
    /// Reads a line of visible input.
    async fn text(&self, message: &str) -> Result<String>;

    /// Reads a line of hidden input, for values that must not echo.
    async fn hidden(&self, message: &str) -> Result<String>;
}

/// Terminal-backed [`Prompt`] using dialoguer.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    /// Creates a terminal prompt.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompt for TerminalPrompt {
    async fn text(&self, message: &str) -> Result<String> {
        let value = dialoguer::Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(anyhow::Error::from)?;
        Ok(value)
    }

    async fn hidden(&self, message: &str) -> Result<String> {
        let value = dialoguer::Password::new()
            .with_prompt(message)
            .allow_empty_password(true)
            .interact()
            .map_err(anyhow::Error::from)?;
        Ok(value)
    }
}

/// Scripted [`Prompt`] for tests.
///
/// Answers are handed out in order regardless of whether the pipeline asked
/// for visible or hidden input; every message asked is recorded so tests can
/// assert which fields fell back to prompting. Running out of script is an
/// error, meaning the code under test prompted more than the test allowed.
pub struct ScriptedPrompt {
    responses: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    /// Creates a prompt that will answer with `responses`, in order.
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Messages asked so far, in order.
    pub async fn asked(&self) -> Vec<String> {
        self.asked.lock().await.clone()
    }

    async fn next(&self, message: &str) -> Result<String> {
        self.asked.lock().await.push(message.to_string());
        self.responses.lock().await.pop_front().ok_or_else(|| {
            anyhow::anyhow!("scripted prompt exhausted: no response for {message:?}").into()
        })
    }
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn text(&self, message: &str) -> Result<String> {
        self.next(message).await
    }

    async fn hidden(&self, message: &str) -> Result<String> {
        self.next(message).await
    }
}
