pub mod openai;
mod prompt_builder;
mod prompts;
pub mod response;

use anyhow::Result;

/// Trait for the collaborator that turns a compressed diff into a message.
pub trait CommitMessageClient {
    /// Produce a one-shot commit message for the compressed diff, or fail if
    /// the model cannot be reached or its reply cannot be parsed.
    fn commit_message(&self, compressed_diff: &str) -> Result<String>;
}

/// Offline client for --no-model runs.
pub struct NoopClient;

impl CommitMessageClient for NoopClient {
    fn commit_message(&self, compressed_diff: &str) -> Result<String> {
        Ok(format!(
            "chore: placeholder commit message ({} chars of compressed diff, model disabled)",
            compressed_diff.len()
        ))
    }
}
