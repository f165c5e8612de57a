use anyhow::{Result, anyhow};
use log::debug;

use crate::config::Config;
use crate::llm::openai::OpenAiClient;
use crate::llm::{CommitMessageClient, NoopClient};

/// Build the commit-message client based on CLI + config.
pub fn build_client(cfg: &Config, no_model: bool) -> Result<Box<dyn CommitMessageClient>> {
    if no_model || cfg.model.eq_ignore_ascii_case("none") {
        debug!("Using NoopClient (no model calls)");
        return Ok(Box::new(NoopClient));
    }

    let key = cfg.openai_api_key.clone().ok_or_else(|| {
        anyhow!("OPENAI_API_KEY (or --api-key) is required unless --no-model or model=none is used")
    })?;

    debug!("Using OpenAiClient with model: {}", cfg.model);

    let client = OpenAiClient::new(key, cfg.model.clone(), cfg.api_base_url.clone())?;
    Ok(Box::new(client))
}
