use anyhow::Result;

use super::client::{MockModelClient, ModelClient};
use super::gemini::GeminiClient;
use crate::config::Config;

/// Create a model client based on configuration.
pub fn create_client(config: &Config, dry_run: bool) -> Result<Box<dyn ModelClient>> {
    if dry_run {
        return Ok(Box::new(MockModelClient::new()));
    }

    let api_key = config.get_api_key()?;
    let client = GeminiClient::new(
        api_key,
        config.llm.model.clone(),
        config.llm.timeout_secs,
    )?;

    Ok(Box::new(match config.llm.base_url {
        Some(ref base_url) => client.with_base_url(base_url.clone()),
        None => client,
    }))
}
