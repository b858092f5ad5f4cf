use anyhow::{bail, Result};
use tracing::info;

use crate::config::Config;
use crate::llm::factory;

/// Standalone key verification: one minimal generation request.
pub async fn run(config_path: Option<String>) -> Result<()> {
    let config = Config::load_with_path(config_path)?;

    super::require_api_key(&config)?;

    let client = factory::create_client(&config, false)?;

    info!("Verifying API key");
    if client.verify_key().await {
        println!("API key is valid.");
        Ok(())
    } else {
        bail!("API key is invalid. Please check and try again.");
    }
}
