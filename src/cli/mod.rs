pub mod generate;
pub mod verify;

use anyhow::{bail, Result};

use crate::config::Config;

/// Refuse to touch the network without a configured API key. A missing
/// env var and an empty key both fail the same way, before any client
/// is constructed.
pub fn require_api_key(config: &Config) -> Result<()> {
    if config.get_api_key().unwrap_or_default().is_empty() {
        bail!("Please add your Google Gemini API key.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_require_api_key_with_no_env_var_configured() {
        let mut config = Config::default();
        config.llm.api_key_env = None;
        let err = require_api_key(&config).unwrap_err();
        assert_eq!(err.to_string(), "Please add your Google Gemini API key.");
    }

    #[test]
    fn test_require_api_key_with_unset_env_var() {
        let mut config = Config::default();
        config.llm.api_key_env = Some("QUERYGEN_TEST_UNSET_KEY_42424".to_string());
        let err = require_api_key(&config).unwrap_err();
        assert_eq!(err.to_string(), "Please add your Google Gemini API key.");
    }

    #[test]
    fn test_require_api_key_passes_when_key_present() {
        env::set_var("QUERYGEN_TEST_PRESENT_KEY_42424", "k123");
        let mut config = Config::default();
        config.llm.api_key_env = Some("QUERYGEN_TEST_PRESENT_KEY_42424".to_string());
        assert!(require_api_key(&config).is_ok());
        env::remove_var("QUERYGEN_TEST_PRESENT_KEY_42424");
    }
}
