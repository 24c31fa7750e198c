//! Blockonomics provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Production base URL for the Blockonomics API.
pub const DEFAULT_BASE_URL: &str = "https://www.blockonomics.co/api";

/// Blockonomics API configuration.
///
/// Covers the outbound side only; credentials (API key, callback secret,
/// wallet xpub) are loaded separately through the `CredentialStore` port
/// because they live encrypted in the host application's settings store.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the provider API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fiat currency used when a price lookup does not name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_currency: default_currency(),
        }
    }
}

impl ProviderConfig {
    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("BLOCKONOMICS__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.default_currency.len() != 3
            || !self.default_currency.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}
