//! Blockonomics HTTP client.
//!
//! Implements the `BitcoinGateway` port with two stateless round trips:
//! no retries, no caching, transport-default timeouts only. Every
//! transport or parsing failure is converted to a [`GatewayError`] value
//! at this boundary; nothing propagates further.

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::ProviderConfig;
use crate::ports::{BitcoinGateway, GatewayError};

use super::super::credentials::Credentials;
use super::types::{NewAddressResponse, PriceResponse};

/// HTTP client for the Blockonomics API.
pub struct BlockonomicsClient {
    config: ProviderConfig,
    credentials: Credentials,
    http_client: reqwest::Client,
}

impl BlockonomicsClient {
    /// Create a client with the given configuration and credentials.
    pub fn new(config: ProviderConfig, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetch the BTC price in the configured default currency.
    pub async fn btc_price_default(&self) -> Result<f64, GatewayError> {
        let currency = self.config.default_currency.clone();
        self.btc_price(&currency).await
    }
}

#[async_trait]
impl BitcoinGateway for BlockonomicsClient {
    async fn btc_price(&self, currency: &str) -> Result<f64, GatewayError> {
        let url = format!("{}/price", self.config.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("currency", currency)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, currency, "Price lookup failed");
                GatewayError::network(e.to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!(
                status = response.status().as_u16(),
                currency,
                "Price endpoint returned non-success status"
            );
            return Err(GatewayError::status(response.status().as_u16()));
        }

        let quote: PriceResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse price response");
            GatewayError::malformed_response(e.to_string())
        })?;

        Ok(quote.price)
    }

    async fn new_address(&self, reset: bool) -> Result<String, GatewayError> {
        let account_token = self.credentials.account_token();
        if account_token.is_empty() {
            return Err(GatewayError::unconfigured(
                "wallet xpub is not configured; cannot derive an account token",
            ));
        }

        let url = format!("{}/new_address", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .query(&[
                ("match_account", account_token),
                ("reset", if reset { "1" } else { "0" }),
            ])
            .bearer_auth(self.credentials.api_key().expose_secret())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, reset, "Address generation failed");
                GatewayError::network(e.to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!(
                status = response.status().as_u16(),
                reset,
                "New-address endpoint returned non-success status"
            );
            return Err(GatewayError::status(response.status().as_u16()));
        }

        let issued: NewAddressResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse new-address response");
            GatewayError::malformed_response(e.to_string())
        })?;

        tracing::info!(address = %issued.address, reset, "Receiving address issued");
        Ok(issued.address)
    }
}
