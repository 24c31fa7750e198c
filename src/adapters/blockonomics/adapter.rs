//! Adapter wiring.
//!
//! Construction-time assembly of the whole integration: credentials are
//! read from the store exactly once, then split between the outbound
//! client (API key, account token) and the callback validator (callback
//! secret). The two halves share nothing else; the validator works even
//! when every outbound credential failed to load.

use crate::config::ProviderConfig;
use crate::domain::payment::{CallbackNotification, CallbackOutcome, CallbackValidator};
use crate::ports::{BitcoinGateway, CredentialStore, GatewayError};

use super::super::credentials::Credentials;
use super::client::BlockonomicsClient;

/// The assembled Blockonomics integration.
///
/// Credentials are immutable for the life of the instance; construct a
/// new adapter to pick up rotated settings.
pub struct BlockonomicsAdapter {
    client: BlockonomicsClient,
    validator: CallbackValidator,
}

impl BlockonomicsAdapter {
    /// Build an adapter by reading credentials from the store once.
    ///
    /// Never fails: missing or undecryptable credentials leave the
    /// corresponding capability unconfigured (outbound calls return
    /// `GatewayError::unconfigured`-class failures, callbacks are all
    /// rejected) rather than aborting construction.
    pub async fn from_store(config: ProviderConfig, store: &dyn CredentialStore) -> Self {
        let credentials = Credentials::load(store).await;
        Self::from_credentials(config, credentials)
    }

    /// Build an adapter from already-loaded credentials.
    pub fn from_credentials(config: ProviderConfig, credentials: Credentials) -> Self {
        let validator = CallbackValidator::from_secret(credentials.callback_secret().clone());
        let client = BlockonomicsClient::new(config, credentials);
        Self { client, validator }
    }

    /// The outbound API client.
    pub fn client(&self) -> &BlockonomicsClient {
        &self.client
    }

    /// The callback validator. Stateless per call; safe to use from a
    /// webhook handler deployed separately from the outbound side.
    pub fn validator(&self) -> &CallbackValidator {
        &self.validator
    }

    /// Fetch the current BTC price.
    pub async fn btc_price(&self, currency: &str) -> Result<f64, GatewayError> {
        self.client.btc_price(currency).await
    }

    /// Request (or with `reset`, rotate) the receiving address.
    pub async fn new_address(&self, reset: bool) -> Result<String, GatewayError> {
        self.client.new_address(reset).await
    }

    /// Validate an inbound payment callback.
    pub fn handle_callback(&self, notification: &CallbackNotification) -> CallbackOutcome {
        self.validator.validate(notification)
    }
}
