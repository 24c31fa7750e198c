//! Credential loading with per-field failure isolation.
//!
//! The three provider credentials are read once, at adapter construction,
//! through the [`CredentialStore`] port. Each field is loaded inside its
//! own fallible boundary: a rotated encryption key that breaks the stored
//! API key must not take callback validation down with it. Failures are
//! surfaced as `tracing` diagnostics and the field is simply left empty.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::payment::derive_account_token;
use crate::ports::CredentialStore;

/// Settings key for the callback secret.
pub const CALLBACK_SECRET_KEY: &str = "blockonomics_callback_secret";

/// Settings key for the API key.
pub const API_KEY_KEY: &str = "blockonomics_api_key";

/// Settings key for the wallet xpub.
pub const WALLET_XPUB_KEY: &str = "blockonomics_wallet_xpub";

/// Immutable credential set for one adapter instance.
///
/// Re-reading the store requires constructing a new instance. The wallet
/// xpub is reduced to the short account-matching token at load time; the
/// full key is never retained.
#[derive(Clone)]
pub struct Credentials {
    callback_secret: SecretString,
    api_key: SecretString,
    account_token: String,
}

impl Credentials {
    /// Load all three credentials from the store.
    ///
    /// Never fails: a missing or undecryptable value leaves the
    /// corresponding field empty and is reported through `tracing`.
    pub async fn load(store: &dyn CredentialStore) -> Self {
        let callback_secret = load_field(store, CALLBACK_SECRET_KEY).await;
        let api_key = load_field(store, API_KEY_KEY).await;

        let xpub = load_field(store, WALLET_XPUB_KEY).await;
        let account_token = match derive_account_token(&xpub) {
            Some(token) => token,
            None => {
                if !xpub.is_empty() {
                    tracing::warn!(
                        key = WALLET_XPUB_KEY,
                        "Stored xpub too short to derive an account token"
                    );
                }
                String::new()
            }
        };

        Self {
            callback_secret: SecretString::new(callback_secret),
            api_key: SecretString::new(api_key),
            account_token,
        }
    }

    /// Build credentials directly from plaintext values (tests, callers
    /// that manage storage themselves). The xpub is reduced to its
    /// account token exactly as [`Credentials::load`] does.
    pub fn from_plain(
        callback_secret: impl Into<String>,
        api_key: impl Into<String>,
        xpub: &str,
    ) -> Self {
        Self {
            callback_secret: SecretString::new(callback_secret.into()),
            api_key: SecretString::new(api_key.into()),
            account_token: derive_account_token(xpub).unwrap_or_default(),
        }
    }

    /// The shared callback secret; empty when unconfigured.
    pub fn callback_secret(&self) -> &SecretString {
        &self.callback_secret
    }

    /// The provider API key; empty when unconfigured.
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// The xpub-derived account-matching token; empty when the xpub is
    /// unconfigured or too short.
    pub fn account_token(&self) -> &str {
        &self.account_token
    }

    /// Check whether a callback secret is configured.
    pub fn has_callback_secret(&self) -> bool {
        !self.callback_secret.expose_secret().is_empty()
    }
}

/// Load and decrypt one settings value; empty string on any failure.
async fn load_field(store: &dyn CredentialStore, key: &str) -> String {
    let ciphertext = match store.get_encrypted_value(key).await {
        Ok(Some(ciphertext)) if !ciphertext.is_empty() => ciphertext,
        Ok(_) => return String::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Credential lookup failed");
            return String::new();
        }
    };

    match store.decrypt(&ciphertext) {
        Ok(plaintext) => plaintext,
        Err(e) => {
            tracing::warn!(key, error = %e, "Credential decryption failed; leaving value unset");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::credentials::MockCredentialStore;

    const XPUB: &str = "xpub6CUGRUonZSQ4TWtTMmzXdrXDtypWKiKrhko4egpiMZbpiaQL2jk";

    #[tokio::test]
    async fn loads_all_three_credentials() {
        let store = MockCredentialStore::new()
            .with_value(CALLBACK_SECRET_KEY, "s3cr3t")
            .with_value(API_KEY_KEY, "api-key-123")
            .with_value(WALLET_XPUB_KEY, XPUB);

        let credentials = Credentials::load(&store).await;

        assert_eq!(credentials.callback_secret().expose_secret(), "s3cr3t");
        assert_eq!(credentials.api_key().expose_secret(), "api-key-123");
        assert_eq!(credentials.account_token(), "6CUGRU");
        assert!(credentials.has_callback_secret());
    }

    #[tokio::test]
    async fn missing_values_load_as_empty() {
        let store = MockCredentialStore::new();

        let credentials = Credentials::load(&store).await;

        assert_eq!(credentials.callback_secret().expose_secret(), "");
        assert_eq!(credentials.api_key().expose_secret(), "");
        assert_eq!(credentials.account_token(), "");
        assert!(!credentials.has_callback_secret());
    }

    #[tokio::test]
    async fn corrupt_api_key_does_not_disturb_other_fields() {
        let store = MockCredentialStore::new()
            .with_value(CALLBACK_SECRET_KEY, "s3cr3t")
            .with_raw_value(API_KEY_KEY, "garbage-ciphertext")
            .with_value(WALLET_XPUB_KEY, XPUB);

        let credentials = Credentials::load(&store).await;

        assert_eq!(credentials.api_key().expose_secret(), "");
        assert_eq!(credentials.callback_secret().expose_secret(), "s3cr3t");
        assert_eq!(credentials.account_token(), "6CUGRU");
    }

    #[tokio::test]
    async fn corrupt_callback_secret_leaves_it_unconfigured() {
        let store = MockCredentialStore::new()
            .with_raw_value(CALLBACK_SECRET_KEY, "garbage")
            .with_value(API_KEY_KEY, "api-key-123");

        let credentials = Credentials::load(&store).await;

        assert!(!credentials.has_callback_secret());
        assert_eq!(credentials.api_key().expose_secret(), "api-key-123");
    }

    #[tokio::test]
    async fn short_xpub_yields_no_account_token() {
        let store = MockCredentialStore::new().with_value(WALLET_XPUB_KEY, "xpub6");

        let credentials = Credentials::load(&store).await;

        assert_eq!(credentials.account_token(), "");
    }

    #[test]
    fn from_plain_derives_account_token() {
        let credentials = Credentials::from_plain("s3cr3t", "key", XPUB);
        assert_eq!(credentials.account_token(), "6CUGRU");
    }
}
