//! Credential store port for encrypted configuration values.
//!
//! The host application keeps provider credentials (API key, callback
//! secret, wallet xpub) encrypted in its settings store. This port is the
//! contract the adapter consumes: look up the ciphertext by key, then
//! decrypt it. The adapter never sees the encryption key itself.

use async_trait::async_trait;
use thiserror::Error;

/// Port for reading encrypted credentials from the host application.
///
/// Implementations own both storage and decryption. Each credential is
/// independently optional: a missing or undecryptable value for one key
/// must not affect reads of the others.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch the stored ciphertext for a settings key.
    ///
    /// Returns `Ok(None)` when the key has never been configured.
    async fn get_encrypted_value(&self, key: &str)
        -> Result<Option<String>, CredentialStoreError>;

    /// Decrypt a stored ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `DecryptionError` for malformed ciphertext or a ciphertext
    /// produced under a different encryption key (e.g. after key rotation).
    fn decrypt(&self, ciphertext: &str) -> Result<String, DecryptionError>;
}

/// Errors from credential lookups.
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    /// The underlying settings store could not be read.
    #[error("Credential lookup failed: {0}")]
    Lookup(String),
}

/// Errors from decrypting a stored credential.
#[derive(Debug, Error)]
pub enum DecryptionError {
    /// Ciphertext is not in the expected format.
    #[error("Malformed ciphertext")]
    MalformedCiphertext,

    /// Ciphertext was produced under a different encryption key.
    #[error("Decryption key mismatch")]
    KeyMismatch,
}
