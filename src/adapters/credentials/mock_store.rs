//! In-memory credential store for testing.
//!
//! The "encryption" is an `enc:` prefix on the plaintext, which makes a
//! corrupt or foreign-key ciphertext trivial to simulate: store anything
//! without the prefix and `decrypt` fails.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::ports::{CredentialStore, CredentialStoreError, DecryptionError};

/// Ciphertext prefix recognized by the mock's `decrypt`.
const CIPHERTEXT_PREFIX: &str = "enc:";

/// Mock credential store backed by a `HashMap`.
///
/// # Example
///
/// ```
/// use blockonomics_adapter::adapters::credentials::MockCredentialStore;
///
/// let store = MockCredentialStore::new()
///     .with_value("blockonomics_api_key", "api-key-123")
///     .with_raw_value("blockonomics_callback_secret", "corrupt");
/// ```
#[derive(Default)]
pub struct MockCredentialStore {
    values: HashMap<String, String>,
}

impl MockCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value that will decrypt to `plaintext`.
    pub fn with_value(mut self, key: impl Into<String>, plaintext: &str) -> Self {
        self.values
            .insert(key.into(), format!("{CIPHERTEXT_PREFIX}{plaintext}"));
        self
    }

    /// Store a raw ciphertext as-is. Anything without the `enc:` prefix
    /// will fail decryption, simulating corruption or key rotation.
    pub fn with_raw_value(mut self, key: impl Into<String>, ciphertext: &str) -> Self {
        self.values.insert(key.into(), ciphertext.to_string());
        self
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn get_encrypted_value(
        &self,
        key: &str,
    ) -> Result<Option<String>, CredentialStoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, DecryptionError> {
        ciphertext
            .strip_prefix(CIPHERTEXT_PREFIX)
            .map(str::to_string)
            .ok_or(DecryptionError::MalformedCiphertext)
    }
}
