//! Credential loading over the `CredentialStore` port.
//!
//! - `Credentials` - immutable credential set loaded once per adapter
//!   instance, with per-field decryption-failure isolation
//! - `MockCredentialStore` - in-memory store for tests

mod loader;
mod mock_store;

pub use loader::{
    Credentials, API_KEY_KEY, CALLBACK_SECRET_KEY, WALLET_XPUB_KEY,
};
pub use mock_store::MockCredentialStore;
