//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `blockonomics` - HTTP client for the provider API plus adapter wiring
//! - `credentials` - Credential loading over the `CredentialStore` port

pub mod blockonomics;
pub mod credentials;

pub use blockonomics::{BlockonomicsAdapter, BlockonomicsClient};
pub use credentials::{Credentials, MockCredentialStore};
