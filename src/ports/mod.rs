//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CredentialStore` - Encrypted credential storage in the host application
//! - `BitcoinGateway` - Outbound price and address operations against the provider

mod credential_store;
mod gateway;

pub use credential_store::{CredentialStore, CredentialStoreError, DecryptionError};
pub use gateway::{BitcoinGateway, GatewayError, GatewayErrorCode};
