//! Blockonomics provider adapter.
//!
//! Implements the `BitcoinGateway` port against the Blockonomics HTTP
//! API and wires the callback validator to the stored callback secret.
//!
//! # Security
//!
//! - API key sent as a Bearer credential, held in `secrecy::SecretString`
//! - Callback secrets compared constant-time in the domain validator
//! - Outbound failures resolve to `GatewayError` values, never panics

mod adapter;
mod client;
mod types;

pub use adapter::BlockonomicsAdapter;
pub use client::BlockonomicsClient;
pub use types::{NewAddressResponse, PriceResponse};
