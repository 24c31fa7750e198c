//! Blockonomics Bitcoin payment integration.
//!
//! This crate connects a merchant application to the Blockonomics API:
//! BTC/fiat exchange rates, receiving-address generation, and validation
//! of the asynchronous payment-notification callbacks the provider sends
//! once a payment hits an address.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
