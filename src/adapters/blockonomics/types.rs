//! Blockonomics API wire types.
//!
//! Only the fields this adapter consumes are captured; anything else in
//! the provider's responses is ignored.

use serde::Deserialize;

/// Response body of `GET /price`.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse {
    /// BTC price in the requested fiat currency.
    pub price: f64,
}

/// Response body of `POST /new_address`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAddressResponse {
    /// The receiving address issued for the account.
    pub address: String,
}
