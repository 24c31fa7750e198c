//! Callback notification types.
//!
//! Defines the untrusted input the provider delivers as query parameters
//! and the trusted output produced once validation passes. Accepted fields
//! are carried through exactly as received: no trimming, no numeric
//! parsing, no enum-range checks. Interpreting `value` or `status` is the
//! caller's concern, after authentication.

use serde::{Deserialize, Serialize};

/// Raw payment notification exactly as delivered in the provider's
/// callback query string.
///
/// Every field is an untrusted, independently optional string. A web
/// layer can deserialize this directly from the request's query
/// parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallbackNotification {
    /// Transaction status: "0" unconfirmed, "1" partially confirmed,
    /// "2" confirmed.
    pub status: Option<String>,

    /// Id of the paying transaction.
    pub txid: Option<String>,

    /// Receiving address the payment was made to.
    pub addr: Option<String>,

    /// Received amount in satoshis.
    pub value: Option<String>,

    /// Replace-By-Fee flag, sometimes present on unconfirmed transactions.
    pub rbf: Option<String>,

    /// Shared callback secret configured with the provider.
    pub secret: Option<String>,
}

/// A payment notification that passed authentication.
///
/// Invariant: only produced by [`CallbackValidator`] when the inbound
/// secret matched the configured callback secret and `addr` was
/// non-empty. The `secret` field never appears here.
///
/// [`CallbackValidator`]: super::CallbackValidator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPayment {
    /// Transaction status, verbatim from the notification.
    pub status: Option<String>,

    /// Id of the paying transaction, verbatim.
    pub txid: Option<String>,

    /// Receiving address; guaranteed non-empty.
    pub addr: String,

    /// Received amount in satoshis, verbatim.
    pub value: Option<String>,

    /// Replace-By-Fee flag, verbatim.
    pub rbf: Option<String>,
}

impl ValidatedPayment {
    /// Interpret the raw `status` field, if it is one of the documented
    /// values. The stored string is left untouched.
    pub fn confirmation_status(&self) -> Option<ConfirmationStatus> {
        self.status.as_deref().and_then(ConfirmationStatus::parse)
    }
}

/// Confirmation level of the paying transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStatus {
    /// Seen in the mempool, no confirmations yet.
    Unconfirmed,

    /// Partially confirmed.
    PartiallyConfirmed,

    /// Confirmed; safe to fulfill the order.
    Confirmed,
}

impl ConfirmationStatus {
    /// Parse the provider's numeric status string.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(ConfirmationStatus::Unconfirmed),
            "1" => Some(ConfirmationStatus::PartiallyConfirmed),
            "2" => Some(ConfirmationStatus::Confirmed),
            _ => None,
        }
    }

    /// Check if the payment is fully confirmed.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmationStatus::Confirmed)
    }
}
