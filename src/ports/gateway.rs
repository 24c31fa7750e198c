//! Bitcoin payment gateway port.
//!
//! Defines the contract for the provider's two outbound operations: price
//! lookup and receiving-address generation. Both are single stateless
//! round trips; failures are ordinary values so callers can treat "price
//! unavailable" or "no address issued" as normal outcomes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for the Blockonomics-style payment gateway.
///
/// Implementations must never let a transport or parsing failure escape
/// as anything other than a [`GatewayError`] value.
#[async_trait]
pub trait BitcoinGateway: Send + Sync {
    /// Fetch the current BTC price in the given fiat currency.
    async fn btc_price(&self, currency: &str) -> Result<f64, GatewayError>;

    /// Request a receiving address for the configured account.
    ///
    /// With `reset = false` the provider keeps returning the outstanding
    /// address until it is paid or rotated, so repeated calls are
    /// idempotent. With `reset = true` the provider rotates the address;
    /// concurrent resets for the same account race at the provider and
    /// must be serialized by the caller if that matters.
    async fn new_address(&self, reset: bool) -> Result<String, GatewayError>;
}

/// Errors from gateway operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl GatewayError {
    /// Create a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: code.is_retryable(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    /// Create an unexpected-status error.
    pub fn status(status: u16) -> Self {
        Self::new(
            GatewayErrorCode::UnexpectedStatus,
            format!("Provider returned HTTP {}", status),
        )
    }

    /// Create a malformed-response error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::MalformedResponse, message)
    }

    /// Create an unconfigured-credential error.
    pub fn unconfigured(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Unconfigured, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Network connectivity issue or transport timeout.
    NetworkError,

    /// Provider responded with a non-success HTTP status.
    UnexpectedStatus,

    /// Provider response body could not be parsed.
    MalformedResponse,

    /// A required credential (API key, wallet xpub) is not configured.
    Unconfigured,
}

impl GatewayErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GatewayErrorCode::NetworkError | GatewayErrorCode::UnexpectedStatus
        )
    }
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::UnexpectedStatus => "unexpected_status",
            GatewayErrorCode::MalformedResponse => "malformed_response",
            GatewayErrorCode::Unconfigured => "unconfigured",
        };
        write!(f, "{}", s)
    }
}
