//! Payment callback validation.
//!
//! The correctness core of the adapter: decides whether an inbound
//! notification is authentic and, if so, produces a normalized
//! [`ValidatedPayment`]. A forged or malformed callback must never come
//! out the accepting side.
//!
//! # Security
//!
//! - Secret comparison is constant-time (`subtle`) to avoid timing side
//!   channels; the accept/reject outcome is identical to plain equality
//! - An unconfigured (empty) secret rejects every callback, including one
//!   whose own secret field is blank
//! - Rejection is a plain negative value, never an error: the web layer
//!   maps it to whatever acknowledgement the provider's retry policy needs

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use super::notification::{CallbackNotification, ValidatedPayment};

/// Validator for inbound payment callbacks.
///
/// Stateless per call; holds only the immutable callback secret captured
/// at construction. Each invocation is judged independently: repeated
/// callbacks for the same transaction at different confirmation levels
/// are all individually valid, and deduplication is the caller's job.
pub struct CallbackValidator {
    /// Shared secret configured out-of-band with the provider.
    callback_secret: SecretString,
}

/// Outcome of validating one callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The callback is authentic; fields are preserved verbatim.
    Accepted(ValidatedPayment),

    /// The callback was ignored. The reason is diagnostic only and must
    /// not be echoed back to the caller of the webhook endpoint.
    Rejected(RejectReason),
}

impl CallbackOutcome {
    /// Check whether the callback was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, CallbackOutcome::Accepted(_))
    }

    /// Extract the validated payment, if accepted.
    pub fn into_payment(self) -> Option<ValidatedPayment> {
        match self {
            CallbackOutcome::Accepted(payment) => Some(payment),
            CallbackOutcome::Rejected(_) => None,
        }
    }
}

/// Why a callback was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No callback secret has been configured; nothing can be accepted.
    SecretUnconfigured,

    /// The inbound secret did not match the configured one.
    SecretMismatch,

    /// The notification carried no receiving address, so it cannot be
    /// attributed to any pending payment.
    MissingAddress,
}

impl CallbackValidator {
    /// Create a validator from a plain secret string.
    pub fn new(callback_secret: impl Into<String>) -> Self {
        Self {
            callback_secret: SecretString::new(callback_secret.into()),
        }
    }

    /// Create a validator from an already-wrapped secret.
    pub fn from_secret(callback_secret: SecretString) -> Self {
        Self { callback_secret }
    }

    /// Validate an inbound notification.
    ///
    /// # Validation Steps
    ///
    /// 1. Reject outright if no secret is configured
    /// 2. Compare the inbound secret against the configured one
    ///    (constant-time)
    /// 3. Require a non-empty receiving address
    /// 4. Accept, carrying `status`, `txid`, `addr`, `value` and `rbf`
    ///    through unchanged
    pub fn validate(&self, notification: &CallbackNotification) -> CallbackOutcome {
        let configured = self.callback_secret.expose_secret();

        // An empty configured secret means the integration is not set up;
        // it must not be treated as matching an empty inbound secret.
        if configured.is_empty() {
            tracing::warn!("Callback rejected: no callback secret configured");
            return CallbackOutcome::Rejected(RejectReason::SecretUnconfigured);
        }

        let provided = notification.secret.as_deref().unwrap_or("");
        if !constant_time_compare(provided.as_bytes(), configured.as_bytes()) {
            tracing::warn!(
                txid = notification.txid.as_deref().unwrap_or(""),
                "Callback rejected: secret mismatch"
            );
            return CallbackOutcome::Rejected(RejectReason::SecretMismatch);
        }

        let addr = match notification.addr.as_deref() {
            Some(addr) if !addr.is_empty() => addr.to_string(),
            _ => {
                tracing::warn!(
                    txid = notification.txid.as_deref().unwrap_or(""),
                    "Callback rejected: missing receiving address"
                );
                return CallbackOutcome::Rejected(RejectReason::MissingAddress);
            }
        };

        let payment = ValidatedPayment {
            status: notification.status.clone(),
            txid: notification.txid.clone(),
            addr,
            value: notification.value.clone(),
            rbf: notification.rbf.clone(),
        };

        tracing::info!(
            txid = payment.txid.as_deref().unwrap_or(""),
            addr = %payment.addr,
            status = payment.status.as_deref().unwrap_or(""),
            "Payment callback accepted"
        );

        CallbackOutcome::Accepted(payment)
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// The length check short-circuits, which leaks only the secret's length,
/// not its contents.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
