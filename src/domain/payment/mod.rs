//! Payment domain module.
//!
//! Handles the inbound side of the integration: the notification the
//! provider posts when a payment lands, and the validation that decides
//! whether that notification is authentic.
//!
//! # Module Structure
//!
//! - `account` - Account-matching token derivation from a wallet xpub
//! - `notification` - Untrusted callback input and trusted validated output
//! - `validator` - CallbackValidator, the correctness core of the adapter

mod account;
mod notification;
mod validator;

pub use account::{derive_account_token, ACCOUNT_TOKEN_LEN, ACCOUNT_TOKEN_OFFSET};
pub use notification::{CallbackNotification, ConfirmationStatus, ValidatedPayment};
pub use validator::{CallbackOutcome, CallbackValidator, RejectReason};
