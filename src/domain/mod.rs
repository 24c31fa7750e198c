//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `payment` - Callback notification types, callback validation, and
//!   account-token derivation

pub mod payment;
