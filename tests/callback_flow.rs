//! End-to-end callback flow tests.
//!
//! Builds the full adapter from a mock credential store and drives the
//! core callback scenarios through it: acceptance with field identity,
//! rejection on a wrong or unconfigured secret, and isolation of a
//! corrupt credential from the validation path.

use blockonomics_adapter::adapters::blockonomics::BlockonomicsAdapter;
use blockonomics_adapter::adapters::credentials::{
    MockCredentialStore, API_KEY_KEY, CALLBACK_SECRET_KEY, WALLET_XPUB_KEY,
};
use blockonomics_adapter::config::ProviderConfig;
use blockonomics_adapter::domain::payment::{
    CallbackNotification, CallbackOutcome, ConfirmationStatus, RejectReason,
};

const XPUB: &str = "xpub6CUGRUonZSQ4TWtTMmzXdrXDtypWKiKrhko4egpiMZbpiaQL2jk";

/// Route the adapter's tracing diagnostics through the test harness.
/// Run with `RUST_LOG=blockonomics_adapter=debug` to see rejection
/// reasons and credential-loading warnings per test.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn configured_store() -> MockCredentialStore {
    init_tracing();
    MockCredentialStore::new()
        .with_value(CALLBACK_SECRET_KEY, "s3cr3t")
        .with_value(API_KEY_KEY, "api-key-123")
        .with_value(WALLET_XPUB_KEY, XPUB)
}

fn example_notification(secret: &str) -> CallbackNotification {
    CallbackNotification {
        status: Some("2".to_string()),
        txid: Some("abc123".to_string()),
        addr: Some("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string()),
        value: Some("5000000".to_string()),
        rbf: None,
        secret: Some(secret.to_string()),
    }
}

#[tokio::test]
async fn accepted_callback_preserves_every_field() {
    let adapter =
        BlockonomicsAdapter::from_store(ProviderConfig::default(), &configured_store()).await;

    let payment = adapter
        .handle_callback(&example_notification("s3cr3t"))
        .into_payment()
        .expect("callback should be accepted");

    assert_eq!(payment.status.as_deref(), Some("2"));
    assert_eq!(payment.txid.as_deref(), Some("abc123"));
    assert_eq!(payment.addr, "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
    assert_eq!(payment.value.as_deref(), Some("5000000"));
    assert_eq!(payment.rbf, None);
    assert_eq!(
        payment.confirmation_status(),
        Some(ConfirmationStatus::Confirmed)
    );
}

#[tokio::test]
async fn wrong_secret_is_rejected() {
    let adapter =
        BlockonomicsAdapter::from_store(ProviderConfig::default(), &configured_store()).await;

    let outcome = adapter.handle_callback(&example_notification("wrong"));

    assert_eq!(outcome, CallbackOutcome::Rejected(RejectReason::SecretMismatch));
}

#[tokio::test]
async fn address_less_callback_is_rejected() {
    let adapter =
        BlockonomicsAdapter::from_store(ProviderConfig::default(), &configured_store()).await;

    let mut notification = example_notification("s3cr3t");
    notification.addr = None;

    let outcome = adapter.handle_callback(&notification);

    assert_eq!(outcome, CallbackOutcome::Rejected(RejectReason::MissingAddress));
}

#[tokio::test]
async fn store_without_callback_secret_rejects_everything() {
    init_tracing();
    let store = MockCredentialStore::new()
        .with_value(API_KEY_KEY, "api-key-123")
        .with_value(WALLET_XPUB_KEY, XPUB);
    let adapter = BlockonomicsAdapter::from_store(ProviderConfig::default(), &store).await;

    let mut blank = example_notification("");
    assert!(!adapter.handle_callback(&blank).is_accepted());

    blank.secret = None;
    assert!(!adapter.handle_callback(&blank).is_accepted());
}

#[tokio::test]
async fn corrupt_api_key_does_not_break_callback_validation() {
    init_tracing();
    let store = MockCredentialStore::new()
        .with_value(CALLBACK_SECRET_KEY, "s3cr3t")
        .with_raw_value(API_KEY_KEY, "ciphertext-from-a-rotated-key")
        .with_value(WALLET_XPUB_KEY, XPUB);
    let adapter = BlockonomicsAdapter::from_store(ProviderConfig::default(), &store).await;

    assert!(adapter
        .handle_callback(&example_notification("s3cr3t"))
        .is_accepted());
}

#[tokio::test]
async fn repeated_callbacks_are_judged_independently() {
    // No deduplication: the same txid at increasing confirmation levels
    // is valid every time. Tracking transitions is the caller's job.
    let adapter =
        BlockonomicsAdapter::from_store(ProviderConfig::default(), &configured_store()).await;

    for status in ["0", "1", "2"] {
        let mut notification = example_notification("s3cr3t");
        notification.status = Some(status.to_string());
        assert!(adapter.handle_callback(&notification).is_accepted());
    }
}
