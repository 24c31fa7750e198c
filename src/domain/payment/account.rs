//! Account-matching token derivation.
//!
//! Blockonomics matches `new_address` requests to a merchant wallet by a
//! short substring of the stored xpub rather than the full key. This is a
//! provider convention, not a cryptographic derivation; the full xpub is
//! never sent over the wire.

/// Byte offset into the raw xpub where the token starts.
pub const ACCOUNT_TOKEN_OFFSET: usize = 4;

/// Token length in bytes.
pub const ACCOUNT_TOKEN_LEN: usize = 6;

/// Derive the provider's account-matching token from a raw xpub string.
///
/// Returns the 6 characters starting at offset 4, or `None` when the
/// string is too short to contain them.
pub fn derive_account_token(xpub: &str) -> Option<String> {
    xpub.get(ACCOUNT_TOKEN_OFFSET..ACCOUNT_TOKEN_OFFSET + ACCOUNT_TOKEN_LEN)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_token_from_mainnet_xpub() {
        let xpub = "xpub6CUGRUonZSQ4TWtTMmzXdrXDtypWKiKrhko4egpiMZbpiaQL2jkwSB1icqYh2cfDfVxdx4df189oLKnC5fSwqPfgyP3hooxujYzAu3fDVmz";
        assert_eq!(derive_account_token(xpub), Some("6CUGRU".to_string()));
    }

    #[test]
    fn token_is_six_chars_from_offset_four() {
        assert_eq!(derive_account_token("0123456789ab"), Some("456789".to_string()));
    }

    #[test]
    fn exact_length_input_yields_token() {
        // Offset 4 + length 6 needs exactly 10 characters.
        assert_eq!(derive_account_token("xpub6CUGRU"), Some("6CUGRU".to_string()));
    }

    #[test]
    fn short_input_yields_none() {
        assert_eq!(derive_account_token(""), None);
        assert_eq!(derive_account_token("xpub"), None);
        assert_eq!(derive_account_token("xpub6CUGR"), None);
    }
}
