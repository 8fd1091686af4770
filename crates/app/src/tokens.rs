//! Random opaque token generation.

use rand::{rngs::OsRng, seq::SliceRandom};

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of an opaque access token.
pub const OPAQUE_TOKEN_LEN: usize = 26;

/// Prefix marking simulated payment transaction ids.
pub const TRANSACTION_ID_PREFIX: &str = "TESTE";

const TRANSACTION_ID_SUFFIX_LEN: usize = 13;

/// Random lowercase base36 string of `len` characters.
#[must_use]
pub fn base36(len: usize) -> String {
    let mut rng = OsRng;

    (0..len)
        .filter_map(|_| BASE36.choose(&mut rng).copied())
        .map(char::from)
        .collect()
}

/// Opaque token used for course access grants.
#[must_use]
pub fn opaque_token() -> String {
    base36(OPAQUE_TOKEN_LEN)
}

/// Transaction id attached to a simulated payment payload.
#[must_use]
pub fn transaction_id() -> String {
    format!("{TRANSACTION_ID_PREFIX}{}", base36(TRANSACTION_ID_SUFFIX_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_tokens_are_lowercase_base36() {
        let token = opaque_token();

        assert_eq!(token.len(), OPAQUE_TOKEN_LEN);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
            "unexpected character in {token}"
        );
    }

    #[test]
    fn opaque_tokens_differ_between_calls() {
        assert_ne!(opaque_token(), opaque_token());
    }

    #[test]
    fn transaction_ids_carry_the_test_prefix() {
        let txid = transaction_id();

        assert!(txid.starts_with(TRANSACTION_ID_PREFIX));
        assert_eq!(txid.len(), TRANSACTION_ID_PREFIX.len() + 13);
    }
}
