//! PKCE helpers: code verifier generation and S256 challenge derivation.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Default code-verifier length in characters (RFC 7636 allows 43–128).
pub const DEFAULT_VERIFIER_LENGTH: usize = 128;

/// Length of the generated CSRF state nonce.
const STATE_LENGTH: usize = 16;

/// PKCE code verifier and challenge pair.
#[derive(Debug, Clone)]
pub struct PkceChallenge {
    pub verifier: String,
    pub challenge: String,
}

impl PkceChallenge {
    /// Generate a new pair with the default verifier length.
    pub fn generate() -> Self {
        Self::generate_with_length(DEFAULT_VERIFIER_LENGTH)
    }

    /// Generate a new pair with an explicit verifier length.
    pub fn generate_with_length(length: usize) -> Self {
        let verifier = generate_code_verifier(length);
        let challenge = derive_code_challenge(&verifier);
        Self {
            verifier,
            challenge,
        }
    }
}

/// Generate a random code verifier: hex encoding of `length / 2`
/// cryptographically random bytes, so the result has exactly `length`
/// characters for even `length`.
pub fn generate_code_verifier(length: usize) -> String {
    let mut bytes = vec![0u8; length / 2];
    rand::rng().fill_bytes(&mut bytes);
    hex_encode(&bytes)
}

/// Derive the S256 code challenge for a verifier: base64url (no padding)
/// of the SHA-256 digest of the verifier bytes. Deterministic.
pub fn derive_code_challenge(verifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Generate a random state string for CSRF protection.
pub fn generate_state() -> String {
    generate_code_verifier(STATE_LENGTH)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifier_has_requested_length_and_hex_alphabet() {
        for length in [43, 64, 128] {
            let verifier = generate_code_verifier(length);
            // hex of length/2 bytes; odd lengths round down
            assert_eq!(verifier.len(), (length / 2) * 2);
            assert!(verifier.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn verifiers_are_distinct() {
        assert_ne!(generate_code_verifier(64), generate_code_verifier(64));
    }

    #[test]
    fn challenge_is_deterministic_and_unpadded() {
        let verifier = generate_code_verifier(DEFAULT_VERIFIER_LENGTH);
        let a = derive_code_challenge(&verifier);
        let b = derive_code_challenge(&verifier);
        assert_eq!(a, b);
        assert!(!a.contains('='));
    }

    #[test]
    fn challenge_matches_known_vector() {
        // SHA-256("abc"), base64url, no padding
        assert_eq!(
            derive_code_challenge("abc"),
            "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0"
        );
    }

    #[test]
    fn generated_pair_is_consistent() {
        let pkce = PkceChallenge::generate();
        assert_eq!(pkce.verifier.len(), DEFAULT_VERIFIER_LENGTH);
        assert_eq!(pkce.challenge, derive_code_challenge(&pkce.verifier));
        assert_ne!(pkce.verifier, pkce.challenge);
    }

    #[test]
    fn state_is_fresh_per_call() {
        let a = generate_state();
        let b = generate_state();
        assert_eq!(a.len(), 16);
        assert_ne!(a, b);
    }
}
