//! Short code generation.
//!
//! Derives compact, URL-safe identifiers for target URLs. Codes are salted,
//! so repeated calls for the same URL yield independent codes; global
//! uniqueness is enforced by the mapping store, not here.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Number of digest bytes encoded into the final code.
///
/// 6 bytes of URL-safe base64 yield an 8-character code with 48 bits of
/// collision resistance per code.
const CODE_LENGTH_BYTES: usize = 6;

/// Bytes of random salt folded into the digest.
const SALT_LENGTH_BYTES: usize = 8;

/// Generates a fixed-width, URL-safe short code for a target URL.
///
/// SHA-256 over a random salt followed by the URL, truncated to
/// [`CODE_LENGTH_BYTES`] and encoded as URL-safe base64 without padding.
/// The output is always exactly 8 characters regardless of input length.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code(target_url: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH_BYTES];
    getrandom::fill(&mut salt).expect("Failed to generate random bytes");

    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(target_url.as_bytes());
    let digest = hasher.finalize();

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..CODE_LENGTH_BYTES])
}
