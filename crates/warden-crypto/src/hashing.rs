//! Credential hashing using salted SHA-256.

use sha2::{Digest, Sha256};

/// Hash a password bound to its owning username.
///
/// The digest covers the concatenation of the password, the username and
/// the deployment-wide salt, so identical passwords held by different
/// users never produce the same digest. An empty salt is a valid but
/// weaker configuration.
///
/// # Returns
///
/// A lowercase hex string of the SHA-256 digest.
pub fn credential_digest(password: &str, username: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(username.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare two credential digests without leaking the mismatch position
pub fn digests_match(a: &str, b: &str) -> bool {
    constant_time_compare(a.as_bytes(), b.as_bytes())
}

/// Compare two byte slices in constant time
///
/// Prevents timing attacks when comparing secrets such as credential
/// digests.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
