//! # Password Verification
//!
//! Constant-time verification of the shared admin password.
//!
//! The configured password is reduced to a SHA-256 digest at startup
//! (see [`crate::config::auth::AuthConfig`]); login candidates are digested
//! the same way and compared with [`subtle::ConstantTimeEq`] so the compare
//! cannot leak prefix length through timing.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Reduces a password string to a fixed-length SHA-256 digest.
///
/// # Example
/// ```
/// use festa_web::auth::password::derive_digest;
///
/// let a = derive_digest("festa2024");
/// let b = derive_digest("festa2024");
/// assert_eq!(a, b);
/// ```
pub fn derive_digest(password: &str) -> [u8; 32] {
    let digest = Sha256::digest(password.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest[..32]);
    out
}

/// Verifies a login candidate against the configured digest in constant time.
pub fn verify(candidate: &str, expected_digest: &[u8; 32]) -> bool {
    let candidate_digest = derive_digest(candidate);
    candidate_digest.ct_eq(expected_digest).into()
}
