/**
 * Password Hashing
 *
 * Salted one-way hashing for stored credentials, built on bcrypt with
 * its default cost factor (12). The plaintext never leaves this module's
 * arguments and is never logged.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password for storage.
///
/// Uses bcrypt with `DEFAULT_COST`; the salt is generated per call, so
/// hashing the same password twice yields different strings.
pub fn hash_password(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash.
///
/// bcrypt's comparison is constant-time with respect to the hash. A
/// malformed or truncated stored hash verifies as `false` rather than
/// surfacing an error: a login attempt against a corrupt record is a
/// failed login, not a server fault.
pub fn verify_password(plaintext: &str, password_hash: &str) -> bool {
    verify(plaintext, password_hash).unwrap_or(false)
}
