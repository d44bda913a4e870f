//! Credential Manager
//!
//! Password hashing (PBKDF2-HMAC-SHA512), constant-time hash comparison,
//! and the randomness behind salts and order confirmation codes.

use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::num::NonZeroU32;
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes
pub const KEY_LEN: usize = 64;

/// Random bytes behind an order code (rendered as 6 hex chars)
pub const ORDER_CODE_BYTES: usize = 3;

/// PBKDF2 work factor. Must stay fixed: changing it invalidates every stored hash.
const PBKDF2_ITERATIONS: NonZeroU32 = match NonZeroU32::new(100_000) {
    Some(n) => n,
    None => unreachable!(),
};

static PBKDF2_ALG: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA512;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("system random number generator failed")]
    Rng,
}

/// Fresh random salt
pub fn generate_salt() -> Result<[u8; SALT_LEN], CredentialError> {
    let mut salt = [0u8; SALT_LEN];
    SystemRandom::new()
        .fill(&mut salt)
        .map_err(|_| CredentialError::Rng)?;
    Ok(salt)
}

/// Derive the stored hash for `password` under `salt`.
///
/// Deterministic and deliberately slow; call it from a blocking context.
pub fn derive_key(password: &str, salt: &[u8]) -> [u8; KEY_LEN] {
    let mut out = [0u8; KEY_LEN];
    pbkdf2::derive(
        PBKDF2_ALG,
        PBKDF2_ITERATIONS,
        salt,
        password.as_bytes(),
        &mut out,
    );
    out
}

/// Compare two hashes in constant time. Length mismatch is a non-match.
pub fn verify(candidate: &[u8], stored: &[u8]) -> bool {
    if candidate.len() != stored.len() {
        return false;
    }
    candidate.ct_eq(stored).into()
}

/// Re-derive the key for `password` under `salt` and compare it with
/// `stored` in constant time. Slow like [`derive_key`].
pub fn verify_password(password: &str, salt: &[u8], stored: &[u8]) -> bool {
    if stored.len() != KEY_LEN {
        return false;
    }
    pbkdf2::verify(
        PBKDF2_ALG,
        PBKDF2_ITERATIONS,
        salt,
        password.as_bytes(),
        stored,
    )
    .is_ok()
}

/// Short public order identifier: 3 random bytes as uppercase hex
pub fn generate_order_code() -> Result<String, CredentialError> {
    let mut bytes = [0u8; ORDER_CODE_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| CredentialError::Rng)?;
    Ok(hex::encode_upper(bytes))
}
