//! Salted password hashing.
//!
//! Digests are HMAC-SHA256 keyed by a random per-user salt and stored as
//! `v1$<salt-hex>$<mac-hex>`. Verification is constant-time via
//! [`hmac::Mac::verify_slice`].

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const SALT_LEN: usize = 16;
const FORMAT_VERSION: &str = "v1";

/// Errors raised when a stored digest cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordHashError {
    #[error("unsupported digest format")]
    UnsupportedFormat,
    #[error("malformed digest encoding")]
    MalformedEncoding,
}

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);

    let mac = compute_mac(&salt, password);

    format!("{FORMAT_VERSION}${}${}", hex::encode(salt), hex::encode(mac))
}

/// Verifies a password against a stored digest.
///
/// # Errors
///
/// Returns [`PasswordHashError`] if the digest is not in the expected
/// `v1$salt$mac` shape. A wrong password is `Ok(false)`, not an error.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, PasswordHashError> {
    let mut parts = digest.split('$');

    let (version, salt_hex, mac_hex) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(v), Some(s), Some(m), None) => (v, s, m),
        _ => return Err(PasswordHashError::UnsupportedFormat),
    };

    if version != FORMAT_VERSION {
        return Err(PasswordHashError::UnsupportedFormat);
    }

    let salt = hex::decode(salt_hex).map_err(|_| PasswordHashError::MalformedEncoding)?;
    let expected = hex::decode(mac_hex).map_err(|_| PasswordHashError::MalformedEncoding)?;

    let mut mac = HmacSha256::new_from_slice(&salt).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());

    Ok(mac.verify_slice(&expected).is_ok())
}

fn compute_mac(salt: &[u8], password: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(salt).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let digest = hash_password("qwerty");
        assert_eq!(verify_password("qwerty", &digest), Ok(true));
        assert_eq!(verify_password("wrong", &digest), Ok(false));
    }

    #[test]
    fn test_hashes_are_salted() {
        assert_ne!(hash_password("qwerty"), hash_password("qwerty"));
    }

    #[test]
    fn test_malformed_digest_is_rejected() {
        assert_eq!(
            verify_password("pw", "plainhash"),
            Err(PasswordHashError::UnsupportedFormat)
        );
        assert_eq!(
            verify_password("pw", "v2$00$00"),
            Err(PasswordHashError::UnsupportedFormat)
        );
        assert_eq!(
            verify_password("pw", "v1$zz$00"),
            Err(PasswordHashError::MalformedEncoding)
        );
    }
}
