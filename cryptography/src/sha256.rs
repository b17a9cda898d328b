//! SHA-256 digest of the signed message.
//!
//! This implementation uses the `sha2` crate to generate SHA-256 digests.
//!
//! # Example
//! ```rust
//! use sigbench_cryptography::{hash, MESSAGE};
//!
//! // Hashing is a pure function of the message
//! assert_eq!(hash(MESSAGE), hash(MESSAGE));
//! assert_eq!(hash(MESSAGE).len(), 32);
//! ```

use sha2::{Digest as _, Sha256};
use sigbench_utils::hex;
use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Generate a SHA-256 digest from a message.
pub fn hash(message: &[u8]) -> Digest {
    let array: [u8; DIGEST_LENGTH] = Sha256::digest(message).into();
    Digest::from(array)
}

/// Digest of a SHA-256 hashing operation.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(value: [u8; DIGEST_LENGTH]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Digest {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MESSAGE;

    const HELLO_DIGEST: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
    const MESSAGE_DIGEST: &str = "315f5bdb76d078c43b8ac0064e4a0164612b1fce77c869345bfc94c75894edd3";

    #[test]
    fn test_sha256() {
        let digest = hash(b"hello world");
        assert_eq!(hex(&digest), HELLO_DIGEST);
        assert_eq!(digest.to_string(), HELLO_DIGEST);
        assert_eq!(format!("{:?}", digest), HELLO_DIGEST);
    }

    #[test]
    fn test_message_digest_is_stable() {
        let first = hash(MESSAGE);
        assert_eq!(hex(&first), MESSAGE_DIGEST);
        for _ in 0..100 {
            assert_eq!(hash(MESSAGE), first);
        }
    }

    #[test]
    fn test_sha256_len() {
        assert_eq!(hash(b"").len(), DIGEST_LENGTH);
        assert_eq!(hash(&[1u8; 1024]).as_ref().len(), DIGEST_LENGTH);
    }
}
