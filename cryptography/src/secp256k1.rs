//! secp256k1 ECDSA as implemented by three different libraries.
//!
//! - [Recoverable] binds `libsecp256k1` (C) through the `secp256k1` crate. It signs the SHA-256
//!   digest of the message and emits 65-byte `R || S || V` signatures (the layout used by
//!   Ethereum). Verification requires `V` to recover the expected public key and then verifies
//!   the 64-byte `R || S` prefix.
//! - [K256] uses the pure Rust `k256` crate and signs the raw message (hashed with SHA-256 by the
//!   library).
//! - [Parity] uses the pure Rust `libsecp256k1` crate, signs the SHA-256 digest and is
//!   provisioned from a fixed private key.
//!
//! All three produce low-S signatures with deterministic nonces (RFC 6979).

mod parity;
pub use parity::Parity;
mod recoverable;
pub use recoverable::Recoverable;
mod rustcrypto;
pub use rustcrypto::K256;

const PRIVATE_KEY_LENGTH: usize = 32;
const SIGNATURE_LENGTH: usize = 64; // R || S

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hash, Scheme, MESSAGE};

    #[test]
    fn test_signature_lengths() {
        let digest = hash(MESSAGE);
        let signer = Recoverable::from_seed(0).unwrap();
        assert_eq!(signer.sign(&digest).unwrap().len(), SIGNATURE_LENGTH + 1);
        let signer = Parity::from_seed(0).unwrap();
        assert_eq!(signer.sign(&digest).unwrap().len(), SIGNATURE_LENGTH);
        let signer = K256::from_seed(0).unwrap();
        assert_eq!(signer.sign(MESSAGE).unwrap().len(), SIGNATURE_LENGTH);
    }

    #[test]
    fn test_cross_library_verification() {
        // Signatures over the same digest with the same key verify under either library.
        let secret = [0x11u8; PRIVATE_KEY_LENGTH];
        let digest = hash(MESSAGE);
        let recoverable = Recoverable::from_secret(&secret).unwrap();
        let parity = Parity::from_secret(&secret).unwrap();

        let signature = recoverable.sign(&digest).unwrap();
        assert!(Parity::verify(
            &parity.public_key(),
            &digest,
            &signature[..SIGNATURE_LENGTH]
        ));

        // Only the matching recovery id verifies once appended
        let signature = parity.sign(&digest).unwrap();
        let verified = (0..=3u8)
            .filter(|recovery_id| {
                let mut encoded = signature.to_vec();
                encoded.push(*recovery_id);
                Recoverable::verify(&recoverable.public_key(), &digest, &encoded)
            })
            .count();
        assert_eq!(verified, 1);
    }

    #[test]
    fn test_digest_payload_must_be_32_bytes() {
        let signer = Parity::from_seed(0).unwrap();
        assert!(signer.sign(b"short").is_err());
        let signer = Recoverable::from_seed(0).unwrap();
        assert!(signer.sign(b"short").is_err());
    }
}
