//! ECDSA over the NIST prime curves (P-224, P-256, P-384 and P-521).
//!
//! Each scheme signs the SHA-256 digest of the message with the RustCrypto curve crates and
//! emits the signature in the fixed-width encoding of [crate::compress]. Verification decodes
//! `(r, s)` on every call and rebuilds the library signature from the scalars.
//!
//! A digest shorter than the field (P-384 and P-521) is left-padded with zeros before it is
//! handed to the library, which leaves its integer value unchanged. A longer digest (P-224) is
//! truncated to its leftmost bytes by the library.
//!
//! # Example
//! ```rust
//! use sigbench_cryptography::{hash, nist::P521, Scheme, MESSAGE};
//! use rand::rngs::OsRng;
//!
//! let signer = P521::from_rng(&mut OsRng).unwrap();
//! let digest = hash(MESSAGE);
//! let signature = signer.sign(&digest).unwrap();
//! assert_eq!(signature.len(), 132);
//! assert!(P521::verify(&signer.public_key(), &digest, &signature));
//! ```

use crate::{compress, Error, Payload, Scheme};
use bytes::Bytes;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use std::borrow::Cow;

/// Left-pad `digest` with zeros to `field_length` bytes when it is shorter.
fn prehash(digest: &[u8], field_length: usize) -> Cow<'_, [u8]> {
    if digest.len() >= field_length {
        return Cow::Borrowed(digest);
    }
    let mut padded = vec![0u8; field_length];
    padded[field_length - digest.len()..].copy_from_slice(digest);
    Cow::Owned(padded)
}

/// Serialize `value` into a curve's big-endian field representation.
fn field_bytes<F: Default + AsMut<[u8]>>(value: &BigUint) -> Option<F> {
    let bytes = value.to_bytes_be();
    let mut field = F::default();
    let buf = field.as_mut();
    if bytes.len() > buf.len() {
        return None;
    }
    let offset = buf.len() - bytes.len();
    buf[offset..].copy_from_slice(&bytes);
    Some(field)
}

macro_rules! impl_nist_scheme {
    ($scheme:ident, $curve:ident, $name:literal, $bits:literal) => {
        #[doc = concat!("ECDSA over ", $name, " with ", stringify!($bits), "-bit compressed signatures.")]
        #[derive(Clone)]
        pub struct $scheme {
            signer: $curve::ecdsa::SigningKey,
        }

        impl $scheme {
            /// Bit size used to compress signatures.
            pub const BITS: usize = $bits;

            /// Length of a compressed signature.
            pub const SIGNATURE_LENGTH: usize = compress::encoded_len($bits);
        }

        impl Scheme for $scheme {
            const NAME: &'static str = $name;
            const PAYLOAD: Payload = Payload::Digest;

            type PublicKey = $curve::ecdsa::VerifyingKey;

            fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
                Ok(Self {
                    signer: $curve::ecdsa::SigningKey::random(rng),
                })
            }

            fn from_secret(secret: &[u8]) -> Result<Self, Error> {
                let signer = $curve::ecdsa::SigningKey::from_slice(secret)
                    .map_err(|_| Error::InvalidPrivateKey)?;
                Ok(Self { signer })
            }

            fn public_key(&self) -> Self::PublicKey {
                $curve::ecdsa::VerifyingKey::from(&self.signer)
            }

            fn sign(&self, payload: &[u8]) -> Result<Bytes, Error> {
                use $curve::ecdsa::signature::hazmat::PrehashSigner;

                let prehash = prehash(payload, $bits / 8);
                let signature: $curve::ecdsa::Signature = self
                    .signer
                    .sign_prehash(&prehash)
                    .map_err(|_| Error::SigningFailed)?;
                let (r, s) = signature.split_bytes();
                let encoded = compress::encode(
                    &BigUint::from_bytes_be(&r),
                    &BigUint::from_bytes_be(&s),
                    $bits,
                )?;
                Ok(Bytes::from(encoded))
            }

            fn verify(public_key: &Self::PublicKey, payload: &[u8], signature: &[u8]) -> bool {
                use $curve::ecdsa::signature::hazmat::PrehashVerifier;

                if signature.len() != Self::SIGNATURE_LENGTH {
                    return false;
                }
                let (r, s) = match compress::decode(signature) {
                    Ok(scalars) => scalars,
                    Err(_) => return false,
                };
                let (r, s) = match (
                    field_bytes::<$curve::FieldBytes>(&r),
                    field_bytes::<$curve::FieldBytes>(&s),
                ) {
                    (Some(r), Some(s)) => (r, s),
                    _ => return false,
                };
                let signature = match $curve::ecdsa::Signature::from_scalars(r, s) {
                    Ok(signature) => signature,
                    Err(_) => return false,
                };
                let prehash = prehash(payload, $bits / 8);
                public_key.verify_prehash(&prehash, &signature).is_ok()
            }
        }
    };
}

impl_nist_scheme!(P224, p224, "P224", 224);
impl_nist_scheme!(P256, p256, "P256", 256);
impl_nist_scheme!(P384, p384, "P384", 384);
impl_nist_scheme!(P521, p521, "P521", 528);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hash, MESSAGE};
    use rand::rngs::OsRng;
    use sigbench_utils::{from_hex_formatted, hex};

    fn test_compressed_round_trip<S: Scheme>(bits: usize) {
        let signer = S::from_rng(&mut OsRng).unwrap();
        let digest = hash(MESSAGE);
        let signature = signer.sign(&digest).unwrap();
        assert_eq!(signature.len(), compress::encoded_len(bits));

        // Decompressing and compressing again reproduces the exact scalars
        let (r, s) = compress::decode(&signature).unwrap();
        let recompressed = compress::encode(&r, &s, bits).unwrap();
        assert_eq!(recompressed, signature.to_vec());
        assert_eq!(compress::decode(&recompressed).unwrap(), (r, s));

        assert!(S::verify(&signer.public_key(), &digest, &recompressed));
    }

    #[test]
    fn test_p224_compressed() {
        test_compressed_round_trip::<P224>(224);
    }

    #[test]
    fn test_p256_compressed() {
        test_compressed_round_trip::<P256>(256);
        assert_eq!(P256::SIGNATURE_LENGTH, 64);
    }

    #[test]
    fn test_p384_compressed() {
        test_compressed_round_trip::<P384>(384);
    }

    #[test]
    fn test_p521_compressed() {
        test_compressed_round_trip::<P521>(528);
        assert_eq!(P521::SIGNATURE_LENGTH, 132);
    }

    #[test]
    fn test_p521_leading_bytes() {
        // Scalars are below a 521-bit order, so each 66-byte half starts with 0x00 or 0x01.
        let signer = P521::from_seed(0).unwrap();
        for i in 0..8u8 {
            let signature = signer.sign(&hash(&[i])).unwrap();
            assert!(signature[0] <= 0x01);
            assert!(signature[66] <= 0x01);
        }
    }

    #[test]
    fn test_prehash_padding() {
        let digest = [0xab; 32];
        assert_eq!(prehash(&digest, 28).as_ref(), &digest[..]);
        assert_eq!(prehash(&digest, 32).as_ref(), &digest[..]);
        let padded = prehash(&digest, 66);
        assert_eq!(padded.len(), 66);
        assert!(padded[..34].iter().all(|b| *b == 0));
        assert_eq!(&padded[34..], &digest[..]);
    }

    #[test]
    fn test_field_bytes_overflow() {
        let too_big = BigUint::from_bytes_be(&[0x01; 33]);
        assert!(field_bytes::<p256::FieldBytes>(&too_big).is_none());
        let fits = BigUint::from(5u8);
        let field = field_bytes::<p256::FieldBytes>(&fits).unwrap();
        assert_eq!(field[31], 5);
    }

    #[test]
    fn test_zero_scalars_rejected() {
        let signer = P256::from_seed(0).unwrap();
        let digest = hash(MESSAGE);
        assert!(!P256::verify(&signer.public_key(), &digest, &[0u8; 64]));
    }

    #[test]
    fn test_scalar_above_order_rejected() {
        let signer = P256::from_seed(0).unwrap();
        let digest = hash(MESSAGE);
        let signature = signer.sign(&digest).unwrap();
        let mut forged = signature.to_vec();
        forged[..32].copy_from_slice(&[0xff; 32]);
        assert!(!P256::verify(&signer.public_key(), &digest, &forged));
    }

    // RFC 6979 A.2.5 (P-256 with SHA-256); signatures are not normalized
    #[test]
    fn test_rfc6979_p256() {
        let private_key = from_hex_formatted(
            "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
        )
        .unwrap();
        let signer = P256::from_secret(&private_key).unwrap();
        let cases = [
            (
                &b"sample"[..],
                "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716
                 f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8",
            ),
            (
                &b"test"[..],
                "f1abb023518351cd71d881567b1ea663ed3efcf6c5132b354f28d3b0b7d38367
                 019f4113742a2b14bd25926b49c649155f267e60d3814b4c0cc84250e46f0083",
            ),
        ];
        for (message, expected) in cases {
            let digest = hash(message);
            let signature = signer.sign(&digest).unwrap();
            assert_eq!(
                hex(&signature),
                hex(&from_hex_formatted(expected).unwrap())
            );
            assert!(P256::verify(&signer.public_key(), &digest, &signature));
        }
    }

    #[test]
    fn test_public_key_from_signer() {
        let signer = P521::from_seed(9).unwrap();
        let digest = hash(MESSAGE);
        let signature = signer.sign(&digest).unwrap();
        let other = P521::from_seed(10).unwrap();
        let same = P521::from_seed(9).unwrap();
        assert!(P521::verify(&same.public_key(), &digest, &signature));
        assert!(!P521::verify(&other.public_key(), &digest, &signature));
    }

    #[test]
    fn test_from_secret_matches_public_key() {
        let private_key = from_hex_formatted(
            "c9806898a0334916c860748880a541f093b579a9b1f32934d86c363c39800357",
        )
        .unwrap();
        let first = P256::from_secret(&private_key).unwrap();
        let second = P256::from_secret(&private_key).unwrap();
        assert_eq!(first.public_key(), second.public_key());
    }
}
