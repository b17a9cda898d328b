use super::{PRIVATE_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::{Error, Payload, Scheme};
use bytes::Bytes;
use libsecp256k1::{Message, PublicKey, SecretKey, Signature};
use rand::{CryptoRng, RngCore};

/// secp256k1 key pair backed by the pure Rust `libsecp256k1` crate.
///
/// Cases for this scheme are provisioned from [Parity::SECRET] rather than a random key.
#[derive(Clone)]
pub struct Parity {
    secret: SecretKey,
    public: PublicKey,
}

impl Parity {
    fn from_secret_key(secret: SecretKey) -> Self {
        let public = PublicKey::from_secret_key(&secret);
        Self { secret, public }
    }
}

impl Scheme for Parity {
    const NAME: &'static str = "secp256k1-parity";
    const PAYLOAD: Payload = Payload::Digest;
    const SECRET: Option<&'static str> = Some(
        "22a47fa09a223f2aa079edf85a7c2d4f87
         20ee63e502ee2869afab7de234b80c",
    );

    type PublicKey = PublicKey;

    fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        // Rejection sampling: zero and values above the group order are not valid keys.
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        loop {
            rng.fill_bytes(&mut bytes);
            if let Ok(secret) = SecretKey::parse(&bytes) {
                return Ok(Self::from_secret_key(secret));
            }
        }
    }

    fn from_secret(secret: &[u8]) -> Result<Self, Error> {
        let secret = SecretKey::parse_slice(secret).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self::from_secret_key(secret))
    }

    fn public_key(&self) -> PublicKey {
        self.public
    }

    fn sign(&self, payload: &[u8]) -> Result<Bytes, Error> {
        let message = Message::parse_slice(payload).map_err(|_| Error::SigningFailed)?;
        let (signature, _) = libsecp256k1::sign(&message, &self.secret);
        Ok(Bytes::copy_from_slice(&signature.serialize()))
    }

    fn verify(public_key: &PublicKey, payload: &[u8], signature: &[u8]) -> bool {
        if signature.len() != SIGNATURE_LENGTH {
            return false;
        }
        let signature = match Signature::parse_standard_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        let message = match Message::parse_slice(payload) {
            Ok(message) => message,
            Err(_) => return false,
        };
        libsecp256k1::verify(&message, &signature, public_key)
    }
}
