//! Sr25519 (Schnorr signatures over Ristretto25519) implementation of the [Scheme] trait.
//!
//! This implementation uses the `schnorrkel` crate. Messages are signed under the `substrate`
//! signing context and mini secret keys are expanded the same way Ed25519 expands its seeds.
//! Signing draws a fresh nonce, so two signatures over the same message differ.
//!
//! # Example
//! ```rust
//! use sigbench_cryptography::{sr25519::Sr25519, Scheme, MESSAGE};
//! use rand::rngs::OsRng;
//!
//! let signer = Sr25519::from_rng(&mut OsRng).unwrap();
//! let signature = signer.sign(MESSAGE).unwrap();
//! assert!(Sr25519::verify(&signer.public_key(), MESSAGE, &signature));
//! ```

use crate::{Error, Payload, Scheme};
use bytes::Bytes;
use rand::{CryptoRng, RngCore};
use schnorrkel::{signing_context, ExpansionMode, Keypair, MiniSecretKey, PublicKey, Signature};

/// Signing context shared by signer and verifier.
const SIGNING_CONTEXT: &[u8] = b"substrate";

/// Sr25519 key pair.
#[derive(Clone)]
pub struct Sr25519 {
    keypair: Keypair,
}

impl Sr25519 {
    fn from_mini(mini: MiniSecretKey) -> Self {
        Self {
            keypair: mini.expand_to_keypair(ExpansionMode::Ed25519),
        }
    }
}

impl Scheme for Sr25519 {
    const NAME: &'static str = "Sr25519";
    const PAYLOAD: Payload = Payload::Message;

    type PublicKey = PublicKey;

    fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        Ok(Self::from_mini(MiniSecretKey::generate_with(rng)))
    }

    fn from_secret(secret: &[u8]) -> Result<Self, Error> {
        let mini = MiniSecretKey::from_bytes(secret).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self::from_mini(mini))
    }

    fn public_key(&self) -> PublicKey {
        self.keypair.public
    }

    fn sign(&self, payload: &[u8]) -> Result<Bytes, Error> {
        let context = signing_context(SIGNING_CONTEXT);
        let signature = self.keypair.sign(context.bytes(payload));
        Ok(Bytes::copy_from_slice(&signature.to_bytes()))
    }

    fn verify(public_key: &PublicKey, payload: &[u8], signature: &[u8]) -> bool {
        let signature = match Signature::from_bytes(signature) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        let context = signing_context(SIGNING_CONTEXT);
        public_key.verify(context.bytes(payload), &signature).is_ok()
    }
}
