use super::{PRIVATE_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::{Error, Payload, Scheme};
use bytes::Bytes;
use ed25519_dalek::{Signature, Signer as _, SigningKey, VerifyingKey};
use rand::{CryptoRng, RngCore};

/// Ed25519 key pair backed by `ed25519-dalek`.
///
/// Verification uses `verify_strict`, which rejects weak public keys and malleable signatures.
#[derive(Clone)]
pub struct Ed25519Dalek {
    signer: SigningKey,
}

impl Scheme for Ed25519Dalek {
    const NAME: &'static str = "Ed25519-dalek";
    const PAYLOAD: Payload = Payload::Message;

    type PublicKey = VerifyingKey;

    fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        Ok(Self {
            signer: SigningKey::generate(rng),
        })
    }

    fn from_secret(secret: &[u8]) -> Result<Self, Error> {
        let secret: [u8; PRIVATE_KEY_LENGTH] =
            secret.try_into().map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self {
            signer: SigningKey::from_bytes(&secret),
        })
    }

    fn public_key(&self) -> VerifyingKey {
        self.signer.verifying_key()
    }

    fn sign(&self, payload: &[u8]) -> Result<Bytes, Error> {
        let signature = self
            .signer
            .try_sign(payload)
            .map_err(|_| Error::SigningFailed)?;
        Ok(Bytes::copy_from_slice(&signature.to_bytes()))
    }

    fn verify(public_key: &VerifyingKey, payload: &[u8], signature: &[u8]) -> bool {
        let signature: [u8; SIGNATURE_LENGTH] = match signature.try_into() {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        public_key
            .verify_strict(payload, &Signature::from_bytes(&signature))
            .is_ok()
    }
}
