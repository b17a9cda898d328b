use super::{PRIVATE_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::{Error, Payload, Scheme};
use bytes::Bytes;
use ed25519_consensus::{Signature, SigningKey, VerificationKey};
use rand::{CryptoRng, RngCore};

/// Ed25519 key pair backed by `ed25519-consensus`.
#[derive(Clone)]
pub struct Ed25519 {
    signer: SigningKey,
    verifier: VerificationKey,
}

impl Ed25519 {
    fn from_signer(signer: SigningKey) -> Self {
        let verifier = signer.verification_key();
        Self { signer, verifier }
    }
}

impl Scheme for Ed25519 {
    const NAME: &'static str = "Ed25519";
    const PAYLOAD: Payload = Payload::Digest;

    type PublicKey = VerificationKey;

    fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        Ok(Self::from_signer(SigningKey::new(rng)))
    }

    fn from_secret(secret: &[u8]) -> Result<Self, Error> {
        let secret: [u8; PRIVATE_KEY_LENGTH] =
            secret.try_into().map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self::from_signer(SigningKey::from(secret)))
    }

    fn public_key(&self) -> VerificationKey {
        self.verifier
    }

    fn sign(&self, payload: &[u8]) -> Result<Bytes, Error> {
        let signature = self.signer.sign(payload);
        Ok(Bytes::copy_from_slice(&signature.to_bytes()))
    }

    fn verify(public_key: &VerificationKey, payload: &[u8], signature: &[u8]) -> bool {
        let signature: [u8; SIGNATURE_LENGTH] = match signature.try_into() {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        public_key
            .verify(&Signature::from(signature), payload)
            .is_ok()
    }
}
