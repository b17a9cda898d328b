use super::SIGNATURE_LENGTH;
use crate::{Error, Payload, Scheme};
use bytes::Bytes;
use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use rand::{CryptoRng, RngCore};

/// secp256k1 key pair backed by the RustCrypto `k256` crate.
#[derive(Clone)]
pub struct K256 {
    signer: SigningKey,
}

impl Scheme for K256 {
    const NAME: &'static str = "secp256k1-k256";
    const PAYLOAD: Payload = Payload::Message;

    type PublicKey = VerifyingKey;

    fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        Ok(Self {
            signer: SigningKey::random(rng),
        })
    }

    fn from_secret(secret: &[u8]) -> Result<Self, Error> {
        let signer = SigningKey::from_slice(secret).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self { signer })
    }

    fn public_key(&self) -> VerifyingKey {
        self.signer.verifying_key().to_owned()
    }

    fn sign(&self, payload: &[u8]) -> Result<Bytes, Error> {
        let signature: Signature = self
            .signer
            .try_sign(payload)
            .map_err(|_| Error::SigningFailed)?;
        Ok(Bytes::copy_from_slice(&signature.to_bytes()))
    }

    fn verify(public_key: &VerifyingKey, payload: &[u8], signature: &[u8]) -> bool {
        if signature.len() != SIGNATURE_LENGTH {
            return false;
        }
        let signature = match Signature::from_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        public_key.verify(payload, &signature).is_ok()
    }
}
