use super::SIGNATURE_LENGTH;
use crate::{Error, Payload, Scheme};
use ::secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, PublicKey, SecretKey, SECP256K1,
};
use bytes::Bytes;
use rand::{CryptoRng, RngCore};

/// secp256k1 key pair backed by the `secp256k1` crate (bindings to `libsecp256k1`).
#[derive(Clone)]
pub struct Recoverable {
    secret: SecretKey,
}

impl Scheme for Recoverable {
    const NAME: &'static str = "secp256k1-recoverable";
    const PAYLOAD: Payload = Payload::Digest;

    type PublicKey = PublicKey;

    fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        Ok(Self {
            secret: SecretKey::new(rng),
        })
    }

    fn from_secret(secret: &[u8]) -> Result<Self, Error> {
        let secret = SecretKey::from_slice(secret).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self { secret })
    }

    fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(SECP256K1, &self.secret)
    }

    fn sign(&self, payload: &[u8]) -> Result<Bytes, Error> {
        let message = Message::from_digest_slice(payload).map_err(|_| Error::SigningFailed)?;
        let (recovery_id, signature) = SECP256K1
            .sign_ecdsa_recoverable(&message, &self.secret)
            .serialize_compact();
        let mut encoded = Vec::with_capacity(SIGNATURE_LENGTH + 1);
        encoded.extend_from_slice(&signature);
        encoded.push(recovery_id.to_i32() as u8);
        Ok(Bytes::from(encoded))
    }

    fn verify(public_key: &PublicKey, payload: &[u8], signature: &[u8]) -> bool {
        if signature.len() != SIGNATURE_LENGTH + 1 {
            return false;
        }
        let (signature, recovery_id) = signature.split_at(SIGNATURE_LENGTH);
        let recovery_id = match RecoveryId::from_i32(recovery_id[0] as i32) {
            Ok(recovery_id) => recovery_id,
            Err(_) => return false,
        };
        let signature = match RecoverableSignature::from_compact(signature, recovery_id) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        let message = match Message::from_digest_slice(payload) {
            Ok(message) => message,
            Err(_) => return false,
        };

        // V must recover the expected key
        match SECP256K1.recover_ecdsa(&message, &signature) {
            Ok(recovered) if recovered == *public_key => {}
            _ => return false,
        }
        SECP256K1
            .verify_ecdsa(&message, &signature.to_standard(), public_key)
            .is_ok()
    }
}
