//! Provision a key pair, sign once, and verify repeatedly.

use crate::{hash, Error, Payload, Scheme};
use bytes::Bytes;
use rand::{CryptoRng, RngCore};
use sigbench_utils::from_hex_formatted;
use std::hint::black_box;
use tracing::debug;

/// A benchmark case for a single [Scheme].
///
/// Everything a case needs is created during setup and never mutated afterwards, so a case can
/// be verified any number of times (and from any number of threads).
pub struct Case<S: Scheme> {
    message: Vec<u8>,
    public_key: S::PublicKey,
    signature: Bytes,
}

impl<S: Scheme> Case<S> {
    /// Provision the scheme's key pair and sign `message`.
    ///
    /// Uses the scheme's fixed private key when it has one and otherwise draws a fresh key
    /// from `rng`.
    pub fn provision<R: RngCore + CryptoRng>(rng: &mut R, message: &[u8]) -> Result<Self, Error> {
        let signer = match S::SECRET {
            Some(secret) => from_hex_formatted(secret)
                .ok_or(Error::InvalidPrivateKey)
                .and_then(|secret| S::from_secret(&secret)),
            None => S::from_rng(rng),
        }
        .map_err(|err| Error::Setup {
            scheme: S::NAME,
            source: Box::new(err),
        })?;
        Self::with_signer(&signer, message)
    }

    /// Sign `message` with `signer` and confirm the signature verifies.
    pub fn with_signer(signer: &S, message: &[u8]) -> Result<Self, Error> {
        let signature = match S::PAYLOAD {
            Payload::Digest => signer.sign(&hash(message)),
            Payload::Message => signer.sign(message),
        }
        .map_err(|err| Error::Setup {
            scheme: S::NAME,
            source: Box::new(err),
        })?;
        debug!(
            scheme = S::NAME,
            payload = ?S::PAYLOAD,
            signature_len = signature.len(),
            "provisioned case"
        );

        let case = Self {
            message: message.to_vec(),
            public_key: signer.public_key(),
            signature,
        };
        case.check()?;
        Ok(case)
    }

    /// Verify the case's signature once.
    ///
    /// For schemes that sign a digest, the digest is recomputed on every call.
    pub fn verify(&self) -> bool {
        let message = black_box(self.message.as_slice());
        match S::PAYLOAD {
            Payload::Digest => S::verify(&self.public_key, &hash(message), &self.signature),
            Payload::Message => S::verify(&self.public_key, message, &self.signature),
        }
    }

    /// Verify the case's signature once, failing if it is rejected.
    pub fn check(&self) -> Result<(), Error> {
        if !self.verify() {
            return Err(Error::Consistency(S::NAME));
        }
        Ok(())
    }

    /// Verify the case's signature `rounds` times, failing on the first rejection.
    pub fn check_rounds(&self, rounds: usize) -> Result<(), Error> {
        for _ in 0..rounds {
            self.check()?;
        }
        Ok(())
    }

    /// Name of the scheme under measurement.
    pub fn name(&self) -> &'static str {
        S::NAME
    }

    /// Message that was signed.
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Public key used for verification.
    pub fn public_key(&self) -> &S::PublicKey {
        &self.public_key
    }

    /// Wire encoding of the signature.
    pub fn signature(&self) -> &Bytes {
        &self.signature
    }
}
