//! Measure signature verification throughput across elliptic-curve and EdDSA libraries.
//!
//! Every library under measurement is wrapped in a [Scheme]. A [Case] provisions a key pair,
//! signs a fixed [MESSAGE] exactly once, and then exposes [Case::verify] as the unit of work
//! that benchmarks time. Cases are looked up by name through the [suite].
//!
//! # Example
//! ```rust
//! use sigbench_cryptography::{nist::P256, Case, Scheme, MESSAGE};
//! use rand::rngs::OsRng;
//!
//! // Generate a key pair and sign the digest of the fixed message
//! let case = Case::<P256>::provision(&mut OsRng, MESSAGE).unwrap();
//!
//! // Each call rehashes the message and verifies the compressed signature
//! assert!(case.verify());
//! assert_eq!(case.signature().len(), 64);
//! ```

use bytes::Bytes;
use rand::{CryptoRng, RngCore, SeedableRng};
use thiserror::Error;

pub mod compress;
pub mod ed25519;
pub mod nist;
mod runner;
pub use runner::Case;
pub mod secp256k1;
pub mod sha256;
pub use sha256::{hash, Digest};
pub mod sr25519;
pub mod suite;

/// Message signed (or hashed and then signed) by every benchmark case.
pub const MESSAGE: &[u8] = b"Hello, world!";

/// Errors that can occur while provisioning or checking a benchmark case.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("signing failed")]
    SigningFailed,
    #[error("scalar does not fit in {0} bytes")]
    ScalarOverflow(usize),
    #[error("invalid compressed signature length: {0}")]
    InvalidLength(usize),
    #[error("{scheme}: setup failed: {source}")]
    Setup {
        scheme: &'static str,
        source: Box<Error>,
    },
    #[error("{0}: known-good signature failed verification")]
    Consistency(&'static str),
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
}

/// Input consumed by [Scheme::sign] and [Scheme::verify].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    /// The SHA-256 [Digest] of the message, recomputed on every verification.
    Digest,
    /// The raw message (any hashing happens inside the library).
    Message,
}

/// A signature scheme as exposed by a particular library.
///
/// Signatures are exchanged in their wire encoding so that every verification pays the cost
/// of decoding, just as it would when the signature arrives over a network.
pub trait Scheme: Sized + Send + Sync + 'static {
    /// Name used to select the scheme and to label its benchmarks.
    const NAME: &'static str;

    /// Whether the scheme signs the digest of the message or the message itself.
    const PAYLOAD: Payload;

    /// Hex-encoded private key to provision instead of a random one.
    const SECRET: Option<&'static str> = None;

    /// Decoded public key, prepared once during setup.
    type PublicKey: Clone + Send + Sync;

    /// Create a fresh key pair using the supplied RNG.
    fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error>;

    /// Create a key pair from raw private key bytes.
    fn from_secret(secret: &[u8]) -> Result<Self, Error>;

    /// Create a key pair from a seed.
    ///
    /// # Warning
    ///
    /// This function is insecure and should only be used for examples
    /// and testing.
    fn from_seed(seed: u64) -> Result<Self, Error> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::from_rng(&mut rng)
    }

    /// Returns the public key corresponding to this key pair.
    fn public_key(&self) -> Self::PublicKey;

    /// Sign a payload, returning the wire encoding of the signature.
    fn sign(&self, payload: &[u8]) -> Result<Bytes, Error>;

    /// Verify the wire encoding of a signature over a payload.
    ///
    /// Malformed signatures are rejected (never a panic).
    fn verify(public_key: &Self::PublicKey, payload: &[u8], signature: &[u8]) -> bool;
}
