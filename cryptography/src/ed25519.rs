//! Ed25519 implementations of the [Scheme](crate::Scheme) trait.
//!
//! Two libraries are measured:
//! - [Ed25519] uses `ed25519-consensus`, which adheres to a strict set of validation rules for
//!   Ed25519 signatures (ZIP 215). It signs the SHA-256 digest of the message.
//! - [Ed25519Dalek] uses `ed25519-dalek` with strict verification. It signs the raw message.
//!
//! # Example
//! ```rust
//! use sigbench_cryptography::{ed25519::Ed25519, hash, Scheme, MESSAGE};
//! use rand::rngs::OsRng;
//!
//! // Generate a new private key
//! let signer = Ed25519::from_rng(&mut OsRng).unwrap();
//!
//! // Sign the digest of the message
//! let digest = hash(MESSAGE);
//! let signature = signer.sign(&digest).unwrap();
//!
//! // Verify the signature
//! assert!(Ed25519::verify(&signer.public_key(), &digest, &signature));
//! ```

mod consensus;
pub use consensus::Ed25519;
mod dalek;
pub use dalek::Ed25519Dalek;

const PRIVATE_KEY_LENGTH: usize = 32;
const SIGNATURE_LENGTH: usize = 64;
