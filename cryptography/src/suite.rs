//! Registry of every scheme under measurement.
//!
//! Schemes are selected by [Scheme::NAME], ignoring ASCII case.

use crate::{ed25519, nist, secp256k1, sr25519, Case, Error, Scheme, MESSAGE};
use rand::{CryptoRng, RngCore};
use tracing::debug;

macro_rules! registry {
    ($($scheme:ty),+ $(,)?) => {
        /// Names of all registered schemes, in registration order.
        pub const NAMES: &[&str] = &[$(<$scheme as Scheme>::NAME),+];

        /// Provision the named scheme's case and verify it `rounds` times.
        pub fn check<R: RngCore + CryptoRng>(
            name: &str,
            rounds: usize,
            rng: &mut R,
        ) -> Result<(), Error> {
            $(
                if name.eq_ignore_ascii_case(<$scheme as Scheme>::NAME) {
                    return run::<$scheme, R>(rounds, rng);
                }
            )+
            Err(Error::UnknownScheme(name.to_string()))
        }
    };
}

registry!(
    ed25519::Ed25519,
    ed25519::Ed25519Dalek,
    nist::P224,
    nist::P256,
    nist::P384,
    nist::P521,
    secp256k1::Recoverable,
    secp256k1::K256,
    secp256k1::Parity,
    sr25519::Sr25519,
);

/// Returns the registered spelling of `name`, if any scheme matches it.
pub fn resolve(name: &str) -> Option<&'static str> {
    NAMES
        .iter()
        .copied()
        .find(|registered| registered.eq_ignore_ascii_case(name))
}

fn run<S: Scheme, R: RngCore + CryptoRng>(rounds: usize, rng: &mut R) -> Result<(), Error> {
    let case = Case::<S>::provision(rng, MESSAGE)?;
    case.check_rounds(rounds)?;
    debug!(scheme = S::NAME, rounds, "checked case");
    Ok(())
}
