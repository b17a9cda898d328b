//! Fixed-width encoding of ECDSA `(r, s)` scalar pairs.
//!
//! A signature over a curve of `bit_size` bits is encoded as `2 * (bit_size / 8)` bytes: `r` in
//! the first half and `s` in the second, each big-endian and zero-padded in its high-order bytes.
//! P-521 scalars are encoded with a `bit_size` of 528 (rounded up to a whole number of bytes).
//!
//! # Example
//! ```rust
//! use num_bigint::BigUint;
//! use sigbench_cryptography::compress::{decode, encode};
//!
//! let r = BigUint::from(7u8);
//! let s = BigUint::from(0x0102u16);
//! let encoded = encode(&r, &s, 256).unwrap();
//! assert_eq!(encoded.len(), 64);
//! assert_eq!(encoded[31], 7);
//! assert_eq!(&encoded[62..], &[0x01, 0x02]);
//! assert_eq!(decode(&encoded).unwrap(), (r, s));
//! ```

use crate::Error;
use num_bigint::BigUint;

/// Length of the encoding for a curve of `bit_size` bits.
pub const fn encoded_len(bit_size: usize) -> usize {
    2 * (bit_size / 8)
}

/// Encode `r` and `s` into a buffer sized for a curve of `bit_size` bits.
///
/// Returns [Error::ScalarOverflow] if either scalar does not fit in half of the buffer.
pub fn encode(r: &BigUint, s: &BigUint, bit_size: usize) -> Result<Vec<u8>, Error> {
    let size = bit_size / 8;
    let mut signature = vec![0u8; 2 * size];
    let (left, right) = signature.split_at_mut(size);
    fill(left, r)?;
    fill(right, s)?;
    Ok(signature)
}

/// Decode a buffer produced by [encode] back into `(r, s)`.
///
/// Returns [Error::InvalidLength] if the buffer cannot be split into two equal halves.
pub fn decode(signature: &[u8]) -> Result<(BigUint, BigUint), Error> {
    if signature.len() % 2 != 0 {
        return Err(Error::InvalidLength(signature.len()));
    }
    let (r, s) = signature.split_at(signature.len() / 2);
    Ok((BigUint::from_bytes_be(r), BigUint::from_bytes_be(s)))
}

// Writes `value` big-endian into the low-order end of `buf`.
fn fill(buf: &mut [u8], value: &BigUint) -> Result<(), Error> {
    let bytes = value.to_bytes_be();
    // Zero serializes as [0].
    let bytes = match bytes.as_slice() {
        [0] => &[][..],
        bytes => bytes,
    };
    if bytes.len() > buf.len() {
        return Err(Error::ScalarOverflow(buf.len()));
    }
    let offset = buf.len() - bytes.len();
    buf[offset..].copy_from_slice(bytes);
    Ok(())
}
