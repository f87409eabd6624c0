//! The secp256k1 instantiation.
//!
//! ## Encodings
//!
//! | Type | Bytes | Encoding |
//! | ---- | ----- | -------- |
//! | [`Secp256k1Point`] | 33 | SEC1 compressed: parity tag `0x02`/`0x03` then big-endian $x$ |
//! | [`Secp256k1Scalar`] | 32 | big-endian integer, valid in $[1, n-1]$ |
//!
//! Curve arithmetic and membership tests are delegated to `k256`.
//!
//! ## Hash-to-curve
//!
//! $$\mathsf{msg\_hash} = \text{SHA256}(\text{sep} \| m)$$
//! $$Y_i = \mathtt{0x02} \| \text{SHA256}(\mathsf{msg\_hash} \| \text{LE32}(i))$$
//!
//! The output is $Y_i$ for the smallest counter $i$ whose candidate decodes
//! to a curve point. Candidates always carry the even-y tag, so the output is
//! never the negation of another output's encoding.

mod point;
mod scalar;

use rand::{CryptoRng, RngCore};
use sha2::{Digest as _, Sha256};

pub use point::Secp256k1Point;
pub use scalar::Secp256k1Scalar;

use crate::{
    algebra::{Field, Point as _},
    constants::{
        DOMAIN_SEPARATOR, EVEN_Y_TAG, GENERATOR, MAX_HASH_TO_CURVE_ATTEMPTS, POINT_LEN, SCALAR_LEN,
    },
    encoding,
    error::{DecodeError, HashToCurveError},
};

/// The secp256k1 group with the Cashu hash-to-curve domain.
///
/// Zero-sized and stateless: every instance is interchangeable, so values
/// produced by different instances always combine correctly. [`SECP256K1`]
/// is the canonical instance.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "curve-qualified names keep the algebra trait names free"
)]
pub struct Secp256k1Field;

/// Process-wide secp256k1 field.
pub const SECP256K1: Secp256k1Field = Secp256k1Field;

impl Field for Secp256k1Field {
    type Point = Secp256k1Point;
    type Scalar = Secp256k1Scalar;

    fn generator(&self) -> Secp256k1Point {
        Secp256k1Point::from_bytes(GENERATOR)
    }

    fn hash_to_curve(&self, msg: &[u8]) -> Result<Secp256k1Point, HashToCurveError> {
        search(&message_hash(msg), MAX_HASH_TO_CURVE_ATTEMPTS)
    }

    fn hex_to_point(&self, hex: &str) -> Result<Secp256k1Point, DecodeError> {
        encoding::decode_array::<POINT_LEN>(hex).map(Secp256k1Point::from_bytes)
    }

    fn hex_to_scalar(&self, hex: &str) -> Result<Secp256k1Scalar, DecodeError> {
        encoding::decode_array::<SCALAR_LEN>(hex).map(Secp256k1Scalar::from_bytes)
    }

    fn random_scalar(&self, rng: &mut (impl RngCore + CryptoRng)) -> Secp256k1Scalar {
        Secp256k1Scalar::from(k256::NonZeroScalar::random(rng))
    }
}

/// `SHA256(DOMAIN_SEPARATOR || msg)`.
fn message_hash(msg: &[u8]) -> [u8; 32] {
    Sha256::new()
        .chain_update(DOMAIN_SEPARATOR)
        .chain_update(msg)
        .finalize()
        .into()
}

/// The counter-`i` candidate: `0x02 || SHA256(msg_hash || LE32(i))`.
fn candidate(msg_hash: &[u8; 32], counter: u32) -> Secp256k1Point {
    let x: [u8; 32] = Sha256::new()
        .chain_update(msg_hash)
        .chain_update(counter.to_le_bytes())
        .finalize()
        .into();

    let mut bytes = [EVEN_Y_TAG; POINT_LEN];
    let (_tag, coordinate) = bytes.split_at_mut(1);
    coordinate.copy_from_slice(&x);
    Secp256k1Point::from_bytes(bytes)
}

/// Try counters `0..attempts` in order; return the first candidate on the
/// curve.
fn search(msg_hash: &[u8; 32], attempts: u32) -> Result<Secp256k1Point, HashToCurveError> {
    (0..attempts)
        .map(|counter| candidate(msg_hash, counter))
        .find(Secp256k1Point::is_member)
        .ok_or(HashToCurveError::Exhausted { attempts })
}
