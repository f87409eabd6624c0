//! Protocol-wide constants for the secp256k1 instantiation.

/// Domain separator for the Cashu hash-to-curve map.
///
/// Prepended to the message before the first SHA-256 pass:
/// `msg_hash = SHA256(DOMAIN_SEPARATOR || msg)`. Deployed mints and wallets
/// use exactly these bytes; changing them breaks interoperability.
pub const DOMAIN_SEPARATOR: &[u8; 28] = b"Secp256k1_HashToCurve_Cashu_";

/// Upper bound (exclusive) on the hash-to-curve counter.
///
/// Counters `0..MAX_HASH_TO_CURVE_ATTEMPTS` are tried, i.e. at most
/// $2^{32} - 1$ candidates. About half of all x-coordinates lie on the
/// curve, so the search practically ends at counter 0 or 1.
pub const MAX_HASH_TO_CURVE_ATTEMPTS: u32 = u32::MAX;

/// Width of a compressed SEC1 point encoding.
pub const POINT_LEN: usize = 33;

/// Width of a big-endian scalar encoding.
pub const SCALAR_LEN: usize = 32;

/// SEC1 tag of a compressed point with even y-coordinate.
///
/// Hash-to-curve candidates always use this tag.
pub const EVEN_Y_TAG: u8 = 0x02;

/// Compressed encoding of the secp256k1 base point $\mathcal{G}$.
pub const GENERATOR: [u8; POINT_LEN] = [
    0x02, 0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b,
    0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17,
    0x98,
];
