//! Fixed-width hex decoding shared by every parse path.

use crate::error::DecodeError;

/// Decode `hex` into exactly `N` bytes.
///
/// Fails on odd length or non-hex characters, and on clean hex of the wrong
/// width. Nothing is truncated or padded. Both letter cases are accepted.
pub(crate) fn decode_array<const N: usize>(hex: &str) -> Result<[u8; N], DecodeError> {
    let bytes = hex::decode(hex)?;
    <[u8; N]>::try_from(bytes).map_err(|rejected| DecodeError::Length {
        expected: N,
        found: rejected.len(),
    })
}

/// Serde adapter: fixed-width byte arrays travel as lowercase hex strings
/// and come back through [`decode_array`].
#[cfg(feature = "serde")]
pub(crate) mod hex_serde {
    use serde::{Deserialize as _, Deserializer, Serializer};

    pub(crate) fn serialize<const N: usize, S: Serializer>(
        bytes: &[u8; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub(crate) fn deserialize<'de, const N: usize, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let hex = String::deserialize(deserializer)?;
        super::decode_array(&hex).map_err(serde::de::Error::custom)
    }
}
