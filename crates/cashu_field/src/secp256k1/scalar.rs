use core::{fmt, str::FromStr};

use ff::PrimeField as _;
use k256::{FieldBytes, NonZeroScalar, ProjectivePoint};

use super::{SECP256K1, Secp256k1Field, Secp256k1Point};
use crate::{
    algebra::{Field as _, Point as _, Scalar},
    constants::SCALAR_LEN,
    error::{DecodeError, GroupError},
};

/// A secp256k1 scalar as 32 big-endian bytes.
///
/// Valid iff the integer lies in $[1, n-1]$ for the group order $n$. The
/// bytes are kept exactly as given: no reduction mod $n$, no
/// normalization of the hex form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "curve-qualified names keep the algebra trait names free"
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Secp256k1Scalar {
    #[cfg_attr(feature = "serde", serde(skip))]
    field: Secp256k1Field,
    #[cfg_attr(feature = "serde", serde(with = "crate::encoding::hex_serde"))]
    bytes: [u8; SCALAR_LEN],
}

impl Secp256k1Scalar {
    /// Wrap a big-endian encoding without validating it.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SCALAR_LEN]) -> Self {
        Self {
            field: SECP256K1,
            bytes,
        }
    }

    /// The big-endian encoding.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; SCALAR_LEN] {
        self.bytes
    }

    /// The `k256` scalar, if the encoding is canonical and nonzero.
    pub(super) fn to_k256(self) -> Result<k256::Scalar, GroupError> {
        Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(FieldBytes::from(self.bytes)))
            .map(|nonzero| *nonzero)
            .ok_or(GroupError::InvalidScalar)
    }
}

impl Scalar for Secp256k1Scalar {
    type Field = Secp256k1Field;

    fn field(&self) -> &Secp256k1Field {
        &self.field
    }

    fn to_point(&self) -> Result<Secp256k1Point, GroupError> {
        Secp256k1Point::from_projective(ProjectivePoint::GENERATOR * self.to_k256()?)
    }

    fn sign(&self, point: &Secp256k1Point) -> Result<Secp256k1Point, GroupError> {
        point.mul(self)
    }

    fn is_member(&self) -> bool {
        self.to_k256().is_ok()
    }

    fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl From<NonZeroScalar> for Secp256k1Scalar {
    fn from(scalar: NonZeroScalar) -> Self {
        let inner: k256::Scalar = *scalar;
        Self::from_bytes(inner.to_repr().into())
    }
}

impl From<[u8; SCALAR_LEN]> for Secp256k1Scalar {
    fn from(bytes: [u8; SCALAR_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Secp256k1Scalar> for [u8; SCALAR_LEN] {
    fn from(scalar: Secp256k1Scalar) -> Self {
        scalar.to_bytes()
    }
}

impl fmt::Display for Secp256k1Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Secp256k1Scalar {
    type Err = DecodeError;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        SECP256K1.hex_to_scalar(hex)
    }
}
